use super::dispatch;
use crate::{dom, input};
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{ControlEvent, Simulation};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer(sim: Rc<RefCell<Simulation>>) {
    let Some(window) = web::window() else {
        return;
    };
    wire_mousemove(&window, sim.clone());
    wire_wheel(&window, sim.clone());
    wire_dblclick(&window, sim);
}

fn wire_mousemove(window: &web::Window, sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(w) = web::window() else {
            return;
        };
        let (css_w, css_h) = dom::window_css_size(&w);
        let p = input::normalized_pointer(ev.client_x() as f32, ev.client_y() as f32, css_w, css_h);
        dispatch(&sim, ControlEvent::Pointer(p));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(window: &web::Window, sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        dispatch(&sim, ControlEvent::Wheel(ev.delta_y() as f32));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_dblclick(window: &web::Window, sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        dispatch(&sim, ControlEvent::ToggleCinematic);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref());
    closure.forget();
}
