use super::dispatch;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::Simulation;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_key(ev: &web::KeyboardEvent, pressed: bool, sim: &Rc<RefCell<Simulation>>) {
    let code = ev.code();
    let started = sim.borrow().is_running();
    if pressed && input::suppresses_default(&code, started) {
        ev.prevent_default();
    }
    // auto-repeat would re-toggle warp every few frames
    if pressed && ev.repeat() {
        return;
    }
    if let Some(control) = input::control_for_key(&code, pressed, started) {
        dispatch(sim, control);
    }
}

pub fn wire_keyboard(sim: Rc<RefCell<Simulation>>) {
    let Some(window) = web::window() else {
        return;
    };
    for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
        let sim = sim.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_key(&ev, pressed, &sim);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
