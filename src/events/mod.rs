mod keyboard;
mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer;

use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{ControlEvent, Simulation};

/// Forward a control to the simulation and mirror any DOM-visible effect
/// (start overlay, cinematic class).
pub fn dispatch(sim: &Rc<RefCell<Simulation>>, event: ControlEvent) {
    let (was_running, cinematic) = {
        let mut s = sim.borrow_mut();
        let was_running = s.is_running();
        s.handle(event);
        (was_running, s.cinematic())
    };
    match event {
        ControlEvent::Start if !was_running => {
            if let Some(doc) = dom::window_document() {
                overlay::hide_start(&doc);
            }
        }
        ControlEvent::ToggleCinematic => {
            if let Some(doc) = dom::window_document() {
                overlay::set_cinematic(&doc, cinematic);
            }
            log::info!("[input] cinematic={}", cinematic);
        }
        ControlEvent::ToggleWarp => {
            log::debug!("[input] warp toggled");
        }
        _ => {}
    }
}
