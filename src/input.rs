use glam::Vec2;
use tunnel_core::ControlEvent;

/// Map a `KeyboardEvent.code` to a control. Before start, Enter/Space only
/// trigger start; releases are always forwarded so held keys cannot stick.
#[inline]
pub fn control_for_key(code: &str, pressed: bool, started: bool) -> Option<ControlEvent> {
    if !started && pressed && (code == "Enter" || code == "Space") {
        return Some(ControlEvent::Start);
    }
    match code {
        "Space" if pressed => Some(ControlEvent::ToggleWarp),
        "ShiftLeft" | "ShiftRight" => Some(ControlEvent::Boost(pressed)),
        "KeyW" | "ArrowUp" => Some(ControlEvent::Forward(pressed)),
        "KeyS" | "ArrowDown" => Some(ControlEvent::Backward(pressed)),
        _ => None,
    }
}

/// Space scrolls the page unless suppressed; only needed once running.
#[inline]
pub fn suppresses_default(code: &str, started: bool) -> bool {
    started && code == "Space"
}

/// Window-relative pointer position mapped to \[-1, 1\] on both axes.
#[inline]
pub fn normalized_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width > 0.0 && height > 0.0 {
        Vec2::new(
            (client_x / width * 2.0 - 1.0).clamp(-1.0, 1.0),
            (client_y / height * 2.0 - 1.0).clamp(-1.0, 1.0),
        )
    } else {
        Vec2::ZERO
    }
}
