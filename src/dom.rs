use tunnel_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Window inner size in CSS pixels.
pub fn window_css_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Size the canvas backing store to the window at (capped) device pixel
/// ratio, keep its CSS size at the window size, and return the viewport.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let Some(window) = web::window() else {
        return Viewport::from_css(canvas.width() as f32, canvas.height() as f32, 1.0);
    };
    let (css_w, css_h) = window_css_size(&window);
    let viewport = Viewport::from_css(css_w, css_h, window.device_pixel_ratio() as f32);
    canvas.set_width((viewport.width as u32).max(1));
    canvas.set_height((viewport.height as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{css_w}px"));
    _ = style.set_property("height", &format!("{css_h}px"));
    viewport
}
