#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{ControlEvent, Simulation, TunnelConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

use constants::{CANVAS_ID, LOG_LEVEL, START_BUTTON_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("warp-tunnel starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Opaque 2D context (`{ alpha: false }`): the background pass covers every
/// pixel, so the compositor can skip blending the canvas with the page.
fn opaque_context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"alpha".into(), &JsValue::FALSE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas
        .get_context_with_context_options("2d", &options)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Text is measured for panel sizes, so give web fonts a chance to load first.
async fn wait_for_fonts(document: &web::Document) {
    match document.fonts().ready() {
        Ok(promise) => {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[init] fonts not ready: {:?}", e);
            }
        }
        Err(e) => log::warn!("[init] document.fonts unavailable: {:?}", e),
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = opaque_context_2d(&canvas)?;

    wait_for_fonts(&document).await;

    let viewport = dom::sync_canvas_backing_size(&canvas);
    let seed: u64 = rand::random();
    let sim = Simulation::new(TunnelConfig::default(), viewport, seed)?;
    log::info!(
        "[init] viewport={}x{} dpr={} seed={:#x}",
        viewport.width,
        viewport.height,
        viewport.dpr,
        seed
    );
    let sim = Rc::new(RefCell::new(sim));

    frame::wire_canvas_resize(&canvas, sim.clone());

    let sim_start = sim.clone();
    dom::add_click_listener(&document, START_BUTTON_ID, move || {
        events::dispatch(&sim_start, ControlEvent::Start);
    });
    events::wire_pointer(sim.clone());
    events::wire_keyboard(sim.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        surface: canvas::CanvasSurface::new(ctx),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
