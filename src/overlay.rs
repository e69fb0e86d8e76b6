use crate::constants::{CINEMATIC_CLASS, HIDE_CLASS, START_OVERLAY_ID};
use web_sys as web;

#[inline]
pub fn hide_start(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        _ = el.class_list().add_1(HIDE_CLASS);
    }
}

/// Mirror the cinematic flag onto the body class; styling is pure CSS.
pub fn set_cinematic(document: &web::Document, on: bool) {
    if let Some(body) = document.body() {
        _ = body.class_list().toggle_with_force(CINEMATIC_CLASS, on);
    }
}
