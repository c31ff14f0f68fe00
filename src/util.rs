// Shared helpers for components.

use crate::model::Difficulty;
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

/// Badge background per difficulty, shared by catalog cards and the modal.
pub fn difficulty_color(d: Difficulty) -> &'static str {
    match d {
        Difficulty::Beginner => "#2ea043",
        Difficulty::Intermediate => "#d4a72c",
        Difficulty::Advanced => "#f85149",
    }
}
