//! Snapfx WASM - WebAssembly bindings for Snapfx
//!
//! This crate exposes the snapfx-core pipeline to JavaScript/TypeScript
//! hosts. The host owns the file picker, canvas, and download anchor; this
//! crate owns everything between the decoded bytes going in and the
//! rendered bitmap or encoded file coming out.
//!
//! # Module Structure
//!
//! - `editor` - The stateful editing session (load, select, transform,
//!   render, export)
//! - `types` - WASM-compatible bitmap wrapper
//!
//! # Usage
//!
//! ```typescript
//! import init, { Editor } from '@snapfx/wasm';
//!
//! await init();
//!
//! const editor = new Editor();
//! editor.load(new Uint8Array(await file.arrayBuffer()));
//! editor.set_filter('sepia');
//! editor.set_shape('circle');
//!
//! const bitmap = editor.render();
//! const data = new ImageData(
//!   new Uint8ClampedArray(bitmap.pixels()), bitmap.width, bitmap.height);
//! ctx.putImageData(data, 0, 0);
//! ```

use snapfx_core::{FilterKind, OutputFormat, ShapeKind};
use wasm_bindgen::prelude::*;

mod editor;
mod types;

pub use editor::Editor;
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&"snapfx wasm initialized".into());
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names of every available filter, in menu order.
#[wasm_bindgen]
pub fn filter_names() -> js_sys::Array {
    FilterKind::ALL
        .iter()
        .map(|k| JsValue::from_str(k.name()))
        .collect()
}

/// Names of every available shape mask, in menu order.
#[wasm_bindgen]
pub fn shape_names() -> js_sys::Array {
    ShapeKind::ALL
        .iter()
        .map(|k| JsValue::from_str(k.name()))
        .collect()
}

/// Names of every supported export format, in menu order.
#[wasm_bindgen]
pub fn format_names() -> js_sys::Array {
    OutputFormat::ALL
        .iter()
        .map(|f| JsValue::from_str(f.name()))
        .collect()
}
