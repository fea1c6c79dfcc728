//! WASM entry points for the web worker.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls from the web worker.

use wasm_bindgen::prelude::*;

use crate::app_state::AppState;
use crate::dispatch;
use crate::messages::{AppToUi, UiToApp};

// Global app state — single-threaded in the web worker.
thread_local! {
    static APP_STATE: std::cell::RefCell<Option<AppState>> = std::cell::RefCell::new(None);
}

/// Initialize the WASM app. Must be called once before any other function.
///
/// Sets up panic hooks for better error messages and creates the app state.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    APP_STATE.with(|cell| {
        *cell.borrow_mut() = Some(AppState::new());
    });
}

/// Process a JSON message from the UI and return a JSON response.
///
/// This is the main entry point for the web worker's message handler.
/// The input should be a JSON-serialized `UiToApp` message.
/// Returns a JSON-serialized `AppToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = APP_STATE.with(|cell| {
        let mut state = cell.borrow_mut();
        let state = state
            .as_mut()
            .expect("App not initialized. Call init() first.");

        let msg: UiToApp = match serde_json::from_str(json_input) {
            Ok(msg) => msg,
            Err(e) => {
                return AppToUi::Error {
                    message: format!("Failed to parse message: {}", e),
                };
            }
        };

        dispatch::dispatch(state, msg)
    });

    serde_json::to_string(&response)
        .unwrap_or_else(|e| format!(r#"{{"type":"Error","message":"Serialization failed: {}"}}"#, e))
}
