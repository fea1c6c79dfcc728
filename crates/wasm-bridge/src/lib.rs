//! The browser boundary.
//!
//! The UI runs on the JavaScript main thread and talks to the engines
//! through tagged JSON messages: [`messages::UiToApp`] in,
//! [`messages::AppToUi`] out. [`app_state::AppState`] is the single
//! view-model behind the message handlers; `wasm_api` exposes the
//! `#[wasm_bindgen]` entry points on the wasm32 target.

pub mod app_state;
pub mod dispatch;
pub mod messages;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use app_state::{AppState, BridgeError};
pub use dispatch::dispatch;
pub use messages::{AppToUi, UiToApp, ViewFilter};
