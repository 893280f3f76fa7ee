//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: UI async work that must stay on the main thread (file dialogs)
//! - `rayon::spawn`: CPU-heavy work that can run elsewhere (image decoding)
//! - `slint::invoke_from_event_loop`: hands rayon results back to the UI thread
//! - `slint::Timer`: the auto-play tick, owned by `AutoPlayService`

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
