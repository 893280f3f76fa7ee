//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (position-changed, toggle-auto-play, upload-light, etc.)
//! using the appropriate threading model for each operation type.

use crate::config::{SLIDER_STEP, SUPPORTED_IMAGE_EXTENSIONS};
use crate::services::AutoPlayService;
use crate::state::compare::snap_to_step;
use crate::state::{AppState, CompareState, ImageOrigin, ImageSide, TickOutcome, lock_compare};
use crate::ui::image_display::load_and_display_image;
use crate::ui::set_compare_view;
use log::{debug, trace};
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::sync::{Arc, Mutex};

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and application state, then registers
/// callbacks for the sliders, playback buttons and image uploads.
pub fn setup_handlers(ui: &crate::AppWindow, app_state: &AppState) {
    let logic = ui.global::<crate::Logic>();

    // Position slider: manual control takes precedence over auto-play
    logic.on_position_changed({
        let ui_handle = ui.as_weak();
        let compare = app_state.compare.clone();
        let auto_play = app_state.auto_play.clone();
        move |value| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let stopped = {
                let mut state = lock_compare(&compare);
                let stopped = state.set_position(snap_to_step(value, SLIDER_STEP));
                set_compare_view(&ui, &state);
                stopped
            };

            if stopped {
                debug!("Manual position change stopped auto-play");
                sync_auto_play(&ui_handle, &compare, &auto_play);
            }
        }
    });

    logic.on_speed_changed({
        let ui_handle = ui.as_weak();
        let compare = app_state.compare.clone();
        move |value| {
            if let Some(ui) = ui_handle.upgrade() {
                let mut state = lock_compare(&compare);
                state.set_speed(snap_to_step(value, SLIDER_STEP));
                set_compare_view(&ui, &state);
            }
        }
    });

    logic.on_toggle_auto_play({
        let ui_handle = ui.as_weak();
        let compare = app_state.compare.clone();
        let auto_play = app_state.auto_play.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            {
                let mut state = lock_compare(&compare);
                state.toggle_auto_play();
                set_compare_view(&ui, &state);
            }
            sync_auto_play(&ui_handle, &compare, &auto_play);
        }
    });

    logic.on_reset_position({
        let ui_handle = ui.as_weak();
        let compare = app_state.compare.clone();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                let mut state = lock_compare(&compare);
                state.reset_position();
                set_compare_view(&ui, &state);
            }
        }
    });

    logic.on_upload_light(upload_handler(ui, app_state, ImageSide::Light));
    logic.on_upload_dark(upload_handler(ui, app_state, ImageSide::Dark));
}

/// Starts or stops the auto-play timer to match the current play state.
fn sync_auto_play(
    ui_handle: &slint::Weak<crate::AppWindow>,
    compare: &Arc<Mutex<CompareState>>,
    auto_play: &AutoPlayService<slint::Timer>,
) {
    let playing = lock_compare(compare).is_auto_playing();
    let on_tick = {
        let ui_handle = ui_handle.clone();
        let compare = compare.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut state = lock_compare(&compare);
            if let TickOutcome::Bounced(direction) = state.tick() {
                trace!("Auto-play bounced, now moving {:?}", direction);
            }
            set_compare_view(&ui, &state);
        }
    };

    auto_play.sync(playing, on_tick);
}

/// Builds the handler for one of the upload buttons.
///
/// Uses slint::spawn_local because AsyncFileDialog must run on the main thread.
/// Cancelling the dialog leaves everything as it was.
fn upload_handler(
    ui: &crate::AppWindow,
    app_state: &AppState,
    side: ImageSide,
) -> impl FnMut() + 'static {
    let ui_handle = ui.as_weak();
    let compare = app_state.compare.clone();
    move || {
        let ui_handle = ui_handle.clone();
        let compare = compare.clone();
        let _ = slint::spawn_local(async move {
            let Some(file_handle) = AsyncFileDialog::new()
                .set_title(format!("Select {} image", side.label()))
                .add_filter("Images", &SUPPORTED_IMAGE_EXTENSIONS[..])
                .pick_file()
                .await
            else {
                debug!("No {} image selected", side.label());
                return;
            };

            // Decoding runs on rayon inside load_and_display_image.
            load_and_display_image(
                ui_handle,
                compare,
                side,
                file_handle.path().to_path_buf(),
                ImageOrigin::Uploaded,
            );
        });
    }
}
