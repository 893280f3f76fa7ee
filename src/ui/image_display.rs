//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for CPU-intensive image decoding operations,
//! then `slint::invoke_from_event_loop` to update UI from the background thread.

use crate::file_utils;
use crate::image_loader::{self, DecodedImage};
use crate::state::{CompareState, ImageOrigin, ImageSide, LoadTicket, lock_compare};
use crate::ui::{clear_error, set_error_with_prefix, set_side_image};
use log::debug;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Everything needed to finish one load on the UI thread.
struct PendingLoad {
    side: ImageSide,
    ticket: LoadTicket,
    path: PathBuf,
}

/// Shows a decoded image if its load is still the latest for that side.
fn update_ui_with_image(
    ui: &crate::AppWindow,
    compare: &Mutex<CompareState>,
    load: PendingLoad,
    decoded: DecodedImage,
) {
    let name = file_utils::display_name(&load.path);
    let committed = lock_compare(compare)
        .slot_mut(load.side)
        .commit(load.ticket, load.path);

    if !committed {
        debug!("Discarding superseded {} image: {}", load.side.label(), name);
        return;
    }

    debug!(
        "Displaying {} image {} ({:?}, {}x{})",
        load.side.label(),
        name,
        load.ticket.origin(),
        decoded.width,
        decoded.height
    );
    let image = image_loader::create_slint_image(decoded);
    set_side_image(ui, load.side, image, &name);
    clear_error(ui);
}

/// Reports a failed load unless a newer one has been started since.
fn update_ui_with_error(
    ui: &crate::AppWindow,
    compare: &Mutex<CompareState>,
    load: PendingLoad,
    error: String,
) {
    if !lock_compare(compare).slot(load.side).is_current(load.ticket) {
        return;
    }

    set_error_with_prefix(
        ui,
        &format!("Failed to load {} image", load.side.label()),
        error,
    );
}

/// Loads an image for one side in a background thread and updates the UI.
///
/// This function:
/// 1. Takes a load ticket from the side's slot so later loads win
/// 2. Spawns a rayon thread to decode the image (CPU-intensive)
/// 3. Uses invoke_from_event_loop to return to the UI thread
/// 4. Commits the path and shows the image, or reports the error
///
/// On failure the previously displayed image stays in place.
pub fn load_and_display_image(
    ui: slint::Weak<crate::AppWindow>,
    compare: Arc<Mutex<CompareState>>,
    side: ImageSide,
    path: PathBuf,
    origin: ImageOrigin,
) {
    let ticket = lock_compare(&compare).slot_mut(side).begin_load(origin);
    debug!(
        "Loading {} image ({:?}): {}",
        side.label(),
        origin,
        path.display()
    );

    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&path);
        let load = PendingLoad {
            side,
            ticket,
            path,
        };

        let _ = slint::invoke_from_event_loop(move || {
            if let Some(ui) = ui.upgrade() {
                match result {
                    Ok(decoded) => update_ui_with_image(&ui, &compare, load, decoded),
                    Err(e) => update_ui_with_error(&ui, &compare, load, e.to_string()),
                }
            }
        });
    });
}
