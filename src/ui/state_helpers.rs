//! Helper functions to set multiple ViewState properties in a grouped manner.
//!
//! Instead of calling individual setters like set_position, set_reveal_fraction, etc.,
//! these functions group related properties together for better code organization and maintainability.

use crate::state::{CompareState, ImageSide};
use log::error;
use slint::ComponentHandle;

/// Placeholder shown under an upload button when a side has no image.
pub const NO_IMAGE_LABEL: &str = "No image selected";

/// Sets all slider and playback properties at once.
///
/// Groups: position, reveal-fraction, position-label, speed, auto-playing
pub fn set_compare_view(ui: &crate::AppWindow, state: &CompareState) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_position(state.position());
    view_state.set_reveal_fraction(state.reveal_fraction());
    view_state.set_position_label(state.position_label().into());
    view_state.set_speed(state.speed());
    view_state.set_auto_playing(state.is_auto_playing());
}

/// Sets the decoded image and file name for one side.
///
/// Groups: {light,dark}-image, has-{light,dark}-image, {light,dark}-name
pub fn set_side_image(ui: &crate::AppWindow, side: ImageSide, image: slint::Image, name: &str) {
    let view_state = ui.global::<crate::ViewState>();
    match side {
        ImageSide::Light => {
            view_state.set_light_image(image);
            view_state.set_has_light_image(true);
            view_state.set_light_name(name.into());
        }
        ImageSide::Dark => {
            view_state.set_dark_image(image);
            view_state.set_has_dark_image(true);
            view_state.set_dark_name(name.into());
        }
    }
}

/// Sets only the file name label for one side.
pub fn set_side_name(ui: &crate::AppWindow, side: ImageSide, name: &str) {
    let view_state = ui.global::<crate::ViewState>();
    match side {
        ImageSide::Light => view_state.set_light_name(name.into()),
        ImageSide::Dark => view_state.set_dark_name(name.into()),
    }
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}

pub fn clear_error(ui: &crate::AppWindow) {
    ui.global::<crate::ViewState>().set_error_message("".into());
}
