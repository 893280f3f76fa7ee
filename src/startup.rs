use slint::ComponentHandle;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::file_utils;
use crate::state::{AppState, CompareState, ImageOrigin, ImageSide, lock_compare};
use crate::ui::image_display::load_and_display_image;

/// Default images supplied on the command line: `[LIGHT] [DARK]`.
#[derive(Debug, Default, PartialEq)]
pub struct DefaultImages {
    pub light: Option<PathBuf>,
    pub dark: Option<PathBuf>,
}

/// Picks the first two positional arguments as light and dark defaults.
///
/// Flags are ignored. Paths with unsupported extensions are skipped but still
/// take their position, so `viewer notes.txt dark.png` leaves light empty.
pub fn default_images_from<I>(args: I) -> DefaultImages
where
    I: IntoIterator<Item = OsString>,
{
    let mut positional = args
        .into_iter()
        .filter(|arg| !arg.to_string_lossy().starts_with('-'))
        .map(PathBuf::from)
        .map(|path| match file_utils::ensure_supported_image(&path) {
            Ok(()) => Some(path),
            Err(e) => {
                log::warn!("Ignoring default image argument: {}", e);
                None
            }
        });

    DefaultImages {
        light: positional.next().flatten(),
        dark: positional.next().flatten(),
    }
}

pub fn default_images_from_args() -> DefaultImages {
    default_images_from(std::env::args_os().skip(1))
}

/// Side a dropped file goes to: left half is light, right half is dark.
pub fn side_for_drop(cursor_x: Option<f64>, window_width: u32) -> ImageSide {
    match cursor_x {
        Some(x) if window_width > 0 && x >= f64::from(window_width) / 2.0 => ImageSide::Dark,
        _ => ImageSide::Light,
    }
}

fn setup_platform_window_hooks(app: &crate::AppWindow, app_state: &AppState) {
    use i_slint_backend_winit::WinitWindowAccessor;
    use i_slint_backend_winit::{EventResult, winit::event::WindowEvent};

    let ui_handle = app.as_weak();
    let compare = app_state.compare.clone();
    let mut cursor_x: Option<f64> = None;

    app.window().on_winit_window_event(move |window, event| {
        match event {
            WindowEvent::CursorMoved { position, .. } => cursor_x = Some(position.x),
            WindowEvent::CursorLeft { .. } => cursor_x = None,
            WindowEvent::DroppedFile(path) => {
                let side = side_for_drop(cursor_x, window.size().width);
                match file_utils::ensure_supported_image(path) {
                    Ok(()) => load_and_display_image(
                        ui_handle.clone(),
                        compare.clone(),
                        side,
                        path.clone(),
                        ImageOrigin::Uploaded,
                    ),
                    Err(e) => {
                        if let Some(ui) = ui_handle.upgrade() {
                            crate::ui::set_error_with_prefix(
                                &ui,
                                "Ignored dropped file",
                                e.to_string(),
                            );
                        }
                    }
                }
            }
            _ => {}
        }

        EventResult::Propagate
    });
}

/// What one side shows before any image has decoded.
#[derive(Debug, PartialEq)]
struct InitialSide {
    side: ImageSide,
    label: &'static str,
    default_load: Option<PathBuf>,
}

/// Every side starts on the placeholder label; a default's file name only
/// appears once its decode succeeds.
fn initial_sides(state: &CompareState) -> [InitialSide; 2] {
    [ImageSide::Light, ImageSide::Dark].map(|side| InitialSide {
        side,
        label: crate::ui::NO_IMAGE_LABEL,
        default_load: state.slot(side).default_path().map(PathBuf::from),
    })
}

/// Pushes the initial view, hooks up drag and drop and starts loading the defaults.
pub fn configure_startup(app: &crate::AppWindow, app_state: &AppState) {
    let sides = {
        let state = lock_compare(&app_state.compare);
        crate::ui::set_compare_view(app, &state);
        initial_sides(&state)
    };

    setup_platform_window_hooks(app, app_state);

    for initial in sides {
        crate::ui::set_side_name(app, initial.side, initial.label);
        if let Some(path) = initial.default_load {
            load_and_display_image(
                app.as_weak(),
                app_state.compare.clone(),
                initial.side,
                path,
                ImageOrigin::Default,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn two_positional_paths_become_light_and_dark() {
        let defaults = default_images_from(args(&["--verbose", "day.png", "night.jpg"]));
        assert_eq!(defaults.light, Some(PathBuf::from("day.png")));
        assert_eq!(defaults.dark, Some(PathBuf::from("night.jpg")));
    }

    #[test]
    fn missing_arguments_leave_sides_empty() {
        assert_eq!(default_images_from(args(&[])), DefaultImages::default());

        let only_light = default_images_from(args(&["day.webp"]));
        assert_eq!(only_light.light, Some(PathBuf::from("day.webp")));
        assert_eq!(only_light.dark, None);
    }

    #[test]
    fn unsupported_argument_keeps_its_slot_empty() {
        let defaults = default_images_from(args(&["notes.txt", "night.png"]));
        assert_eq!(defaults.light, None);
        assert_eq!(defaults.dark, Some(PathBuf::from("night.png")));
    }

    #[test]
    fn defaults_start_on_the_placeholder_label() {
        let state = CompareState::new(Some("/pics/day.png".into()), None);
        let [light, dark] = initial_sides(&state);

        assert_eq!(light.side, ImageSide::Light);
        assert_eq!(light.label, crate::ui::NO_IMAGE_LABEL);
        assert_eq!(light.default_load, Some(PathBuf::from("/pics/day.png")));

        assert_eq!(dark.side, ImageSide::Dark);
        assert_eq!(dark.label, crate::ui::NO_IMAGE_LABEL);
        assert_eq!(dark.default_load, None);
    }

    #[test]
    fn drops_split_at_the_window_centre() {
        assert_eq!(side_for_drop(Some(10.0), 800), ImageSide::Light);
        assert_eq!(side_for_drop(Some(399.9), 800), ImageSide::Light);
        assert_eq!(side_for_drop(Some(400.0), 800), ImageSide::Dark);
        assert_eq!(side_for_drop(None, 800), ImageSide::Light);
        assert_eq!(side_for_drop(Some(5.0), 0), ImageSide::Light);
    }
}
