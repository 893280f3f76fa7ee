//! Reveal position, auto-play state machine and image slots.

use crate::config::{
    DEFAULT_POSITION, DEFAULT_SPEED, POSITION_MAX, POSITION_MIN, SPEED_MAX, SPEED_MIN,
};
use log::debug;
use std::path::{Path, PathBuf};

/// Sign applied to the per-tick increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Which side of the comparison an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSide {
    /// Shown left of the divider.
    Light,
    /// Shown as the full background.
    Dark,
}

impl ImageSide {
    pub fn label(self) -> &'static str {
        match self {
            ImageSide::Light => "light",
            ImageSide::Dark => "dark",
        }
    }
}

/// Where an image path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    /// Supplied at startup.
    Default,
    /// Picked or dropped by the user.
    Uploaded,
}

/// Identifies one load request against an [`ImageSlot`].
///
/// Default and uploaded loads are numbered separately, so a failed upload
/// never makes a pending default stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    origin: ImageOrigin,
    seq: u64,
}

impl LoadTicket {
    pub fn origin(self) -> ImageOrigin {
        self.origin
    }
}

/// Default and uploaded image paths for one side.
#[derive(Debug, Default)]
pub struct ImageSlot {
    default: Option<PathBuf>,
    uploaded: Option<PathBuf>,
    latest_default: u64,
    latest_upload: u64,
}

impl ImageSlot {
    pub fn new(default: Option<PathBuf>) -> Self {
        Self {
            default,
            ..Self::default()
        }
    }

    pub fn default_path(&self) -> Option<&Path> {
        self.default.as_deref()
    }

    pub fn uploaded_path(&self) -> Option<&Path> {
        self.uploaded.as_deref()
    }

    /// The path that should currently be displayed. Uploads supersede the default.
    pub fn effective_path(&self) -> Option<&Path> {
        self.uploaded.as_deref().or(self.default.as_deref())
    }

    /// Starts a new load. Earlier tickets of the same origin become stale.
    pub fn begin_load(&mut self, origin: ImageOrigin) -> LoadTicket {
        let counter = match origin {
            ImageOrigin::Default => &mut self.latest_default,
            ImageOrigin::Uploaded => &mut self.latest_upload,
        };
        *counter += 1;
        LoadTicket {
            origin,
            seq: *counter,
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        let latest = match ticket.origin {
            ImageOrigin::Default => self.latest_default,
            ImageOrigin::Uploaded => self.latest_upload,
        };
        ticket.seq == latest
    }

    /// Records a finished load. Returns `false` if the result must not be displayed.
    ///
    /// A default only commits while no upload has been displayed on this side.
    pub fn commit(&mut self, ticket: LoadTicket, path: PathBuf) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match ticket.origin {
            ImageOrigin::Uploaded => {
                if let Some(previous) = self.uploaded.replace(path) {
                    debug!("Released previous upload: {}", previous.display());
                }
                true
            }
            ImageOrigin::Default => self.uploaded.is_none(),
        }
    }
}

/// Result of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Auto-play is off; nothing changed.
    Idle,
    /// Position moved to the contained value.
    Advanced(f32),
    /// The next step would leave the range; direction flipped instead.
    Bounced(Direction),
}

/// All interactive state of one comparison widget.
///
/// Every mutation goes through a named operation so the clamping and
/// play-state rules hold regardless of which UI event triggered it.
#[derive(Debug)]
pub struct CompareState {
    position: f32,
    auto_playing: bool,
    direction: Direction,
    speed: f32,
    light: ImageSlot,
    dark: ImageSlot,
}

impl CompareState {
    pub fn new(light_default: Option<PathBuf>, dark_default: Option<PathBuf>) -> Self {
        Self {
            position: DEFAULT_POSITION,
            auto_playing: false,
            direction: Direction::Forward,
            speed: DEFAULT_SPEED,
            light: ImageSlot::new(light_default),
            dark: ImageSlot::new(dark_default),
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    /// Sets the reveal position from manual input.
    ///
    /// Stops auto-play if it was running and returns whether it did.
    pub fn set_position(&mut self, value: f32) -> bool {
        self.position = value.clamp(POSITION_MIN, POSITION_MAX);
        let stopped = self.auto_playing;
        self.auto_playing = false;
        stopped
    }

    pub fn set_speed(&mut self, value: f32) {
        self.speed = value.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Flips the play state and returns the new one.
    pub fn toggle_auto_play(&mut self) -> bool {
        self.auto_playing = !self.auto_playing;
        self.auto_playing
    }

    pub fn reset_position(&mut self) {
        self.position = DEFAULT_POSITION;
    }

    /// Advances the animation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.auto_playing {
            return TickOutcome::Idle;
        }

        let next = self.position + self.direction.sign() * self.speed;
        if next > POSITION_MAX || next < POSITION_MIN {
            self.direction = self.direction.reversed();
            return TickOutcome::Bounced(self.direction);
        }

        self.position = next;
        TickOutcome::Advanced(next)
    }

    /// Fraction of the stage width covered by the light image.
    pub fn reveal_fraction(&self) -> f32 {
        self.position / POSITION_MAX
    }

    pub fn position_label(&self) -> String {
        format!("{:.1}%", self.position)
    }

    pub fn slot(&self, side: ImageSide) -> &ImageSlot {
        match side {
            ImageSide::Light => &self.light,
            ImageSide::Dark => &self.dark,
        }
    }

    pub fn slot_mut(&mut self, side: ImageSide) -> &mut ImageSlot {
        match side {
            ImageSide::Light => &mut self.light,
            ImageSide::Dark => &mut self.dark,
        }
    }
}

/// Rounds slider input to the nearest multiple of `step`.
pub fn snap_to_step(value: f32, step: f32) -> f32 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}
