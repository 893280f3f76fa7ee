//! Service owning the auto-play timer.
//!
//! The repeating tick is held as a scoped resource: it exists only while the
//! comparison is in the running state and is torn down when play stops or the
//! service is dropped.

use log::debug;
use std::time::Duration;

/// A repeating timer the auto-play service can start and stop.
pub trait Ticker {
    /// Starts calling `on_tick` every `interval`, replacing any previous callback.
    fn start_repeating(&self, interval: Duration, on_tick: Box<dyn FnMut()>);
    fn stop(&self);
    fn is_running(&self) -> bool;
}

impl Ticker for slint::Timer {
    fn start_repeating(&self, interval: Duration, on_tick: Box<dyn FnMut()>) {
        self.start(slint::TimerMode::Repeated, interval, on_tick);
    }

    fn stop(&self) {
        slint::Timer::stop(self);
    }

    fn is_running(&self) -> bool {
        self.running()
    }
}

/// What a call to [`AutoPlayService::sync`] did to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoPlayChange {
    Started,
    Stopped,
    Unchanged,
}

/// Keeps the ticker running exactly while auto-play is on.
pub struct AutoPlayService<T: Ticker> {
    ticker: T,
    interval: Duration,
}

impl<T: Ticker> AutoPlayService<T> {
    /// Creates a new auto-play service with a stopped ticker.
    pub fn new(ticker: T, interval: Duration) -> Self {
        Self { ticker, interval }
    }

    /// Brings the ticker in line with the play state.
    ///
    /// `on_tick` is only installed when the ticker is started; a running
    /// ticker is never scheduled twice.
    pub fn sync<F>(&self, playing: bool, on_tick: F) -> AutoPlayChange
    where
        F: FnMut() + 'static,
    {
        match (playing, self.ticker.is_running()) {
            (true, false) => {
                debug!("Auto-play started ({:?} interval)", self.interval);
                self.ticker.start_repeating(self.interval, Box::new(on_tick));
                AutoPlayChange::Started
            }
            (false, true) => {
                debug!("Auto-play stopped");
                self.ticker.stop();
                AutoPlayChange::Stopped
            }
            _ => AutoPlayChange::Unchanged,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }
}

impl<T: Ticker> Drop for AutoPlayService<T> {
    fn drop(&mut self) {
        if self.ticker.is_running() {
            self.ticker.stop();
        }
    }
}
