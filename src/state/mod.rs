//! State management for the comparison viewer.

use crate::config::TICK_INTERVAL;
use crate::services::AutoPlayService;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub mod compare;

pub use compare::{CompareState, ImageOrigin, ImageSide, LoadTicket, TickOutcome};

/// Application-wide state container.
pub struct AppState {
    /// Shared with decode completions posted back from worker threads.
    pub compare: Arc<Mutex<CompareState>>,
    /// Auto-play timer. UI thread only.
    pub auto_play: Rc<AutoPlayService<slint::Timer>>,
}

impl AppState {
    pub fn new(light_default: Option<PathBuf>, dark_default: Option<PathBuf>) -> Self {
        Self {
            compare: Arc::new(Mutex::new(CompareState::new(light_default, dark_default))),
            auto_play: Rc::new(AutoPlayService::new(slint::Timer::default(), TICK_INTERVAL)),
        }
    }
}

/// Locks the comparison state, recovering it if a previous holder panicked.
pub fn lock_compare(compare: &Mutex<CompareState>) -> MutexGuard<'_, CompareState> {
    compare.lock().unwrap_or_else(PoisonError::into_inner)
}
