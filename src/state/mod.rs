pub mod clock;

use std::sync::Arc;

pub use self::clock::{Clock, SystemClock};

/// Cheaply clonable handle to [`AppState`].
pub type SharedState = Arc<AppState>;

/// Application state shared by every handler.
///
/// Requests never mutate it: the only thing handlers need is a source of
/// "now" for inputs that carry no date.
pub struct AppState {
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Construct a new [`AppState`] reading the system wall clock.
    pub fn new() -> SharedState {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Construct a new [`AppState`] around a custom clock, mainly for tests.
    pub fn with_clock(clock: Arc<dyn Clock>) -> SharedState {
        Arc::new(Self { clock })
    }

    /// Clock used to resolve empty date inputs.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
