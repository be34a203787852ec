//! Debounces a stream of document change notifications into quiet-period events.
//!
//! Edits arrive in bursts, and re-extracting an outline on every keystroke-sized
//! change would churn the panel for no benefit. The monitor watches a change
//! source and reports exactly once per burst, after a configured period of
//! silence. The shell's event loop supplies the clock, so timing is fully
//! deterministic under test.

use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::debug;

/// A drainable source of change notifications.
///
/// Implementors accumulate change events (from any thread, via whatever channel
/// suits them) and hand the pending count over when polled, resetting to zero.
pub trait ActivitySource {
    fn take_activity(&self) -> u32;
}

/// Converts a change stream into a single delayed "activity stopped" event.
///
/// At most one monitor is live at a time; the panel enforces this by holding it
/// in a single `Option` slot and dropping the old monitor before creating a
/// replacement.
pub struct ActivityMonitor {
    source: Rc<dyn ActivitySource>,
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl ActivityMonitor {
    #[must_use]
    pub fn new(source: Rc<dyn ActivitySource>, quiet_period: Duration) -> Self {
        Self {
            source,
            quiet_period,
            deadline: None,
        }
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Observes pending activity and reports whether the quiet period elapsed.
    ///
    /// Any activity seen at `now` pushes the deadline back by the full quiet
    /// period. Returns true exactly once per burst: when a deadline is armed
    /// and `now` has passed it with no new activity.
    pub fn poll(&mut self, now: Instant) -> bool {
        let events = self.source.take_activity();
        if events > 0 {
            debug!(events, "activity observed, quiet period restarted");
            self.deadline = Some(now + self.quiet_period);
            return false;
        }

        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                debug!("quiet period elapsed");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/monitor.rs"]
mod tests;
