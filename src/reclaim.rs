//! Process-wide automatic memory reclamation toggle
//!
//! Reclamation is on by default: buffers passed to [`release`] are dropped
//! immediately. While a [`ReclamationGuard`] is alive, reclamation is off and
//! released buffers are parked instead. When the outermost guard goes away
//! the parked buffers are freed in a single sweep, outside whatever region
//! the guard covered.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

static ENABLED: AtomicBool = AtomicBool::new(true);
static PARKED: Mutex<Vec<Box<dyn Any + Send>>> = Mutex::new(Vec::new());

fn parked() -> MutexGuard<'static, Vec<Box<dyn Any + Send>>> {
    // A panic while holding the lock leaves the list intact
    PARKED.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Whether automatic reclamation is currently enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::SeqCst)
}

/// Number of buffers waiting for reclamation to be re-enabled.
pub fn pending() -> usize {
    parked().len()
}

/// Hand a buffer back for reclamation.
///
/// Dropped on the spot when reclamation is enabled, parked otherwise.
pub fn release<T: Send + 'static>(value: T) {
    if is_enabled() {
        drop(value);
    } else {
        parked().push(Box::new(value));
    }
}

/// Free every parked buffer, returning how many were freed.
fn sweep() -> usize {
    let drained: Vec<_> = std::mem::take(&mut *parked());
    let freed = drained.len();
    // Dropped outside the lock so a buffer's destructor may call `release`
    drop(drained);
    freed
}

/// Scoped "reclamation off" switch.
///
/// Restores the previous state on drop, including during panic unwinding,
/// so a failing work unit cannot leak the disabled state.
#[must_use = "reclamation is re-enabled as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ReclamationGuard {
    previous: bool,
}

impl ReclamationGuard {
    /// Disable reclamation until the returned guard is dropped.
    pub fn disable() -> Self {
        let previous = ENABLED.swap(false, Ordering::SeqCst);
        Self { previous }
    }

    /// State that will be restored on drop.
    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl Drop for ReclamationGuard {
    fn drop(&mut self) {
        ENABLED.store(self.previous, Ordering::SeqCst);
        if self.previous {
            sweep();
        }
    }
}

/// Serialises tests that touch the process-wide flag.
#[cfg(test)]
pub(crate) static TEST_LOCK: Mutex<()> = Mutex::new(());
