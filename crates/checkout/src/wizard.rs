//! Wizard step index shared across checkout steps.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Handle to the index of the active wizard step.
///
/// Clones share the same index. The only mutations are [`advance`] and
/// [`retreat`]; bounds are the coordinator's concern and are not checked.
///
/// [`advance`]: WizardStep::advance
/// [`retreat`]: WizardStep::retreat
#[derive(Debug, Clone, Default)]
pub struct WizardStep {
    index: Arc<AtomicI64>,
}

impl WizardStep {
    /// Creates a step index starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(index: i64) -> Self {
        Self {
            index: Arc::new(AtomicI64::new(index)),
        }
    }

    /// Returns the active step index.
    pub fn current(&self) -> i64 {
        self.index.load(Ordering::SeqCst)
    }

    /// Moves to the next step and returns the new index.
    pub fn advance(&self) -> i64 {
        self.index.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Moves to the previous step and returns the new index.
    pub fn retreat(&self) -> i64 {
        self.index.fetch_sub(1, Ordering::SeqCst) - 1
    }
}
