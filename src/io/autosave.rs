use std::time::{Duration, Instant};

/// Debounce timer for persistence: each mutation restarts the quiet-period
/// deadline, so rapid successive edits coalesce into one write and only the
/// most recent state is ever persisted.
#[derive(Debug)]
pub struct Autosave {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Autosave {
    pub fn new(delay: Duration) -> Self {
        Autosave {
            delay,
            deadline: None,
        }
    }

    /// Record a mutation: (re)start the quiet period
    pub fn mark_dirty(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Is a save pending (dirty state not yet written)?
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// If the quiet period has elapsed, clear the deadline and return true.
    /// Called from the interaction loop tick.
    pub fn take_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Clear any pending deadline (explicit flush or quit), returning
    /// whether a save was outstanding
    pub fn take_pending(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}
