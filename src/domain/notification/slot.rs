//! Notification slot state machine

use std::fmt;

/// Logical state of a single notification slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotState {
    #[default]
    Absent,
    Shown,
}

impl SlotState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Shown => "shown",
        }
    }
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of withdrawing a slot.
///
/// Reflects only the owner's own show and withdraw calls. A notification
/// the user already dismissed by tapping still reports `Withdrawn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The slot was shown and a withdrawal was sent for it
    Withdrawn,
    /// Nothing was shown under this slot
    NotShown,
}

/// Single notification slot.
///
/// State machine:
///   ABSENT -> SHOWN (show)
///   SHOWN  -> SHOWN (show, replaces)
///   SHOWN  -> ABSENT (withdraw)
///   ABSENT -> ABSENT (withdraw, no-op)
///
/// Every transition is legal, so none of them fail.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    state: SlotState,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self {
            state: SlotState::Absent,
        }
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == SlotState::Shown
    }

    /// Returns true when this show replaced a visible notification
    pub fn show(&mut self) -> bool {
        let replaced = self.is_shown();
        self.state = SlotState::Shown;
        replaced
    }

    pub fn withdraw(&mut self) -> Completion {
        match std::mem::take(&mut self.state) {
            SlotState::Shown => Completion::Withdrawn,
            SlotState::Absent => Completion::NotShown,
        }
    }
}
