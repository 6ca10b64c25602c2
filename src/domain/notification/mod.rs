//! Notification domain - records, icons, and the single-slot state machine

pub mod icon;
pub mod record;
pub mod slot;

pub use icon::{NotificationIcon, ALL_ICONS};
pub use record::{Notification, NotificationId, TapAction};
pub use slot::{Completion, NotificationSlot, SlotState};
