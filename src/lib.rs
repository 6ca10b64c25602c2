//! perf-notifier - single-slot status notifications
//!
//! This crate posts one replaceable notification through the host
//! notification service while background work runs, and withdraws it
//! when the work is done.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification records, the slot state machine, config value object, errors
//! - **Application**: `NotificationHelper`, the background-task runner, and port traits
//! - **Infrastructure**: Desktop (notify-rust) and in-memory notification services, XDG config store
//! - **CLI**: Argument parsing, presenter, signal handling, and command runners

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
