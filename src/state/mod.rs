//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the task list and all UI-only data
//! - Filter, focus and transient message types
//! - State error handling

mod error;
mod filter;
mod messages;
mod navigation;

pub use error::StateError;
pub use filter::TaskFilter;
pub use messages::MessageKind;
pub use navigation::Focus;

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
