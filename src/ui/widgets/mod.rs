//! Reusable UI widget components.
//!
//! This module contains styling utilities shared across the rendered views.

pub mod styling;
