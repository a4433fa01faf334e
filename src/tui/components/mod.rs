//! Reusable UI components.

pub mod input_bar;
pub mod status_bar;
