//! Main-area panels, one per visible region.

pub mod order_info;
pub mod terminal_output;
