//! Store adapters implementing the board's persistence port.

pub mod memory;
pub mod postgres;
