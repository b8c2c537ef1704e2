//! Adapter implementations for item lookup ports.

pub mod memory;
pub mod postgres;
