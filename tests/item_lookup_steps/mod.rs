//! Step definitions for item lookup scenarios.

mod given;
mod then;
mod when;
pub mod world;
