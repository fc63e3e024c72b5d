//! Step definitions for task authorization behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
