//! Platform abstraction layer
//!
//! Host-side plumbing between device events and the simulation:
//! - Input flags shared with an event thread

pub mod input;

pub use input::SharedInput;
