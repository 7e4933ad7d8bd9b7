//! Error types for the gantry core crate

mod core;

pub use self::core::{CoreError, CoreResult};
