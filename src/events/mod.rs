//! Event types and observers.
//!
//! Submodules:
//! - [`input`] – action press/release notifications derived from bound controls
pub mod input;
