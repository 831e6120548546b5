//! Small shared utilities for the `xs` crates.
//!
//! - [`hash`]: hash containers with a fixed, process-independent seed.
//! - [`text`]: ASCII helpers used when comparing module names.
#![no_std]

// -----------------------------------------------------------------------------
// Modules

pub mod hash;
pub mod text;
