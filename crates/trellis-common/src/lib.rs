//! Common utilities for the trellis markup engine.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - de-duplicated, colored reports of lenient parse recoveries

pub mod warning;
