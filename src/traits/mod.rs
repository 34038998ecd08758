//! Trait definitions for API-Football operations.
//!
//! Each record type implements the traits it supports, encapsulating
//! endpoint differences in the implementations.

mod fetch;

pub use fetch::Fetch;
