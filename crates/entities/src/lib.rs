//! Core entity definitions for the task tracker.
//!
//! This crate defines the data types shared between the storage layer and
//! whatever transport sits in front of it.

mod task;

pub use task::*;
