//! # Domain Models
//!
//! This crate contains the pure data types of the form engine with
//! derive-only dependencies (`serde`, `bitflags`, `strum`, `typed-builder`).
//! Keep it lean: no I/O, no async, no heavy logic, just data and simple
//! helpers.

pub mod config;
pub mod constants;
pub mod fields;
pub mod strength;
pub mod verdict;
