//! # Form Engine
//!
//! This crate owns everything stateful in the validation core: the per-field
//! state store, the derived UI values computed from it, and the event
//! orchestrator that sequences validator calls, state updates and
//! re-validation cascades.
//!
//! ## Architecture
//!
//! Data flows one direction:
//!
//! raw input -> validators / strength scorer -> [`store::FieldStateStore`]
//! -> [`derived`] calculators -> [`render::FormRenderer`] callbacks.
//!
//! No component reaches back into the presentation layer; the renderer is an
//! external collaborator notified after every processed event. The engine is
//! single-threaded and event-driven: each notification runs to completion,
//! including its cascade, before the next one is handled. The only
//! asynchronous operation is the gated submission delay.

pub mod config;
pub mod derived;
pub mod engine;
mod error;
pub mod render;
pub mod store;

pub use crate::engine::{FormEngine, SubmitOutcome};
pub use crate::error::{ConfigError, ConfigErrorExt};
pub use crate::render::FormRenderer;
