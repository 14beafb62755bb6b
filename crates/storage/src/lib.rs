//! Storage layer for webstorage
//!
//! This crate implements the concrete side of the backend contract:
//! - [`MemoryBackend`]: an in-memory backend with `localStorage` index
//!   semantics and an optional byte quota
//! - [`shared`]: the process-wide default backend every store falls back to
//! - [`for_each_prefixed`]: the mutation-tolerant descending walk that lets
//!   a store enumerate only its own keys inside the shared namespace

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod iterate;
pub mod memory;

pub use iterate::for_each_prefixed;
pub use memory::{shared, MemoryBackend};
