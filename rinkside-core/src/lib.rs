//! Core types for rinkside.
//!
//! This crate provides everything the front ends share:
//! - `Event` and related types for skating/hockey sessions
//! - `query` for filtering, sorting and facet lists
//! - `export` for calendar files and calendar-service links
//! - `feed` and `import` for getting events into the model

pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod export;
pub mod feed;
pub mod import;
pub mod query;

// Re-export the event model at crate root for convenience
pub use event::*;
