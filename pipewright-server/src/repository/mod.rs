//! Repository Module
//!
//! In-memory storage for the server. The store is owned by the
//! application state and injected into services; it lives exactly as
//! long as the process and is never persisted.

pub mod pipeline;

pub use pipeline::PipelineStore;
