//! Pipewright Core
//!
//! Core types and abstractions for the Pipewright pipeline generator.
//!
//! This crate contains:
//! - Domain types: Core business entities (Pipeline)
//! - DTOs: Data transfer objects for the HTTP API

pub mod domain;
pub mod dto;
