//! Core domain types
//!
//! This module contains the core domain structures shared across the
//! Pipewright service. These types represent the fundamental business
//! entities produced and stored by the generator.

pub mod pipeline;
