//! Encoding engine integration tests
//!
//! This module tests how values become Node trees through each container
//! kind, and how broken `Encode` implementations are caught.

mod contract;
mod engine;
