//! Decoding engine integration tests
//!
//! This module tests reading typed values back out of Node trees: shape
//! checks, cursor behavior of unkeyed containers, and nil-equivalence.

mod engine;
