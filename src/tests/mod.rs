//! Test modules for Kumu.
//!
//! This module contains crate-level testing infrastructure:
//! - Property-based tests using proptest
//! - Parametrized cases using test-case
//! - Configuration loading against temporary files
//! - Shared strategies and fixtures

pub mod config_tests;
pub mod test_utils;
