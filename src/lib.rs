//! Kumu Library
//!
//! This library contains a prefix trie over the lowercase letters `a`-`z`,
//! together with the configuration and error handling used by the `kumu`
//! binary. The library can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - `data_structures::kumu_trie` holds the trie: nodes own their children
//!   directly, deletion prunes, enumeration is lexicographic
//! - `config` loads layered settings (file, then environment)
//! - `error` gathers every failure into `KumuError`

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kumu.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
