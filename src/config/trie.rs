//! Trie configuration section.
//!
//! The settings themselves live next to the trie as [`KumuTrieConfig`];
//! this module only checks that loaded values are usable.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::kumu_trie::{KumuTrieConfig, MAX_KEY_LENGTH_LIMIT};
use crate::error::config::ConfigError;

impl Validate for KumuTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_length == 0 || self.max_key_length > MAX_KEY_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_key_length".to_string(),
                message: format!("must be between 1 and {MAX_KEY_LENGTH_LIMIT}"),
            });
        }

        Ok(())
    }
}
