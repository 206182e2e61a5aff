//! Mapping between lowercase letters and child slot indices.

use super::error::{KumuTrieError, KumuTrieResult};

/// Number of child slots per node, one for each letter `a`-`z`.
pub const ALPHABET_SIZE: usize = 26;

/// Returns the child slot index of a lowercase ASCII letter.
///
/// # Errors
///
/// * `KumuTrieError::InvalidLetter` - if `c` is not in `a`-`z`.
pub fn letter_index(c: char) -> KumuTrieResult<usize> {
    if c.is_ascii_lowercase() {
        Ok(c as usize - 'a' as usize)
    } else {
        Err(KumuTrieError::InvalidLetter(c))
    }
}

/// Returns the letter stored in child slot `index`.
///
/// # Errors
///
/// * `KumuTrieError::IndexOutOfRange` - if `index >= ALPHABET_SIZE`.
pub fn index_letter(index: usize) -> KumuTrieResult<char> {
    if index < ALPHABET_SIZE {
        Ok((b'a' + index as u8) as char)
    } else {
        Err(KumuTrieError::IndexOutOfRange(index))
    }
}

/// Maps every character of `key` to its slot index.
///
/// Validation happens up front so that a rejected key never leaves
/// half-built paths behind.
pub(crate) fn key_indices(key: &str) -> KumuTrieResult<Vec<usize>> {
    key.chars()
        .enumerate()
        .map(|(position, c)| {
            letter_index(c).map_err(|_| KumuTrieError::InvalidCharacter {
                key: key.to_string(),
                character: c,
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_bounds() {
        assert_eq!(letter_index('a').unwrap(), 0);
        assert_eq!(letter_index('z').unwrap(), 25);
        assert_eq!(letter_index('A'), Err(KumuTrieError::InvalidLetter('A')));
        assert!(letter_index('{').is_err());
        assert!(letter_index('`').is_err());
        assert!(letter_index('é').is_err());
    }

    #[test]
    fn test_index_letter_round_trip() {
        for i in 0..ALPHABET_SIZE {
            let c = index_letter(i).unwrap();
            assert_eq!(letter_index(c).unwrap(), i);
        }
        assert_eq!(index_letter(26), Err(KumuTrieError::IndexOutOfRange(26)));
    }

    #[test]
    fn test_key_indices_reports_position() {
        assert_eq!(key_indices("abc").unwrap(), vec![0, 1, 2]);

        let err = key_indices("ab-c").unwrap_err();
        assert_eq!(
            err,
            KumuTrieError::InvalidCharacter {
                key: "ab-c".to_string(),
                character: '-',
                position: 2,
            }
        );
    }
}
