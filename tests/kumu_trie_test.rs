//! Integration tests for the Kumu Trie through the public library API.

use std::sync::Arc;
use std::thread;

use parking_lot::RwLock;

use kumu_lib::data_structures::kumu_trie::{DeleteOutcome, KumuTrie, KumuTrieConfig};

const KEYS: [&str; 9] = [
    "the", "hello", "there", "answer", "any", "by", "world", "their", "abc",
];

#[test]
fn test_sample_session() {
    let mut trie = KumuTrie::new();
    for key in KEYS {
        assert!(trie.insert(key).unwrap());
    }

    assert_eq!(
        trie.enumerate(),
        vec!["abc", "answer", "any", "by", "hello", "the", "their", "there", "world"]
    );
    assert_eq!(trie.count_words(), trie.enumerate().len());

    assert_eq!(trie.delete("the").unwrap(), DeleteOutcome::Deleted);
    assert!(trie.search("there").unwrap());
    assert!(trie.search("their").unwrap());
    assert!(!trie.search("the").unwrap());
    assert_eq!(trie.count_words(), KEYS.len() - 1);

    // Restartable: no mutation, same sequence.
    assert_eq!(trie.enumerate(), trie.enumerate());
}

#[test]
fn test_formation_example() {
    let dictionary = ["the", "hello", "there"];
    assert!(KumuTrie::is_formation_possible(dictionary, "thehello").unwrap());
    assert!(!KumuTrie::is_formation_possible(dictionary, "thex").unwrap());
}

#[test]
fn test_case_sensitive_formation() {
    let config = KumuTrieConfig::new().with_case_sensitive(true);
    assert!(KumuTrie::is_formation_possible_with_config(["ab", "cd"], "ABCD", config).is_err());
    assert!(KumuTrie::is_formation_possible(["ab", "cd"], "ABCD").unwrap());
}

/// Readers share the lock while a writer mutates, as callers are expected
/// to do when sharing a trie between threads.
#[test]
fn test_shared_behind_rwlock() {
    const THREAD_COUNT: usize = 4;

    let trie = Arc::new(RwLock::new(KumuTrie::new()));
    let mut handles = Vec::with_capacity(THREAD_COUNT);

    for thread_id in 0..THREAD_COUNT {
        let trie = Arc::clone(&trie);
        handles.push(thread::spawn(move || {
            let prefix = (b'a' + thread_id as u8) as char;
            for suffix in 'a'..='z' {
                let key = format!("{prefix}{suffix}");
                trie.write().insert(&key).unwrap();
                assert!(trie.read().search(&key).unwrap());
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let trie = trie.read();
    assert_eq!(trie.count_words(), THREAD_COUNT * 26);
    let words = trie.enumerate();
    let mut sorted = words.clone();
    sorted.sort();
    assert_eq!(words, sorted);
}
