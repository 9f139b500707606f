use trie_kit::alphabet::{Alphabet, AlphabetTrie};
use trie_kit::wildcard::WildcardTrie;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let words = ["hat", "cat", "cart", "bat", "bag", "heat"];

    let mut trie: WildcardTrie<char, ()> = WildcardTrie::new();
    for word in words {
        trie.insert(word.chars());
    }
    for pattern in ["h.t", "b.t", "c.t", "..t", "c..t", "...."] {
        let found: Vec<String> = trie
            .matches(pattern.chars(), '.')
            .into_iter()
            .map(String::from_iter)
            .collect();
        println!("{pattern}: {found:?}");
    }

    let mut lower = AlphabetTrie::new(Alphabet::LOWERCASE);
    for word in words.iter().chain(&["Hat", "c@t"]) {
        match lower.insert(word) {
            Ok(added) => println!("{word}: added {added}"),
            Err(e) => println!("{word}: {e}"),
        }
    }
}
