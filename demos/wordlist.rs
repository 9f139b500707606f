use trie_kit::radix::RadixTrie;
use trie_kit::trie::Trie;

use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=trie_kit=trace shows inserts, splits and pruning
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let text = "the quick brown fox jumps over the lazy dog then the dog \
                thinks about the fox and the fox thinks about the dog";

    // Count how often each word occurs
    let mut trie: Trie<char, usize> = Trie::new();
    let mut radix: RadixTrie<char, usize> = RadixTrie::new();
    for word in text.split_whitespace() {
        match trie.get_mut(word.chars()) {
            Some(count) => *count += 1,
            None => {
                trie.insert_with_value(word.chars(), Some(1));
            }
        }
        radix.insert(word.chars());
    }

    println!("words");
    for pair in trie.iter() {
        println!(
            "key: {}, count: {:?}",
            String::from_iter(&pair.key),
            pair.value
        );
    }

    println!("starting with \"th\"");
    for pair in trie.iter_prefix("th".chars()) {
        println!("key: {}", String::from_iter(&pair.key));
    }

    println!(
        "{} distinct words: {} trie nodes, {} radix nodes",
        trie.count(),
        trie.node_count(),
        radix.node_count()
    );

    trie.remove("then".chars());
    radix.remove("then".chars());
    assert!(trie.contains("the".chars()) && radix.contains("the".chars()));
    assert!(!trie.contains("then".chars()) && !radix.contains("then".chars()));
}
