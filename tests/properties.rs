use proptest::prelude::*;
use trie_kit::radix::RadixTrie;
use trie_kit::trie::Trie;
use trie_kit::wildcard::WildcardTrie;

#[derive(Clone, Debug)]
enum Op {
    Insert(String),
    Remove(String),
}

// A small alphabet gives lots of shared prefixes.
fn word() -> impl Strategy<Value = String> {
    "[abc]{0,6}"
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..40)
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => word().prop_map(Op::Insert),
            2 => word().prop_map(Op::Remove),
        ],
        0..60,
    )
}

fn build(words: &[String]) -> Trie<char, ()> {
    let mut trie = Trie::new();
    for w in words {
        trie.insert(w.chars());
    }
    trie
}

proptest! {
    #[test]
    fn inserted_words_are_found(input in words()) {
        let trie = build(&input);
        for w in &input {
            prop_assert!(trie.contains(w.chars()));
        }
    }

    #[test]
    fn words_never_inserted_are_not_found(input in words(), probe in word()) {
        let trie = build(&input);
        prop_assert_eq!(input.contains(&probe), trie.contains(probe.chars()));
    }

    #[test]
    fn every_prefix_is_a_prefix(input in words()) {
        let trie = build(&input);
        for w in &input {
            let atoms: Vec<char> = w.chars().collect();
            for end in 1..=atoms.len() {
                prop_assert!(trie.contains_prefix(atoms[..end].iter().copied()));
            }
        }
    }

    #[test]
    fn removing_a_word_leaves_the_others(input in words(), victim in word()) {
        let mut trie = build(&input);
        trie.insert(victim.chars());
        prop_assert!(trie.remove(victim.chars()));
        prop_assert!(!trie.contains(victim.chars()));
        for w in input.iter().filter(|w| **w != victim) {
            prop_assert!(trie.contains(w.chars()));
        }
    }

    #[test]
    fn insert_is_idempotent(input in words()) {
        let once = build(&input);
        let mut twice = build(&input);
        for w in &input {
            twice.insert(w.chars());
        }
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn removing_everything_prunes_everything(input in words()) {
        let mut trie = build(&input);
        for w in &input {
            trie.remove(w.chars());
        }
        prop_assert!(trie.is_empty());
        prop_assert_eq!(1, trie.node_count());
    }

    #[test]
    fn radix_agrees_with_trie(ops in ops(), probes in words()) {
        let mut trie: Trie<char, ()> = Trie::new();
        let mut radix: RadixTrie<char, ()> = RadixTrie::new();
        for op in &ops {
            match op {
                Op::Insert(w) => {
                    trie.insert(w.chars());
                    radix.insert(w.chars());
                }
                Op::Remove(w) => {
                    prop_assert_eq!(trie.remove(w.chars()), radix.remove(w.chars()));
                }
            }
            prop_assert_eq!(trie.count(), radix.count());
            prop_assert!(radix.node_count() <= trie.node_count());
        }
        for probe in probes.iter().chain(ops.iter().map(|op| match op {
            Op::Insert(w) | Op::Remove(w) => w,
        })) {
            prop_assert_eq!(trie.contains(probe.chars()), radix.contains(probe.chars()));
            prop_assert_eq!(
                trie.contains_prefix(probe.chars()),
                radix.contains_prefix(probe.chars())
            );
        }
        let trie_keys: Vec<Vec<char>> = trie.iter().map(|kv| kv.key).collect();
        let radix_keys: Vec<Vec<char>> = radix.iter().map(|kv| kv.key).collect();
        prop_assert_eq!(trie_keys, radix_keys);
    }

    #[test]
    fn wildcard_matches_agree_with_a_scan(input in words(), pattern in "[abc.]{0,6}") {
        let mut trie: WildcardTrie<char, ()> = WildcardTrie::new();
        for w in &input {
            trie.insert(w.chars());
        }
        let mut expected: Vec<Vec<char>> = input
            .iter()
            .filter(|w| {
                w.chars().count() == pattern.chars().count()
                    && w.chars().zip(pattern.chars()).all(|(c, p)| p == '.' || c == p)
            })
            .map(|w| w.chars().collect())
            .collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(!expected.is_empty(), trie.contains_pattern(pattern.chars(), '.'));
        prop_assert_eq!(expected, trie.matches(pattern.chars(), '.'));
    }
}
