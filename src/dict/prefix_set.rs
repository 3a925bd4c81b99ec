//! Prefix-tree dictionary membership
//!
//! The alphabet is fixed at the 26 lowercase ASCII letters, which `Word`
//! already guarantees, so each node carries a flat 26-way child array.
//! Nodes live in one arena `Vec` and point at each other through
//! `NonZeroU32` indices: slot 0 holds the root and is never the target of
//! an edge, so `Option<NodeId>` child slots stay four bytes each and
//! dropping the set frees everything in one deallocation.

use crate::core::Word;

use std::num::NonZeroU32;

const ALPHABET: usize = 26;

/// Arena index of a trie node
///
/// The root lives in slot 0 and is never a child, so handles are nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(NonZeroU32);

impl NodeId {
    fn index(self) -> usize {
        self.0.get() as usize
    }
}

#[derive(Debug, Clone)]
struct Node {
    children: [Option<NodeId>; ALPHABET],
    terminal: bool,
}

impl Node {
    const fn empty() -> Self {
        Self {
            children: [None; ALPHABET],
            terminal: false,
        }
    }
}

/// Set of words supporting exact-membership lookups over `a-z` text
///
/// Words sharing a prefix share the nodes that spell it, so a large
/// dictionary stays compact. Lookups touch at most one node per letter
/// and bail out at the first absent edge. Words of different lengths
/// coexist; a stored word's proper prefix is not itself a member unless
/// separately inserted.
///
/// # Examples
/// ```
/// use quantum_wordle::core::Word;
/// use quantum_wordle::dict::PrefixSet;
///
/// let words = [Word::new("stale").unwrap(), Word::new("state").unwrap()];
/// let dict = PrefixSet::from_words(&words);
///
/// assert!(dict.contains(&words[0]));
/// assert!(!dict.contains(&Word::new("sta").unwrap())); // proper prefix
/// assert_eq!(dict.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixSet {
    arena: Vec<Node>,
    words: usize,
}

impl PrefixSet {
    /// Empty set holding only the root node
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: vec![Node::empty()],
            words: 0,
        }
    }

    /// Build a set from borrowed words
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word);
        }
        set
    }

    /// Add a word, returning whether it was newly inserted
    ///
    /// Re-inserting an existing word changes nothing and leaves `len()`
    /// untouched.
    pub fn insert(&mut self, word: &Word) -> bool {
        let mut cursor = 0;
        for &letter in word.bytes() {
            let slot = Self::slot(letter);
            cursor = match self.arena[cursor].children[slot] {
                Some(child) => child.index(),
                None => {
                    let child = self.alloc();
                    self.arena[cursor].children[slot] = Some(child);
                    child.index()
                }
            };
        }
        let newly_inserted = !self.arena[cursor].terminal;
        self.arena[cursor].terminal = true;
        self.words += usize::from(newly_inserted);
        newly_inserted
    }

    /// Whether the exact word is a member
    ///
    /// Descends one edge per letter and returns false at the first letter
    /// with no edge; otherwise the final node's terminal flag decides.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        let mut cursor = 0;
        for &letter in word.bytes() {
            match self.arena[cursor].children[Self::slot(letter)] {
                Some(child) => cursor = child.index(),
                None => return false,
            }
        }
        self.arena[cursor].terminal
    }

    /// Number of distinct words stored
    #[must_use]
    pub fn len(&self) -> usize {
        self.words
    }

    /// True when no word has been inserted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of arena nodes, root included
    ///
    /// Exposes prefix compression: inserting words with a common prefix
    /// grows this by only the letters past the shared part.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Child slot for a letter; `Word` guarantees `a-z`
    const fn slot(letter: u8) -> usize {
        (letter - b'a') as usize
    }

    fn alloc(&mut self) -> NodeId {
        // Slot 0 is taken by the root, so a fresh index is never zero
        let index = u32::try_from(self.arena.len()).ok().and_then(NonZeroU32::new);
        let Some(index) = index else {
            unreachable!("trie arena outgrew u32 indices");
        };
        self.arena.push(Node::empty());
        NodeId(index)
    }
}

impl Default for PrefixSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn contains_after_insert() {
        let mut set = PrefixSet::new();
        set.insert(&word("crane"));
        assert!(set.contains(&word("crane")));
    }

    #[test]
    fn absent_word_is_not_a_member() {
        let mut set = PrefixSet::new();
        set.insert(&word("crane"));
        assert!(!set.contains(&word("slate")));
        // Shares the c-r-a prefix but diverges afterwards
        assert!(!set.contains(&word("crabs")));
    }

    #[test]
    fn proper_prefix_is_not_a_member() {
        let mut set = PrefixSet::new();
        set.insert(&word("crane"));
        assert!(!set.contains(&word("cran")));
        assert!(!set.contains(&word("c")));
    }

    #[test]
    fn extension_is_not_a_member() {
        let mut set = PrefixSet::new();
        set.insert(&word("cran"));
        assert!(!set.contains(&word("crane")));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = PrefixSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(&word("a")));
        assert!(!set.contains(&word("crane")));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = PrefixSet::new();
        assert!(set.insert(&word("crane")));
        assert!(!set.insert(&word("crane")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.node_count(), 6);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let mut set = PrefixSet::new();
        set.insert(&word("stale"));
        set.insert(&word("state"));
        // Root plus s-t-a-l-e, then only t-e for the second word
        assert_eq!(set.node_count(), 8);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&word("stale")));
        assert!(set.contains(&word("state")));
    }

    #[test]
    fn mixed_lengths_coexist() {
        let set = PrefixSet::from_words(&[word("cat"), word("cats"), word("catch")]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&word("cat")));
        assert!(set.contains(&word("cats")));
        assert!(set.contains(&word("catch")));
        assert!(!set.contains(&word("ca")));
        assert!(!set.contains(&word("catche")));
    }

    #[test]
    fn prefix_becomes_member_when_inserted() {
        let mut set = PrefixSet::new();
        set.insert(&word("crane"));
        assert!(!set.contains(&word("cran")));
        set.insert(&word("cran"));
        assert!(set.contains(&word("cran")));
        // Marking an existing interior node terminal allocates nothing
        assert_eq!(set.node_count(), 6);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn default_is_empty() {
        let set = PrefixSet::default();
        assert!(set.is_empty());
        assert_eq!(set.node_count(), 1);
    }

    #[test]
    fn alphabet_extremes() {
        let set = PrefixSet::from_words(&[word("az"), word("za")]);
        assert!(set.contains(&word("az")));
        assert!(set.contains(&word("za")));
        assert!(!set.contains(&word("zz")));
    }
}
