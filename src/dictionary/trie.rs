use crate::io::configuration::EMPTY;
use std::collections::HashMap;

/// Stable handle to a word stored in a [`WordIndex`]
///
/// Ids are dense and assigned in insertion order, so they double as bit
/// positions in the solver's word sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(usize);

impl WordId {
    /// Position of the word in insertion order
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
struct Node {
    // Insertion ordered; alphabets are small enough for a linear scan
    edges: Vec<(char, usize)>,
    terminal: Option<WordId>,
}

impl Node {
    fn child(&self, letter: char) -> Option<usize> {
        self.edges
            .iter()
            .find(|(edge, _)| *edge == letter)
            .map(|&(_, next)| next)
    }
}

/// Prefix tree over the dictionary
///
/// Nodes live in a flat arena and refer to each other by position. Children are
/// visited in insertion order, which makes query results deterministic for a
/// given load order without imposing any canonical ordering on callers.
#[derive(Clone, Debug)]
pub struct WordIndex {
    nodes: Vec<Node>,
    words: Vec<String>,
    by_length: HashMap<usize, Vec<WordId>>,
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl WordIndex {
    /// Create an index holding no words
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: Vec::new(),
            by_length: HashMap::new(),
        }
    }

    /// Build an index from words, inserted in iteration order
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    /// Insert a word, returning its id
    ///
    /// Inserting a word that is already stored returns the existing id.
    pub fn insert(&mut self, word: &str) -> WordId {
        let mut node = 0;
        for letter in word.chars() {
            node = match self.nodes.get(node).and_then(|current| current.child(letter)) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    if let Some(parent) = self.nodes.get_mut(node) {
                        parent.edges.push((letter, next));
                    }
                    next
                }
            };
        }

        if let Some(existing) = self.nodes.get(node).and_then(|end| end.terminal) {
            return existing;
        }

        let id = WordId(self.words.len());
        self.words.push(word.to_owned());
        self.by_length
            .entry(word.chars().count())
            .or_default()
            .push(id);
        if let Some(end) = self.nodes.get_mut(node) {
            end.terminal = Some(id);
        }
        id
    }

    /// Every stored word matching the pattern
    ///
    /// A match has exactly the pattern's length and agrees with every
    /// non-wildcard character. The wildcard is [`EMPTY`].
    pub fn query(&self, pattern: &str) -> Vec<WordId> {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut matches = Vec::new();
        self.collect_matches(0, &pattern, &mut matches);
        matches
    }

    fn collect_matches(&self, node: usize, pattern: &[char], matches: &mut Vec<WordId>) {
        let Some(current) = self.nodes.get(node) else {
            return;
        };

        match pattern.split_first() {
            None => matches.extend(current.terminal),
            Some((&EMPTY, rest)) => {
                for &(_, next) in &current.edges {
                    self.collect_matches(next, rest, matches);
                }
            }
            Some((&letter, rest)) => {
                if let Some(next) = current.child(letter) {
                    self.collect_matches(next, rest, matches);
                }
            }
        }
    }

    /// Words matching the pattern, as text
    pub fn matching(&self, pattern: &str) -> Vec<&str> {
        self.query(pattern)
            .into_iter()
            .filter_map(|id| self.word(id))
            .collect()
    }

    /// Id of an exact word, without wildcard expansion
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        let mut node = 0;
        for letter in word.chars() {
            node = self.nodes.get(node)?.child(letter)?;
        }
        self.nodes.get(node)?.terminal
    }

    /// Test exact word membership
    pub fn contains(&self, word: &str) -> bool {
        self.id_of(word).is_some()
    }

    /// Text of a stored word
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id.index()).map(String::as_str)
    }

    /// Ids of every word with the given character count, in insertion order
    pub fn words_of_length(&self, length: usize) -> &[WordId] {
        self.by_length
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct word lengths stored
    pub fn length_count(&self) -> usize {
        self.by_length.len()
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Test if no words are stored
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
