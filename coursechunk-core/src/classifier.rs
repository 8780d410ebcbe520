//! Character classification for chunk boundary detection

/// Default sentence terminators: CJK full stop, full-width and ASCII
/// exclamation and question marks.
///
/// The ASCII full stop is deliberately absent, so abbreviations, decimals and
/// version numbers never end a block.
pub const DEFAULT_TERMINATORS: &str = "。！？!?";

/// Pluggable boundary classification.
///
/// A block boundary falls immediately after any character for which
/// [`is_boundary`](BoundaryClassifier::is_boundary) returns true.
pub trait BoundaryClassifier: Send + Sync {
    /// Check if character ends a sentence
    fn is_terminator(&self, ch: char) -> bool;

    /// Check if character ends a line
    fn is_line_break(&self, ch: char) -> bool {
        ch == '\n'
    }

    /// Check if a block boundary falls right after this character
    fn is_boundary(&self, ch: char) -> bool {
        self.is_terminator(ch) || self.is_line_break(ch)
    }
}

/// Terminator classification backed by an explicit character set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminatorSet {
    chars: Vec<char>,
}

impl TerminatorSet {
    /// Build a set from every character of `chars`
    pub fn new(chars: &str) -> Self {
        let mut set: Vec<char> = chars.chars().filter(|ch| !ch.is_whitespace()).collect();
        set.sort_unstable();
        set.dedup();
        Self { chars: set }
    }

    /// Characters in this set, sorted
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// True when the set recognizes no terminator at all
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for TerminatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATORS)
    }
}

impl BoundaryClassifier for TerminatorSet {
    #[inline]
    fn is_terminator(&self, ch: char) -> bool {
        self.chars.binary_search(&ch).is_ok()
    }
}
