//! Sentence-aware chunk accumulation with overlap

use crate::{
    blocks::{split_paragraphs, split_sentence_blocks},
    classifier::{BoundaryClassifier, TerminatorSet},
    config::{Granularity, SegmenterConfig},
    error::Result,
};

/// Splits text into ordered chunks near a target length.
///
/// Blocks are never split internally: the segmenter only decides whether to
/// close the current chunk before or after a block. A chunk is closed only once
/// it holds more than half the target length, so one oversized block cannot
/// trigger a cascade of tiny chunks.
#[derive(Debug, Clone)]
pub struct Segmenter<C = TerminatorSet> {
    config: SegmenterConfig,
    classifier: C,
}

impl Segmenter {
    /// Create a segmenter using the configured (or built-in) terminator set
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        let classifier = config
            .terminators
            .as_deref()
            .map(TerminatorSet::new)
            .unwrap_or_default();
        Self::with_classifier(config, classifier)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            config: SegmenterConfig::default(),
            classifier: TerminatorSet::default(),
        }
    }
}

impl<C: BoundaryClassifier> Segmenter<C> {
    /// Create a segmenter with a custom boundary classifier
    pub fn with_classifier(config: SegmenterConfig, classifier: C) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, classifier })
    }

    /// Get the current configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Split text into trimmed, non-empty chunks in reading order
    pub fn segment(&self, text: &str) -> Vec<String> {
        let blocks = match self.config.granularity {
            Granularity::Sentence => split_sentence_blocks(text, &self.classifier),
            Granularity::Paragraph => split_paragraphs(text),
        };
        log::trace!("split input into {} blocks", blocks.len());

        self.accumulate(&blocks)
    }

    fn accumulate(&self, blocks: &[&str]) -> Vec<String> {
        let target = self.config.target_length;
        let joiner = self.config.granularity.joiner();
        let joiner_len = joiner.chars().count();

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for block in blocks {
            let block_len = block.chars().count();

            // Half-full guard: fixed at 0.5 x target.
            if current_len + block_len > target && current_len * 2 > target {
                let seed = if self.config.granularity.carries_overlap() {
                    overlap_seed(&current, self.config.overlap, &self.classifier)
                } else {
                    ""
                };
                let next = if seed.is_empty() {
                    block.to_string()
                } else {
                    format!("{seed} {block}")
                };

                log::debug!(
                    "closing chunk {} at {} chars (seed: {} chars)",
                    chunks.len(),
                    current_len,
                    seed.chars().count()
                );
                push_chunk(&mut chunks, &current);

                current_len = next.chars().count();
                current = next;
            } else {
                if !current.is_empty() {
                    current.push_str(joiner);
                    current_len += joiner_len;
                }
                current.push_str(block);
                current_len += block_len;
            }
        }

        push_chunk(&mut chunks, &current);
        chunks
    }
}

/// Segment text with the built-in bilingual terminator set.
///
/// This is a total function: blank input yields an empty sequence and no
/// input ever fails.
pub fn segment(text: &str, target_length: usize, overlap: usize) -> Vec<String> {
    let segmenter = Segmenter {
        config: SegmenterConfig::new(target_length, overlap),
        classifier: TerminatorSet::default(),
    };
    segmenter.segment(text)
}

/// Compute the overlap seed carried from a closed chunk into the next one.
///
/// Takes the last `overlap` characters of `chunk` and narrows them to the last
/// complete sentence they contain (non-terminators followed by a terminator
/// run at the very end). Without such a sentence the raw window is kept.
///
/// The seed is not trimmed: a leading space counts toward the length of the
/// buffer it starts, and only the finished chunk is trimmed.
pub fn overlap_seed<'a, C>(chunk: &'a str, overlap: usize, classifier: &C) -> &'a str
where
    C: BoundaryClassifier + ?Sized,
{
    if overlap == 0 {
        return "";
    }

    let total = chunk.chars().count();
    let start = if total > overlap {
        chunk
            .char_indices()
            .nth(total - overlap)
            .map_or(0, |(idx, _)| idx)
    } else {
        0
    };
    let window = &chunk[start..];

    last_sentence(window, classifier).unwrap_or(window)
}

/// Rightmost "non-terminators then terminators" run anchored at the end
fn last_sentence<'a, C>(window: &'a str, classifier: &C) -> Option<&'a str>
where
    C: BoundaryClassifier + ?Sized,
{
    let mut chars = window.char_indices().rev().peekable();

    let mut terminated = false;
    while chars
        .next_if(|&(_, ch)| classifier.is_terminator(ch))
        .is_some()
    {
        terminated = true;
    }
    if !terminated {
        return None;
    }

    let mut start = None;
    for (idx, ch) in chars {
        if classifier.is_terminator(ch) {
            break;
        }
        start = Some(idx);
    }

    start.map(|idx| &window[idx..])
}

fn push_chunk(chunks: &mut Vec<String>, raw: &str) {
    let chunk = raw.trim();
    if !chunk.is_empty() {
        chunks.push(chunk.to_string());
    }
}
