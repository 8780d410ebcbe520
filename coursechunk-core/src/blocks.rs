//! Block splitting
//!
//! Blocks are the units the segmenter accumulates into chunks. Both splitters
//! are explicit character scans that borrow from the input, trim every block
//! and drop blocks that are empty after trimming.

use crate::classifier::BoundaryClassifier;

/// Split text into sentence blocks.
///
/// A boundary falls immediately after any character the classifier reports
/// as a boundary (terminators and line breaks). A run of consecutive
/// terminators such as `?!` or `！？` ends a single block. Whitespace
/// following a boundary is discarded, including further line breaks.
pub fn split_sentence_blocks<'a, C>(text: &'a str, classifier: &C) -> Vec<&'a str>
where
    C: BoundaryClassifier + ?Sized,
{
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !classifier.is_boundary(ch) {
            continue;
        }
        if classifier.is_terminator(ch)
            && chars
                .peek()
                .is_some_and(|&(_, next)| classifier.is_terminator(next))
        {
            continue;
        }

        push_block(&mut blocks, &text[start..idx + ch.len_utf8()]);

        while let Some(&(_, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            chars.next();
        }
        start = chars.peek().map_or(text.len(), |&(next_idx, _)| next_idx);
    }

    push_block(&mut blocks, &text[start..]);
    blocks
}

/// Split text into paragraphs separated by blank lines.
///
/// A separator is a line break followed by optional whitespace and another
/// line break; the whole whitespace run up to the last line break is consumed.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch != '\n' {
            continue;
        }

        let mut last_break = None;
        let mut lookahead = chars.clone();
        while let Some(&(next_idx, next)) = lookahead.peek() {
            if !next.is_whitespace() {
                break;
            }
            if next == '\n' {
                last_break = Some(next_idx);
            }
            lookahead.next();
        }

        if let Some(separator_end) = last_break {
            push_block(&mut blocks, &text[start..idx]);
            start = separator_end + 1;
            while chars.next_if(|&(next_idx, _)| next_idx <= separator_end).is_some() {}
        }
    }

    push_block(&mut blocks, &text[start..]);
    blocks
}

fn push_block<'a>(blocks: &mut Vec<&'a str>, raw: &'a str) {
    let block = raw.trim();
    if !block.is_empty() {
        blocks.push(block);
    }
}
