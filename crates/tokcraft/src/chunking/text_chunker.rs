//! # Text Chunker

use core::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ChunkPolicy;

/// Boundary pattern for [`ChunkPolicy::Whitespace`].
pub const WHITESPACE_BOUNDARY_PATTERN: &str = r"\s+";

/// Boundary pattern for [`ChunkPolicy::BertStyle`].
///
/// Whitespace runs are discarded boundaries;
/// single non-word symbols are boundaries which are kept as chunks.
///
/// Word chars are ASCII only (``[0-9A-Za-z_]``); every other
/// non-whitespace char, accented letters included, is its own chunk.
pub const BERT_BOUNDARY_PATTERN: &str = r"\s+|[^0-9A-Za-z_\s]";

/// Boundary pattern for [`ChunkPolicy::Punctuation`].
pub const PUNCTUATION_BOUNDARY_PATTERN: &str = r"[\s.,!?;:()\[\]{}]+";

static WHITESPACE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WHITESPACE_BOUNDARY_PATTERN).expect("valid pattern"));

static BERT_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BERT_BOUNDARY_PATTERN).expect("valid pattern"));

static PUNCTUATION_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PUNCTUATION_BOUNDARY_PATTERN).expect("valid pattern"));

/// Chunk Label/Range Reference for [`TextChunker`].
///
/// Ranges are byte offsets into the chunked text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChunkRef {
    /// A chunk to be segmented.
    Chunk(Range<usize>),

    /// A discarded boundary.
    Gap(Range<usize>),
}

impl ChunkRef {
    /// Is this a [`ChunkRef::Chunk`]?
    pub fn is_chunk(&self) -> bool {
        matches!(self, ChunkRef::Chunk(_))
    }
}

impl From<ChunkRef> for Range<usize> {
    fn from(chunk: ChunkRef) -> Self {
        match chunk {
            ChunkRef::Chunk(range) => range,
            ChunkRef::Gap(range) => range,
        }
    }
}

/// Pre-tokenizer which splits normalized text into chunks.
///
/// Chunks keep their original order; chunks which are empty or
/// whitespace-only are reported as gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextChunker {
    policy: ChunkPolicy,
}

impl From<ChunkPolicy> for TextChunker {
    fn from(policy: ChunkPolicy) -> Self {
        Self::new(policy)
    }
}

impl TextChunker {
    /// Create a chunker for the given policy.
    pub fn new(policy: ChunkPolicy) -> Self {
        Self { policy }
    }

    /// Get the chunk policy.
    pub fn policy(&self) -> ChunkPolicy {
        self.policy
    }

    fn boundary_regex(&self) -> Option<&'static Regex> {
        match self.policy {
            ChunkPolicy::Whitespace => Some(&*WHITESPACE_BOUNDARY_RE),
            ChunkPolicy::BertStyle => Some(&*BERT_BOUNDARY_RE),
            ChunkPolicy::Punctuation => Some(&*PUNCTUATION_BOUNDARY_RE),
            ChunkPolicy::Whole => None,
        }
    }

    /// Iterate over all [`ChunkRef`]s in the text.
    ///
    /// # Arguments
    /// * `text` - the normalized text to split.
    /// * `f` - the function to apply to each ref;
    ///   halts when the function returns `false`.
    ///
    /// # Returns
    /// `true` if every ref was accepted.
    pub fn for_each_chunk_ref<F>(
        &self,
        text: &str,
        f: &mut F,
    ) -> bool
    where
        F: FnMut(ChunkRef) -> bool,
    {
        let Some(re) = self.boundary_regex() else {
            return emit_segment(text, 0..text.len(), f);
        };

        let mut last = 0;
        for m in re.find_iter(text) {
            let Range { start, end } = m.range();

            if last < start && !emit_segment(text, last..start, f) {
                return false;
            }

            // Only the bert policy keeps boundaries: single symbol chars.
            let boundary = if self.policy == ChunkPolicy::BertStyle {
                emit_segment(text, start..end, f)
            } else {
                f(ChunkRef::Gap(start..end))
            };
            if !boundary {
                return false;
            }

            last = end;
        }

        if last < text.len() {
            return emit_segment(text, last..text.len(), f);
        }

        true
    }

    /// Split text into [`ChunkRef`]s.
    pub fn split_refs(
        &self,
        text: &str,
    ) -> Vec<ChunkRef> {
        let mut refs = Vec::new();
        self.for_each_chunk_ref(text, &mut |chunk_ref| {
            refs.push(chunk_ref);
            true
        });
        refs
    }

    /// Split text into its non-empty chunks.
    pub fn chunks<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        let mut chunks = Vec::new();
        self.for_each_chunk_ref(text, &mut |chunk_ref| {
            if let ChunkRef::Chunk(range) = chunk_ref {
                chunks.push(&text[range]);
            }
            true
        });
        chunks
    }
}

/// Emit `range` as a chunk, or as a gap if it holds no content.
fn emit_segment<F>(
    text: &str,
    range: Range<usize>,
    f: &mut F,
) -> bool
where
    F: FnMut(ChunkRef) -> bool,
{
    if text[range.clone()].trim().is_empty() {
        if range.is_empty() {
            return true;
        }
        f(ChunkRef::Gap(range))
    } else {
        f(ChunkRef::Chunk(range))
    }
}

/// Split normalized text into chunks with the given policy.
pub fn chunk(
    text: &str,
    policy: ChunkPolicy,
) -> Vec<&str> {
    TextChunker::new(policy).chunks(text)
}
