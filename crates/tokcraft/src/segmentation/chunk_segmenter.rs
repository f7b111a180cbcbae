//! # Chunk Segmenter Trait

use crate::vocab::Vocabulary;

/// Splits a single chunk into vocabulary tokens.
///
/// Segmentation is total: characters which cannot be matched degrade
/// to an unknown-token marker, they never produce an error.
pub trait ChunkSegmenter {
    /// Segment one chunk, appending its tokens.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to match against.
    /// * `chunk` - The chunk text.
    /// * `tokens` - The target token buffer to append to.
    fn segment_append(
        &mut self,
        vocab: &Vocabulary,
        chunk: &str,
        tokens: &mut Vec<String>,
    );

    /// Segment a sequence of chunks, in order.
    fn segment_chunks<'a, I>(
        &mut self,
        vocab: &Vocabulary,
        chunks: I,
    ) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        let mut tokens = Vec::new();
        for chunk in chunks {
            self.segment_append(vocab, chunk, &mut tokens);
        }
        tokens
    }
}
