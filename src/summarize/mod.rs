//! Reducer - turns ordered segments into one final summary
//!
//! Two-level reduction: map each segment to a partial summary, then a single
//! combine call merges the partials. The generation model's input budget is
//! fixed while transcripts are unbounded, so one flat map plus one combine
//! covers every document; the reduction never recurses deeper.

mod prompts;

use thiserror::Error;
use tracing::warn;

use crate::clients::{ClientError, GenerateText};
use crate::types::Segment;

/// Separator between partial summaries handed to the combine call
pub const PARTIAL_SEPARATOR: &str = "\n\n---\n\n";

/// How a segment should be framed when summarized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The segment is the entire document; ask for topics, decisions,
    /// action items and insights.
    WholeDocument,
    /// The segment is one portion of a longer document; ask for key
    /// points only.
    Partial,
}

/// Why no final summary could be produced for a document
#[derive(Debug, Error)]
pub enum ReduceError {
    #[error("document produced no segments")]
    NoSegments,
    #[error("summarization failed for the only segment: {0}")]
    SoleSegmentFailed(#[source] ClientError),
    #[error("summarization failed for all {0} segments")]
    AllSegmentsFailed(usize),
    #[error("combining partial summaries failed: {0}")]
    CombineFailed(#[source] ClientError),
}

/// Reduce ordered segments to a single summary
///
/// A lone segment is summarized once in whole-document mode and its output
/// returned unchanged. With multiple segments, each is summarized in partial
/// mode; a failed segment is dropped with a warning rather than retried, and
/// the surviving partials are merged by one combine call. The document only
/// fails when no segment produced a partial summary.
pub fn reduce<S, C>(segments: &[Segment], mut summarize: S, mut combine: C) -> Result<String, ReduceError>
where
    S: FnMut(&Segment, Scope) -> Result<String, ClientError>,
    C: FnMut(&str) -> Result<String, ClientError>,
{
    match segments {
        [] => Err(ReduceError::NoSegments),
        [only] => summarize(only, Scope::WholeDocument).map_err(ReduceError::SoleSegmentFailed),
        many => {
            let mut partials = Vec::with_capacity(many.len());
            for (idx, segment) in many.iter().enumerate() {
                match summarize(segment, Scope::Partial) {
                    Ok(partial) => partials.push(partial),
                    Err(err) => warn!(
                        segment = idx + 1,
                        total = many.len(),
                        error = %err,
                        "segment summarization failed; dropping its contribution"
                    ),
                }
            }
            if partials.is_empty() {
                return Err(ReduceError::AllSegmentsFailed(many.len()));
            }
            combine(&partials.join(PARTIAL_SEPARATOR)).map_err(ReduceError::CombineFailed)
        }
    }
}

/// Binds the reduction to a generation client and the prompt templates
pub struct Summarizer<'a, G: GenerateText> {
    client: &'a G,
}

impl<'a, G: GenerateText> Summarizer<'a, G> {
    pub fn new(client: &'a G) -> Self {
        Self { client }
    }

    /// Produce the final summary for one document's segments
    pub fn summarize(&self, segments: &[Segment]) -> Result<String, ReduceError> {
        reduce(
            segments,
            |segment, scope| {
                self.client
                    .generate(&prompts::segment_prompt(&segment.text, scope), None)
            },
            |joined| self.client.generate(&prompts::combine_prompt(joined), None),
        )
    }
}
