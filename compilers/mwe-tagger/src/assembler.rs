use mwe_oracle::{lookup, ApplySession};
use tracing::trace;

use crate::punct::is_skippable;
use crate::span::{AnalysisRecord, Span};

/// Unigram fallback.
///
/// Unigrams are always reported, with an empty analysis list when unknown.
/// Multigrams are reported only when the oracle recognizes them.
pub fn assemble(span: Span, analyses: Vec<String>) -> Option<AnalysisRecord> {
    if analyses.is_empty() && !span.is_unigram() {
        return None;
    }
    Some(AnalysisRecord::new(span, analyses))
}

/// Turns spans into records by querying one apply session.
pub struct Assembler<'s, S: ApplySession + ?Sized> {
    session: &'s mut S,
}

impl<'s, S: ApplySession + ?Sized> Assembler<'s, S> {
    pub fn new(session: &'s mut S) -> Self {
        Self { session }
    }

    pub fn analyze(&mut self, span: Span) -> Option<AnalysisRecord> {
        if is_skippable(&span.text) {
            return None;
        }

        let analyses = lookup(&mut *self.session, &span.text);
        trace!(text = %span.text, hits = analyses.len(), "queried span");
        assemble(span, analyses)
    }
}
