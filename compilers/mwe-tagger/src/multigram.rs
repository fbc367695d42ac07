use crate::punct::is_skippable;
use crate::span::Span;

/// Every contiguous span of 1..=`max_n` tokens.
///
/// Ordered by length, then by start index. Spans that are a lone punctuation
/// character are dropped.
pub fn generate_spans(tokens: &[&str], max_n: usize) -> Vec<Span> {
    let longest = max_n.min(tokens.len());
    let mut spans = Vec::new();

    for len in 1..=longest {
        for start in 0..=tokens.len() - len {
            let text = tokens[start..start + len].join(" ");
            if is_skippable(&text) {
                continue;
            }
            spans.push(Span::new(start, start + len, text));
        }
    }

    spans
}
