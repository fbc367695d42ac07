//! Multi-word expression tagging over a lookup transducer.
//!
//! Each sentence is split into tokens, every contiguous span up to `max_n`
//! tokens is looked up, and the recognized spans are reported together with
//! all unigrams.

pub mod assembler;
pub mod error;
pub mod multigram;
pub mod pipeline;
pub mod present;
pub mod punct;
pub mod span;
pub mod tokenizer;

pub use assembler::{assemble, Assembler};
pub use error::TaggerError;
pub use multigram::generate_spans;
pub use pipeline::{Tagger, TaggerConfig, DEFAULT_MAX_N};
pub use present::format_record;
pub use punct::is_skippable;
pub use span::{AnalysisRecord, FinalResult, Span};
pub use tokenizer::tokenize;
