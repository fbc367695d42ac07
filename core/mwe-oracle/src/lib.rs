//! Lookup oracle: the transducer seam of the tagger.
//!
//! A transducer is queried through an apply session, mirroring the
//! open/query/next/close protocol of finite-state libraries. [`lookup`]
//! collapses that protocol into a single call that returns every analysis.

pub mod error;
pub mod lexicon;

pub use error::OracleError;
pub use lexicon::{LexiconSession, LexiconTransducer};

/// A loaded transducer that hands out apply sessions.
///
/// Dropping the transducer releases it. Sessions borrow the transducer and
/// therefore always close before it does.
pub trait Transducer {
    type Session<'a>: ApplySession
    where
        Self: 'a;

    fn open_session(&self) -> Self::Session<'_>;
}

/// Stateful query cursor over a transducer.
pub trait ApplySession {
    /// Submits `input` and returns its first analysis, if any.
    ///
    /// Resets whatever query was in progress.
    fn apply_up(&mut self, input: &str) -> Option<&str>;

    /// Next analysis for the last submitted input. `None` once exhausted, or
    /// when no query has produced a result.
    fn apply_next(&mut self) -> Option<&str>;
}

/// Runs one query to exhaustion, keeping the oracle's emission order.
pub fn lookup<S>(session: &mut S, text: &str) -> Vec<String>
where
    S: ApplySession + ?Sized,
{
    let mut analyses = Vec::new();
    let Some(first) = session.apply_up(text) else {
        return analyses;
    };
    analyses.push(first.to_owned());

    while let Some(next) = session.apply_next() {
        analyses.push(next.to_owned());
    }
    analyses
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Scripted session that counts how it is driven.
    struct Scripted {
        results: Vec<&'static str>,
        cursor: usize,
        queries: usize,
    }

    impl ApplySession for Scripted {
        fn apply_up(&mut self, _input: &str) -> Option<&str> {
            self.queries += 1;
            self.cursor = 0;
            self.apply_next()
        }

        fn apply_next(&mut self) -> Option<&str> {
            let out = self.results.get(self.cursor).copied();
            self.cursor += 1;
            out
        }
    }

    #[test]
    fn test_lookup_drains_in_order() {
        let mut session = Scripted {
            results: vec!["b+N", "a+V", "b+N"],
            cursor: 0,
            queries: 0,
        };
        assert_eq!(lookup(&mut session, "x"), vec!["b+N", "a+V", "b+N"]);
        assert_eq!(session.queries, 1);
    }

    #[test]
    fn test_lookup_no_result() {
        let mut session = Scripted {
            results: vec![],
            cursor: 0,
            queries: 0,
        };
        assert!(lookup(&mut session, "x").is_empty());
    }

    proptest! {
        #[test]
        fn test_lookup_matches_lexicon(analyses in proptest::collection::vec("[a-z+]{1,8}", 0..6)) {
            let lexicon = mwe_protocol::Lexicon::from_pairs(
                analyses.iter().map(|a| ("word", a.clone())),
            );
            let bytes = rkyv::to_bytes::<_, 256>(&lexicon).unwrap();
            let transducer = LexiconTransducer::from_bytes(&bytes).unwrap();
            let mut session = transducer.open_session();

            prop_assert_eq!(lookup(&mut session, "word"), analyses.clone());
            // A second run over the same session is identical.
            prop_assert_eq!(lookup(&mut session, "word"), analyses);
        }
    }
}
