use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Format version written into every packed lexicon.
pub const LEXICON_VERSION: u32 = 1;

/// One surface string and every analysis the lexicon knows for it.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconEntry {
    pub surface: String,
    /// Emission order. Duplicates are kept.
    pub analyses: Vec<String>,
}

/// Surface-to-analyses table, the binary behind `LexiconTransducer`.
///
/// `entries` is sorted by `surface` (byte order) with unique surfaces, so the
/// archived form can be binary searched without deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Builds a well-formed lexicon from `(surface, analysis)` pairs.
    ///
    /// Analyses of the same surface are grouped in the order they were seen.
    pub fn from_pairs<I, S, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, A)>,
        S: Into<String>,
        A: Into<String>,
    {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (surface, analysis) in pairs {
            grouped.entry(surface.into()).or_default().push(analysis.into());
        }

        Self {
            version: LEXICON_VERSION,
            entries: grouped
                .into_iter()
                .map(|(surface, analyses)| LexiconEntry { surface, analyses })
                .collect(),
        }
    }

    /// Re-establishes the sorted/unique invariant on hand-built entries,
    /// merging analyses of repeated surfaces in their original order.
    pub fn normalized(self) -> Self {
        let pairs = self
            .entries
            .into_iter()
            .flat_map(|entry| {
                let surface = entry.surface;
                entry
                    .analyses
                    .into_iter()
                    .map(move |analysis| (surface.clone(), analysis))
            });
        Self {
            version: self.version,
            ..Self::from_pairs(pairs)
        }
    }
}

impl ArchivedLexicon {
    /// Exact-match lookup over the archived entries.
    pub fn find(&self, surface: &str) -> Option<&ArchivedLexiconEntry> {
        self.entries
            .binary_search_by(|entry| entry.surface.as_str().cmp(surface))
            .ok()
            .map(|idx| &self.entries[idx])
    }
}
