use std::path::{Path, PathBuf};

use mwe_protocol::{ArchivedLexicon, ArchivedLexiconEntry, Lexicon, LEXICON_VERSION};
use rkyv::AlignedVec;
use tracing::{debug, info, trace};

use crate::{ApplySession, OracleError, Transducer};

/// Transducer backed by a packed rkyv [`Lexicon`].
///
/// The archive is validated once on load. Lookups then read it in place.
pub struct LexiconTransducer {
    data: AlignedVec,
    origin: PathBuf,
}

impl LexiconTransducer {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OracleError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| OracleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let transducer = Self::validate(&bytes, path)?;
        info!(
            path = %path.display(),
            entries = transducer.len(),
            "loaded transducer"
        );
        Ok(transducer)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, OracleError> {
        Self::validate(bytes, Path::new("<memory>"))
    }

    fn validate(bytes: &[u8], path: &Path) -> Result<Self, OracleError> {
        // Vec<u8> from disk carries no alignment guarantee.
        let mut data = AlignedVec::with_capacity(bytes.len());
        data.extend_from_slice(bytes);

        let version = {
            let archived = rkyv::check_archived_root::<Lexicon>(&data).map_err(|e| {
                OracleError::InvalidBinary {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })?;
            archived.version
        };

        if version != LEXICON_VERSION {
            return Err(OracleError::UnsupportedVersion {
                found: version,
                expected: LEXICON_VERSION,
            });
        }

        Ok(Self {
            data,
            origin: path.to_path_buf(),
        })
    }

    fn archive(&self) -> &ArchivedLexicon {
        // SAFETY: `data` passed `check_archived_root` in `validate` and is never mutated.
        unsafe { rkyv::archived_root::<Lexicon>(&self.data) }
    }

    /// Number of distinct surface strings.
    pub fn len(&self) -> usize {
        self.archive().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

impl Transducer for LexiconTransducer {
    type Session<'a> = LexiconSession<'a>;

    fn open_session(&self) -> LexiconSession<'_> {
        trace!(origin = %self.origin.display(), "opening apply session");
        LexiconSession {
            lexicon: self.archive(),
            current: None,
            cursor: 0,
        }
    }
}

impl Drop for LexiconTransducer {
    fn drop(&mut self) {
        debug!(origin = %self.origin.display(), "released transducer");
    }
}

pub struct LexiconSession<'a> {
    lexicon: &'a ArchivedLexicon,
    current: Option<&'a ArchivedLexiconEntry>,
    cursor: usize,
}

impl ApplySession for LexiconSession<'_> {
    fn apply_up(&mut self, input: &str) -> Option<&str> {
        self.current = self.lexicon.find(input);
        self.cursor = 0;
        self.apply_next()
    }

    fn apply_next(&mut self) -> Option<&str> {
        let entry = self.current?;
        let analysis = entry.analyses.get(self.cursor)?;
        self.cursor += 1;
        Some(analysis.as_str())
    }
}

impl Drop for LexiconSession<'_> {
    fn drop(&mut self) {
        trace!("closed apply session");
    }
}
