/// Contiguous run of tokens `start..end`, joined with single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Span {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        debug_assert!(start < end, "empty span {start}..{end}");
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Length in tokens.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_unigram(&self) -> bool {
        self.len() == 1
    }
}

/// A span after lookup, with the oracle's analyses in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub analyses: Vec<String>,
}

impl AnalysisRecord {
    pub fn new(span: Span, analyses: Vec<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            text: span.text,
            analyses,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// A unigram the oracle had nothing for.
    pub fn is_unknown(&self) -> bool {
        self.analyses.is_empty()
    }
}

/// Records accumulated for one input file, in span-generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalResult {
    records: Vec<AnalysisRecord>,
}

impl FinalResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: AnalysisRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnalysisRecord> {
        self.records.iter()
    }
}

impl IntoIterator for FinalResult {
    type Item = AnalysisRecord;
    type IntoIter = std::vec::IntoIter<AnalysisRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a FinalResult {
    type Item = &'a AnalysisRecord;
    type IntoIter = std::slice::Iter<'a, AnalysisRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
