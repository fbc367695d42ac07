use std::fmt;

use crate::span::AnalysisRecord;

/// `start\tend\ttext`, then `\t` before the first analysis and `, ` between
/// the rest.
impl fmt::Display for AnalysisRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.start, self.end, self.text)?;

        let mut analyses = self.analyses.iter();
        if let Some(first) = analyses.next() {
            write!(f, "\t{first}")?;
            for analysis in analyses {
                write!(f, ", {analysis}")?;
            }
        }
        Ok(())
    }
}

pub fn format_record(record: &AnalysisRecord) -> String {
    record.to_string()
}
