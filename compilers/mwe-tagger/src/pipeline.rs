use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use mwe_oracle::ApplySession;
use tracing::debug;

use crate::assembler::Assembler;
use crate::error::TaggerError;
use crate::multigram::generate_spans;
use crate::span::FinalResult;
use crate::tokenizer::tokenize;

pub const DEFAULT_MAX_N: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggerConfig {
    /// Longest span, in tokens. Zero yields no spans at all.
    pub max_n: usize,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            max_n: DEFAULT_MAX_N,
        }
    }
}

/// Line-by-line driver: tokenize, generate spans, look up, print, collect.
pub struct Tagger<'s, S: ApplySession + ?Sized> {
    assembler: Assembler<'s, S>,
    config: TaggerConfig,
}

impl<'s, S: ApplySession + ?Sized> Tagger<'s, S> {
    pub fn new(session: &'s mut S, config: TaggerConfig) -> Self {
        Self {
            assembler: Assembler::new(session),
            config,
        }
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    /// Writes the block for one sentence: a blank line, the sentence, then
    /// one line per surviving record. Lines without tokens write nothing.
    pub fn process_line<W: Write + ?Sized>(
        &mut self,
        line: &str,
        out: &mut W,
        result: &mut FinalResult,
    ) -> std::io::Result<()> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{line}")?;

        for span in generate_spans(&tokens, self.config.max_n) {
            if let Some(record) = self.assembler.analyze(span) {
                writeln!(out, "{record}")?;
                result.push(record);
            }
        }
        Ok(())
    }

    /// Processes one input stream; the returned result covers only it.
    pub fn process_reader<R: BufRead, W: Write + ?Sized>(
        &mut self,
        mut reader: R,
        out: &mut W,
    ) -> Result<FinalResult, TaggerError> {
        let mut result = FinalResult::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            let line = std::str::from_utf8(&buf)
                .map_err(|_| TaggerError::MalformedInput { line: line_no })?;
            self.process_line(line, out, &mut result)?;
        }

        debug!(lines = line_no, records = result.len(), "finished input");
        Ok(result)
    }

    pub fn process_file<W: Write + ?Sized>(
        &mut self,
        path: &Path,
        out: &mut W,
    ) -> Result<FinalResult, TaggerError> {
        let file = File::open(path).map_err(|source| TaggerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "processing file");
        self.process_reader(BufReader::new(file), out)
    }
}
