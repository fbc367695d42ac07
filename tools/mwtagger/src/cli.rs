use std::path::PathBuf;

use clap::Parser;
use mwe_tagger::{TaggerConfig, DEFAULT_MAX_N};

pub const DEFAULT_FST: &str = "english.fst";

#[derive(Debug, Parser)]
#[command(
    name = "mwtagger",
    author,
    version,
    about = "Tags multi-word expressions in sentence files using a lookup transducer"
)]
pub struct Cli {
    /// Input files, one sentence per line
    #[arg(value_name = "SENTENCES")]
    pub files: Vec<PathBuf>,

    /// Maximal n-gram size
    #[arg(short = 'n', long = "maxn", default_value_t = DEFAULT_MAX_N as i64, allow_negative_numbers = true)]
    pub maxn: i64,

    /// Transducer binary
    #[arg(short, long, value_name = "FILE", env = "MWTAGGER_FST", default_value = DEFAULT_FST)]
    pub fst: PathBuf,

    /// Quiet operation
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn config(&self) -> TaggerConfig {
        TaggerConfig {
            max_n: usize::try_from(self.maxn).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mwtagger", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cli.config().max_n, 3);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["mwtagger", "-q", "-n", "5", "-f", "de.fst", "in.txt"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config().max_n, 5);
        assert_eq!(cli.fst, PathBuf::from("de.fst"));

        let cli = Cli::try_parse_from(["mwtagger", "--maxn", "-2", "in.txt"]).unwrap();
        assert_eq!(cli.config().max_n, 0);
    }

    #[test]
    fn test_errors() {
        let err = Cli::try_parse_from(["mwtagger", "--maxn", "many"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Cli::try_parse_from(["mwtagger", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = Cli::try_parse_from(["mwtagger", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
