use clap::Parser;
use mwe_protocol::Lexicon;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser)]
#[command(author, version, about = "Packs a JSON analysis table into a lookup binary")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

#[derive(Debug, Error)]
enum PackError {
    #[error("malformed analysis table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("rkyv serialization failed: {0}")]
    Serialize(String),
}

/// Accepted input shapes: a full lexicon, or `[surface, analysis]` pairs.
#[derive(Deserialize)]
#[serde(untagged)]
enum Table {
    Lexicon(Lexicon),
    Pairs(Vec<(String, String)>),
}

fn parse_table(json: &str) -> Result<Lexicon, PackError> {
    let lexicon = match serde_json::from_str(json)? {
        Table::Lexicon(lexicon) => lexicon.normalized(),
        Table::Pairs(pairs) => Lexicon::from_pairs(pairs),
    };
    Ok(lexicon)
}

fn pack(lexicon: &Lexicon) -> Result<Vec<u8>, PackError> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|e| PackError::Serialize(e.to_string()))?;
    Ok(serializer.into_serializer().into_inner().to_vec())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("📖 Reading analysis table from {:?}...", cli.input);
    let input_data = fs::read_to_string(&cli.input)?;

    let lexicon = parse_table(&input_data)?;
    println!(
        "⚙️  Packing lexicon version {} with {} surface forms...",
        lexicon.version,
        lexicon.entries.len()
    );

    let bytes = pack(&lexicon)?;
    fs::write(&cli.output, bytes)?;

    println!("✅ Success! Binary written to {:?}", cli.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mwe_oracle::{lookup, LexiconTransducer, Transducer};

    #[test]
    fn test_pairs_table() {
        let lexicon = parse_table(
            r#"[["sat", "sit+V+Past"], ["cat", "cat+N"], ["sat", "sat+Adj"]]"#,
        )
        .unwrap();
        assert_eq!(lexicon.entries.len(), 2);
        assert_eq!(lexicon.entries[0].surface, "cat");
        assert_eq!(lexicon.entries[1].analyses, vec!["sit+V+Past", "sat+Adj"]);
    }

    #[test]
    fn test_lexicon_table_is_normalized() {
        let lexicon = parse_table(
            r#"{"version": 1, "entries": [
                {"surface": "zebra", "analyses": ["zebra+N"]},
                {"surface": "New York", "analyses": ["New_York+Prop"]},
                {"surface": "zebra", "analyses": ["zebra+N+Pl"]}
            ]}"#,
        )
        .unwrap();
        let surfaces: Vec<&str> = lexicon.entries.iter().map(|e| e.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["New York", "zebra"]);
        assert_eq!(lexicon.entries[1].analyses, vec!["zebra+N", "zebra+N+Pl"]);
    }

    #[test]
    fn test_rejects_malformed_table() {
        assert!(matches!(parse_table("{\"entries\": 3}"), Err(PackError::Parse(_))));
    }

    #[test]
    fn test_packed_binary_loads() {
        let lexicon = parse_table(r#"[["New York", "New_York+Prop"]]"#).unwrap();
        let transducer = LexiconTransducer::from_bytes(&pack(&lexicon).unwrap()).unwrap();
        let mut session = transducer.open_session();
        assert_eq!(lookup(&mut session, "New York"), vec!["New_York+Prop"]);
    }
}
