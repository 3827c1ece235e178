use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use extract_eval::{
    evaluate_batch, evaluate_pair, BagOfWordsTokenizer, EditWeights, EvaluationConfig,
    NormalizationMode, ReturnAs, TextPair,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// eval-text: score a document extraction against its reference text.
#[derive(Parser)]
#[command(name = "eval-text")]
#[command(version)]
#[command(about = "Edit-distance and bag-of-words accuracy for text extraction", long_about = None)]
struct Cli {
    /// JSON evaluation config; flags below override it
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Edit weights as INSERTION,DELETION,SUBSTITUTION
    #[arg(long, global = true, value_name = "I,D,S", value_parser = parse_weights)]
    weights: Option<EditWeights>,

    /// Edit unit: char or grapheme
    #[arg(long, global = true)]
    unit: Option<String>,

    /// Pre-comparison normalization (repeatable): lowercase, nfc, nfkc, collapse_whitespace
    #[arg(long = "normalize", global = true)]
    normalize: Vec<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the edit-distance score (or raw distance) of one extraction
    Score {
        /// Extracted text file
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Reference text file
        #[arg(long, value_name = "FILE")]
        source: PathBuf,
        /// score or distance
        #[arg(long, default_value = "score")]
        return_as: String,
    },

    /// Print the bag of words of a text file as JSON
    Words {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print a full accuracy report for one extraction as JSON
    Report {
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        #[arg(long, value_name = "FILE")]
        source: PathBuf,
    },

    /// Evaluate every pair listed in a JSON file of {"output", "source"} paths
    Batch {
        #[arg(long, value_name = "FILE")]
        pairs: PathBuf,
    },
}

#[derive(Deserialize)]
struct PairPaths {
    output: PathBuf,
    source: PathBuf,
}

fn parse_weights(s: &str) -> std::result::Result<EditWeights, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid weight: {e}"))?;
    match parts.as_slice() {
        &[insertion, deletion, substitution] => {
            Ok(EditWeights::new(insertion, deletion, substitution))
        }
        _ => Err(format!("expected three comma-separated weights, got '{s}'")),
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_config(cli: &Cli) -> Result<EvaluationConfig> {
    let mut config = match &cli.config {
        Some(path) => EvaluationConfig::from_json_file(path)?,
        None => EvaluationConfig::default(),
    };
    if let Some(weights) = cli.weights {
        config.weights = weights;
    }
    if let Some(unit) = &cli.unit {
        config.unit = unit.parse()?;
    }
    if !cli.normalize.is_empty() {
        config.normalization = cli
            .normalize
            .iter()
            .map(|mode| mode.parse::<NormalizationMode>())
            .collect::<extract_eval::Result<_>>()?;
    }
    Ok(config)
}

fn sorted_bag(text: &str, tokenizer: &BagOfWordsTokenizer) -> BTreeMap<String, usize> {
    tokenizer.bag_of_words(text).into_iter().collect()
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Score {
            output,
            source,
            return_as,
        } => {
            let return_as: ReturnAs = return_as.parse()?;
            let report = evaluate_pair(&read_text(&output)?, &read_text(&source)?, &config);
            match return_as {
                ReturnAs::Score => println!("{:.4}", report.score),
                ReturnAs::Distance => println!("{}", report.distance),
            }
        }
        Commands::Words { file } => {
            let text = read_text(&file)?;
            let bag = sorted_bag(&text, &config.tokenizer());
            println!("{}", serde_json::to_string_pretty(&bag)?);
        }
        Commands::Report { output, source } => {
            let report = evaluate_pair(&read_text(&output)?, &read_text(&source)?, &config);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Batch { pairs } => {
            let listing = read_text(&pairs)?;
            let paths: Vec<PairPaths> = serde_json::from_str(&listing)
                .with_context(|| format!("parsing {}", pairs.display()))?;
            let texts = paths
                .iter()
                .map(|p| Ok(TextPair::new(read_text(&p.output)?, read_text(&p.source)?)))
                .collect::<Result<Vec<_>>>()?;
            let reports = evaluate_batch(&texts, &config);
            if let Some(mean) = extract_eval::evaluate::mean_score(&reports) {
                log::info!("mean score over {} pairs: {:.4}", reports.len(), mean);
            }
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_weights() {
        assert_eq!(parse_weights("2,1,1").unwrap(), EditWeights::new(2, 1, 1));
        assert_eq!(parse_weights(" 3, 0 ,5").unwrap(), EditWeights::new(3, 0, 5));
        assert!(parse_weights("1,2").is_err());
        assert!(parse_weights("1,2,3,4").is_err());
        assert!(parse_weights("a,b,c").is_err());
        assert!(parse_weights("1,-2,3").is_err());
    }

    #[test]
    fn test_weights_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"weights": {{"insertion": 5, "deletion": 5, "substitution": 5}}, "unit": "grapheme"}}"#
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "eval-text",
            "--config",
            config_path,
            "--weights",
            "1,1,1",
            "words",
            "input.txt",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.weights, EditWeights::uniform());
        // untouched by flags
        assert_eq!(config.unit, extract_eval::EditUnit::Grapheme);
    }

    #[test]
    fn test_config_file_used_without_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"weights": {{"insertion": 4}}}}"#).unwrap();
        let config_path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["eval-text", "words", "input.txt", "--config", config_path])
            .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.weights, EditWeights::new(4, 1, 1));
    }

    #[test]
    fn test_unit_and_normalize_flags() {
        let cli = Cli::try_parse_from([
            "eval-text",
            "--unit",
            "grapheme",
            "--normalize",
            "lowercase",
            "--normalize",
            "collapse_whitespace",
            "words",
            "input.txt",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.unit, extract_eval::EditUnit::Grapheme);
        assert_eq!(
            config.normalization,
            vec![NormalizationMode::Lowercase, NormalizationMode::CollapseWhitespace]
        );
    }

    #[test]
    fn test_bad_flag_values_are_errors() {
        let cli = Cli::try_parse_from(["eval-text", "--unit", "bytes", "words", "input.txt"])
            .unwrap();
        assert!(load_config(&cli).is_err());

        let bad_weights = ["eval-text", "--weights", "1,2", "words", "input.txt"];
        assert!(Cli::try_parse_from(bad_weights).is_err());
    }
}
