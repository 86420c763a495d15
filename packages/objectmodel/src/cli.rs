//! Command-line interface for the card parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::config::{CoercionPolicy, ParseOptions, MAX_CARD_SIZE};
use crate::error::Result;
use crate::registry::{CardParser, ParseResult};

/// AdaptiveCards parser - Parse card JSON into the object model.
#[derive(Parser)]
#[command(name = "adaptivecards-parse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a card file and print the object model and its warnings.
    Parse {
        /// Path to the card JSON file
        file: PathBuf,

        /// Skip facts and entries whose text fields are not strings
        #[arg(long)]
        strict: bool,

        /// Output format for the parsed card
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Maximum card size in bytes
        #[arg(long, default_value_t = MAX_CARD_SIZE)]
        max_size: usize,
    },

    /// List the registered element and action types.
    Types,
}

/// Serialization format for parsed cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            strict,
            format,
            max_size,
        } => parse_command(&file, strict, format, max_size),
        Commands::Types => {
            types_command();
            Ok(())
        }
    }
}

/// Execute the parse command.
fn parse_command(file: &Path, strict: bool, format: OutputFormat, max_size: usize) -> Result<()> {
    let coercion = if strict {
        CoercionPolicy::Strict
    } else {
        CoercionPolicy::Lenient
    };
    let options = ParseOptions::new()
        .with_coercion(coercion)
        .with_max_card_size(max_size);

    let input = std::fs::read_to_string(file)?;
    let parser = CardParser::with_defaults().with_options(options);
    let result = parser.parse_str(&input)?;

    println!("{}", render(&result, format)?);

    for warning in &result.warnings {
        eprintln!("{} {}", style("warning:").yellow().bold(), warning);
    }
    eprintln!(
        "{} {} ({} elements, {} actions, {} warnings, {} coercion)",
        style("Parsed").green().bold(),
        file.display(),
        result.card.body.len(),
        result.card.actions.len(),
        result.warnings.len(),
        coercion.as_str()
    );

    Ok(())
}

/// Execute the types command.
fn types_command() {
    let parser = CardParser::with_defaults();

    let mut elements: Vec<&str> = parser.element_parsers().registered_types().into_iter().collect();
    elements.sort_unstable();
    let mut actions: Vec<&str> = parser.action_parsers().registered_types().into_iter().collect();
    actions.sort_unstable();

    println!("{}", style("Elements:").bold());
    for name in elements {
        println!("  {}", style(name).cyan());
    }
    println!("{}", style("Actions:").bold());
    for name in actions {
        println!("  {}", style(name).cyan());
    }
}

/// Serialize a parse result's card in the requested format.
pub fn render(result: &ParseResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.card)?),
        OutputFormat::Yaml => Ok(serde_yaml_ng::to_string(&result.card)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_command() {
        let cli = Cli::parse_from(["adaptivecards-parse", "parse", "card.json"]);

        let Commands::Parse {
            file,
            strict,
            format,
            max_size,
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(file, PathBuf::from("card.json"));
        assert!(!strict);
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(max_size, MAX_CARD_SIZE);
    }

    #[test]
    fn test_cli_parse_with_flags() {
        let cli = Cli::parse_from([
            "adaptivecards-parse",
            "parse",
            "card.json",
            "--strict",
            "--format",
            "yaml",
        ]);

        let Commands::Parse { strict, format, .. } = cli.command else {
            panic!("expected parse command");
        };
        assert!(strict);
        assert_eq!(format, OutputFormat::Yaml);
    }

    #[test]
    fn test_cli_types_command() {
        let cli = Cli::parse_from(["adaptivecards-parse", "types"]);
        assert!(matches!(cli.command, Commands::Types));
    }

    #[test]
    fn test_render_yaml() {
        let result = CardParser::with_defaults()
            .parse_str(r#"{"type": "AdaptiveCard", "version": "1.5", "body": []}"#)
            .unwrap();

        let yaml = render(&result, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("version: '1.5'") || yaml.contains("version: \"1.5\""));
    }
}
