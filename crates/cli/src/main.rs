//! Swagger Model CLI
//!
//! Command-line interface for decoding and validating Swagger 2.0 documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use swagger_model_common::{SwaggerError, Violations};
use swagger_model_parser::SwaggerParser;
use swagger_model_validator::{report, ValidatorRegistry};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swagger-model")]
#[command(version, about = "Parse and validate Swagger 2.0 documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a document and display its structure
    #[command(after_help = "EXAMPLES:\n  \
        # Show the operations of a petstore document\n  \
        swagger-model parse petstore.json")]
    Parse {
        /// Path to the Swagger JSON file
        spec: PathBuf,
    },

    /// Decode and validate one or more documents
    #[command(after_help = "EXAMPLES:\n  \
        # Validate a single document\n  \
        swagger-model validate petstore.json\n\n  \
        # Validate several documents, machine-readable output\n  \
        swagger-model validate --format json api/*.json")]
    Validate {
        /// Paths to Swagger JSON files
        #[arg(required = true)]
        specs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable, colored report
    Text,
    /// One JSON array with a report per file
    Json,
}

/// Validation outcome of one file, as emitted by `--format json`
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    violations: Violations,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse { spec } => {
            parse_command(spec.as_path(), cli.verbose)?;
            Ok(ExitCode::SUCCESS)
        },
        Commands::Validate { specs, format } => validate_command(&specs, format),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,swagger_model=debug,swagger_model_parser=debug,swagger_model_validator=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_command(spec_path: &Path, verbose: bool) -> Result<()> {
    println!("{} Parsing spec file: {}", "→".cyan(), spec_path.display());

    let parser = SwaggerParser::from_file(spec_path).context("Failed to load Swagger spec")?;
    let doc = parser.document();

    println!("\n{}", "Document:".bold());
    println!("  Title: {}", doc.info.title.green());
    println!("  Version: {}", doc.info.version);
    println!("  Swagger: {}", doc.swagger);
    if !doc.host.is_empty() || !doc.base_path.is_empty() {
        println!("  Base URL: {}{}", doc.host, doc.base_path);
    }
    if !doc.schemes.is_empty() {
        println!("  Schemes: {}", doc.schemes.join(", "));
    }

    let operations: Vec<_> = doc.operations().collect();
    println!(
        "\n{} ({})",
        "Operations:".bold(),
        operations.len().to_string().yellow()
    );
    for (path, method, operation) in &operations {
        let id = if operation.operation_id.is_empty() {
            "-"
        } else {
            operation.operation_id.as_str()
        };
        println!(
            "  {} {} {}",
            method.to_uppercase().cyan(),
            path,
            format!("({id})").dimmed()
        );

        if verbose {
            for param in &operation.parameters {
                println!("      {} in {}: {}", param.name, param.location, param.param_type);
            }
        }
    }

    println!(
        "\n{} ({})",
        "Definitions:".bold(),
        doc.definitions.len().to_string().yellow()
    );
    for (name, schema) in doc.definitions.iter() {
        if verbose {
            println!("  {} ({} properties)", name, schema.properties.len());
        } else {
            println!("  {}", name);
        }
    }

    Ok(())
}

fn validate_command(specs: &[PathBuf], format: OutputFormat) -> Result<ExitCode> {
    let registry = ValidatorRegistry::standard();
    debug!(?registry, files = specs.len(), "validating documents");

    let mut reports = Vec::with_capacity(specs.len());
    for spec in specs {
        let file_report = check_file(spec, &registry)?;
        if format == OutputFormat::Text {
            print_report(&file_report);
        }
        reports.push(file_report);
    }

    if format == OutputFormat::Json {
        let json =
            serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
        println!("{json}");
    }

    let failed = reports.iter().filter(|r| !r.valid).count();
    if format == OutputFormat::Text && specs.len() > 1 {
        println!(
            "\n{} {} of {} file(s) valid",
            "→".cyan(),
            specs.len() - failed,
            specs.len()
        );
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Decode and validate one file
///
/// Decode and read failures are recorded in the report; only a broken
/// validator setup aborts the command.
fn check_file(spec: &Path, registry: &ValidatorRegistry) -> Result<FileReport> {
    let file = spec.display().to_string();

    let parser = match SwaggerParser::from_file(spec) {
        Ok(parser) => parser,
        Err(err @ (SwaggerError::Decode(_) | SwaggerError::Read { .. })) => {
            return Ok(FileReport {
                file,
                valid: false,
                error: Some(err.to_string()),
                violations: Violations::new(),
            });
        },
        Err(err) => return Err(err).context("Failed to load Swagger spec"),
    };

    let violations = report(parser.document(), registry)
        .with_context(|| format!("Validator setup is broken while checking {file}"))?;

    Ok(FileReport {
        file,
        valid: violations.is_empty(),
        error: None,
        violations,
    })
}

fn print_report(file_report: &FileReport) {
    if let Some(error) = &file_report.error {
        println!("{} {}: {}", "✗".red(), file_report.file, error);
        return;
    }

    if file_report.valid {
        println!("{} {}", "✓".green(), file_report.file);
        return;
    }

    println!(
        "{} {} ({} violation(s))",
        "✗".red(),
        file_report.file,
        file_report.violations.len()
    );
    for violation in &file_report.violations {
        println!(
            "    {} {} {}",
            violation.path.yellow(),
            violation.message,
            format!("[{}]", violation.validator).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validate_requires_a_file() {
        let result = Cli::try_parse_from(["swagger-model", "validate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_file_records_decode_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"swagger\": ").unwrap();

        let file_report = check_file(&path, &ValidatorRegistry::standard()).unwrap();
        assert!(!file_report.valid);
        assert!(file_report.error.unwrap().contains("syntax error"));
    }
}
