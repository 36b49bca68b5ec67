use crate::analysis;
use crate::config::RepairSettings;
use crate::core::types::{
    AnalysisReport, CodeDocument, Issue, Language, Metrics, RepairOutcome, Severity,
};
use crate::error::InputError;
use crate::repair;
use crate::report;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;
use tokio::fs;

#[derive(Parser)]
#[command(name = "codemend")]
#[command(about = "Heuristic code quality analysis and AI-assisted repair for editor snippets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a snippet: issues, metrics and a quality score
    Analyze {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Language tag, or "auto" to detect
        #[arg(short, long, default_value = "auto")]
        language: String,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Repair a snippet: deterministic rewrites first, then the AI provider
    /// race if errors remain
    Fix {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Language tag, or "auto" to detect
        #[arg(short, long, default_value = "auto")]
        language: String,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render a full quality report
    Report {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Language tag, or "auto" to detect
        #[arg(short, long, default_value = "auto")]
        language: String,

        /// Render HTML instead of plain text
        #[arg(long)]
        html: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which repair providers are configured
    Status {
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Wire shape of an analysis response; field spelling is part of the
/// contract with the editor caller.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse<'a> {
    code_quality_score: u32,
    issues: &'a [Issue],
    metrics: Metrics,
    language: Language,
    analyzed_at: DateTime<Utc>,
    code: &'a str,
}

#[derive(Serialize)]
struct FixResponse<'a> {
    language: Language,
    #[serde(flatten)]
    outcome: &'a RepairOutcome,
}

#[derive(Serialize)]
struct ProviderStatus {
    configured: bool,
    model: String,
}

#[derive(Serialize)]
struct StatusResponse {
    openrouter: ProviderStatus,
    google: ProviderStatus,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("codemend={}", log_level))
        .init();

    match cli.command {
        Commands::Analyze {
            file,
            language,
            json,
        } => {
            let document = CodeDocument::new(&read_input(file).await?, &language);
            let (resolved, analysis) = analysis::analyze_document(&document);
            // Timestamps belong to the transport layer, not the core.
            let analyzed_at = Utc::now();
            if json {
                let response = AnalyzeResponse {
                    code_quality_score: analysis.score,
                    issues: &analysis.issues,
                    metrics: analysis.metrics,
                    language: resolved,
                    analyzed_at,
                    code: document.text(),
                };
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_analysis(&analysis, resolved);
            }
        }

        Commands::Fix {
            file,
            language,
            json,
        } => {
            let document = CodeDocument::new(&read_input(file).await?, &language);
            let resolved = analysis::detect(document.text(), document.language_hint());
            let settings = RepairSettings::from_env();
            let outcome = repair::auto_fix(document.text(), resolved, &settings).await;
            if json {
                let response = FixResponse {
                    language: resolved,
                    outcome: &outcome,
                };
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_fix(&outcome, resolved);
            }
        }

        Commands::Report {
            file,
            language,
            html,
            output,
        } => {
            let document = CodeDocument::new(&read_input(file).await?, &language);
            let (resolved, analysis) = analysis::analyze_document(&document);
            let analyzed_at = Utc::now();
            let rendered = if html {
                report::render_html(&analysis, resolved, document.text(), analyzed_at)
            } else {
                report::render_text(&analysis, resolved, document.text(), analyzed_at)
            };
            match output {
                Some(path) => fs::write(&path, rendered).await.map_err(|source| {
                    InputError::WriteFailed {
                        path: path.display().to_string(),
                        source,
                    }
                })?,
                None => println!("{}", rendered),
            }
        }

        Commands::Status { json } => {
            let settings = RepairSettings::from_env();
            let status = StatusResponse {
                openrouter: ProviderStatus {
                    configured: settings.openrouter.is_configured(),
                    model: settings.openrouter.model,
                },
                google: ProviderStatus {
                    configured: settings.google.is_configured(),
                    model: settings.google.model,
                },
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print_status(&status);
            }
        }
    }

    Ok(())
}

async fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => {
            let content =
                fs::read_to_string(&path)
                    .await
                    .map_err(|source| InputError::ReadFailed {
                        path: path.display().to_string(),
                        source,
                    })?;
            Ok(content)
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(InputError::Stdin)?;
            Ok(buffer)
        }
    }
}

fn print_analysis(analysis: &AnalysisReport, language: Language) {
    let counts = analysis.counts();
    println!("Language: {}", language);
    println!("Score: {}", colorize_score(analysis.score));
    println!(
        "Complexity: {}  Readability: {}%  Style: {}%",
        analysis.metrics.cyclomatic_complexity,
        analysis.metrics.readability_score,
        analysis.metrics.style_adherence
    );
    println!(
        "Issues: {} errors, {} warnings, {} suggestions",
        counts.errors, counts.warnings, counts.suggestions
    );
    for issue in &analysis.issues {
        let severity = match issue.severity {
            Severity::Critical => issue.severity.to_string().red().bold(),
            Severity::Major => issue.severity.to_string().yellow(),
            Severity::Minor => issue.severity.to_string().dimmed(),
        };
        println!(
            "  line {:>4} [{}] {}: {} ({})",
            issue.line, severity, issue.kind, issue.message, issue.suggestion
        );
    }
}

fn print_fix(outcome: &RepairOutcome, language: Language) {
    println!("Language: {}", language);
    println!("Source: {}", outcome.source);
    println!("Changes:");
    for change in &outcome.changes {
        println!("  - {}", change);
    }
    if !outcome.attempts.is_empty() {
        println!("Attempts:");
        for attempt in &outcome.attempts {
            match &attempt.error {
                Some(error) => println!(
                    "  - {} (applied: {}, error: {})",
                    attempt.provider, attempt.applied, error
                ),
                None => println!("  - {} (applied: {})", attempt.provider, attempt.applied),
            }
        }
    }
    println!("{}", "--- fixed code ---".dimmed());
    println!("{}", outcome.fixed_code);
}

fn print_status(status: &StatusResponse) {
    let describe = |name: &str, provider: &ProviderStatus| {
        let state = if provider.configured {
            "configured".green()
        } else {
            "not configured".red()
        };
        println!("{}: {} (model: {})", name, state, provider.model);
    };
    describe("openrouter", &status.openrouter);
    describe("google", &status.google);
}

fn colorize_score(score: u32) -> colored::ColoredString {
    let rendered = format!("{}/100", score);
    if score >= 80 {
        rendered.green()
    } else if score >= 50 {
        rendered.yellow()
    } else {
        rendered.red()
    }
}
