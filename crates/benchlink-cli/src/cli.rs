//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Benchlink - Find dataset and benchmark links in research papers.
#[derive(Debug, Parser)]
#[command(name = "benchlink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "BENCHLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write results to this JSON file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Maximum papers per conference run (0 = unlimited)
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Ask the configured judge when no rule decides
    #[arg(short, long, global = true)]
    pub judge: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process the papers of an OpenReview conference tab
    Conference(ConferenceArgs),

    /// Process a single local PDF
    Pdf(PdfArgs),

    /// Process an already converted document
    Text(TextArgs),

    /// List dataset names mentioned in a text file
    Mentions(MentionsArgs),
}

/// Arguments for the conference command.
#[derive(Debug, Parser)]
pub struct ConferenceArgs {
    /// Index URL ending in #tab-<name>
    pub index_url: String,
}

/// Arguments for the pdf command.
#[derive(Debug, Parser)]
pub struct PdfArgs {
    /// PDF file
    pub path: PathBuf,
}

/// Arguments for the text command.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Raw text rendering
    pub path: PathBuf,

    /// Structured HTML rendering of the same document
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Document identifier (defaults to the text path)
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for the mentions command.
#[derive(Debug, Parser)]
pub struct MentionsArgs {
    /// Raw text rendering
    pub path: PathBuf,
}
