//! `vitrine` command line.
//!
//! ```text
//! vitrine render   content + site → HTML page (file or stdout)
//! vitrine check    assemble only, list sections and diagnostics
//! vitrine link     chat / tel / display helpers for a phone number
//! vitrine submit   validate and post a contact form
//! ```
//!
//! Flags win over `vitrine.toml`, which wins over built-in defaults.

mod dispatch;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use vitrine_sections::RenderMode;

use crate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "vitrine",
    author,
    version,
    about = "Render content-driven landing pages",
    long_about = None
)]
pub struct Cli {
    /// Config file (TOML). Defaults to ./vitrine.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level; RUST_LOG overrides it
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a content document to a complete HTML page
    Render(RenderArgs),

    /// Assemble a content document and report diagnostics without writing
    Check(CheckArgs),

    /// Build contact links for a phone number
    Link {
        #[command(subcommand)]
        link: LinkCommand,
    },

    /// Validate and submit a contact form
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Content document (JSON with a `sections` list)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Site descriptor (JSON)
    #[arg(long)]
    pub site: Option<PathBuf>,

    /// Output file; the page goes to stdout when omitted
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Page title, rendered as "<title> | <site title>"
    #[arg(long)]
    pub page_title: Option<String>,

    /// production or development
    #[arg(long)]
    pub mode: Option<RenderMode>,

    /// Exit non-zero when error diagnostics are recorded
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[arg(long)]
    pub content: Option<PathBuf>,

    #[arg(long)]
    pub site: Option<PathBuf>,

    /// production or development
    #[arg(long)]
    pub mode: Option<RenderMode>,

    /// Exit non-zero when error diagnostics are recorded
    #[arg(long)]
    pub strict: bool,

    /// Machine-readable output
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum LinkCommand {
    /// Chat URL with an optional pre-filled message
    Whatsapp {
        phone: String,
        #[arg(long, short)]
        message: Option<String>,
    },
    /// tel: URL
    Tel { phone: String },
    /// Display form, e.g. (11) 99999-9999
    Format { phone: String },
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub message: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub subject: Option<String>,

    /// The visitor accepted the privacy terms
    #[arg(long)]
    pub consent: bool,

    /// Form backend URL; falls back to [forms] endpoint, then the site's contactEndpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Site descriptor (JSON)
    #[arg(long)]
    pub site: Option<PathBuf>,

    /// Page the form was sent from; defaults to the site URL
    #[arg(long)]
    pub page_url: Option<String>,
}

/// Parse argv, set up logging and run the selected command.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match dispatch::dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
