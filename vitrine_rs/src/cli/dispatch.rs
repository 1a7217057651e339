//! Command handlers.
//!
//! Handlers return the process exit code. Anything that stops a command
//! outright (unreadable files, a bad config) comes back as an error and is
//! printed once by [`super::run`].

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::{Map, Value, json};
use tracing::debug;
use vitrine_sections::links::{format_phone_number, tel_url};
use vitrine_sections::{Assembly, Diagnostic, RenderMode, Severity, assemble};

use super::{CheckArgs, Cli, Command, LinkCommand, RenderArgs, SubmitArgs};
use crate::analytics::{AnalyticsEvent, Dispatcher};
use crate::config::VitrineConfig;
use crate::forms::FormClient;
use crate::loader;
use crate::pipeline;
use crate::validators::{self, FormSchema};

/// How long `submit` waits for analytics delivery before exiting.
const ANALYTICS_GRACE: Duration = Duration::from_secs(3);

pub(super) async fn dispatch(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => VitrineConfig::try_load(path)?,
        None => VitrineConfig::load(Path::new(".")),
    };

    match cli.command {
        Command::Render(args) => render(&config, args),
        Command::Check(args) => check(&config, args),
        Command::Link { link } => link_cmd(&config, link),
        Command::Submit(args) => submit(&config, args).await,
    }
}

/// Print `text` and a newline to stdout. A closed pipe (`vitrine render | head`)
/// is not an error.
fn emit(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match writeln!(out, "{}", text).and_then(|_| out.flush()) {
        Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(()),
    }
}

fn content_path(flag: Option<PathBuf>, config: &VitrineConfig) -> Result<PathBuf> {
    flag.or_else(|| config.paths.content.clone())
        .context("no content document: pass --content or set [paths] content in vitrine.toml")
}

fn site_path<'a>(flag: Option<&'a Path>, config: &'a VitrineConfig) -> Option<&'a Path> {
    flag.or(config.paths.site.as_deref())
}

fn mode(flag: Option<RenderMode>, config: &VitrineConfig) -> RenderMode {
    flag.unwrap_or_else(|| config.render_mode())
}

fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let label = match diagnostic.severity() {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
    };
    format!("{}: {}", label, diagnostic)
}

fn summary(assembly: &Assembly) -> String {
    let errors = assembly.diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = assembly.diagnostics.len() - errors;
    format!(
        "{} sections, {} warnings, {} errors",
        assembly.sections.len(),
        warnings,
        errors
    )
}

fn render(config: &VitrineConfig, args: RenderArgs) -> Result<ExitCode> {
    let content = content_path(args.content, config)?;
    let doc = loader::load_document(&content)?;
    let site = loader::load_site_or_default(site_path(args.site.as_deref(), config))?;
    let strict = args.strict || config.render.strict;

    let page = pipeline::render(
        config,
        &doc,
        site,
        mode(args.mode, config),
        args.page_title.as_deref(),
    );

    for diagnostic in &page.assembly.diagnostics {
        eprintln!("{}", format_diagnostic(diagnostic));
    }
    if !page.passes(strict) {
        eprintln!(
            "{} strict mode: {}, nothing written",
            "failed:".red().bold(),
            summary(&page.assembly)
        );
        return Ok(ExitCode::FAILURE);
    }

    match args.out.or_else(|| config.paths.out.clone()) {
        Some(path) => {
            pipeline::write_output(&path, &page.html)?;
            eprintln!(
                "{} {} ({})",
                "Wrote".green().bold(),
                path.display(),
                summary(&page.assembly)
            );
        }
        None => emit(&page.html)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn check(config: &VitrineConfig, args: CheckArgs) -> Result<ExitCode> {
    let content = content_path(args.content, config)?;
    let doc = loader::load_document(&content)?;
    let site = loader::load_site_or_default(site_path(args.site.as_deref(), config))?;
    let strict = args.strict || config.render.strict;

    let settings = pipeline::render_settings(config, site, mode(args.mode, config));
    let assembly = assemble(&doc, &settings);
    let ok = !(strict && assembly.has_errors());

    if args.json {
        let sections: Vec<Value> = assembly
            .sections
            .iter()
            .map(|s| json!({ "index": s.index, "key": s.key, "component": s.component.name() }))
            .collect();
        let report = json!({
            "ok": ok,
            "sections": sections,
            "diagnostics": assembly.diagnostics,
        });
        emit(&serde_json::to_string_pretty(&report)?)?;
    } else {
        let mut lines: Vec<String> = assembly
            .sections
            .iter()
            .map(|s| format!("  {:>3}  {}", s.index, s.component))
            .collect();
        lines.extend(assembly.diagnostics.iter().map(format_diagnostic));
        lines.push(summary(&assembly));
        emit(&lines.join("\n"))?;
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn link_cmd(config: &VitrineConfig, link: LinkCommand) -> Result<ExitCode> {
    let url = match link {
        LinkCommand::Whatsapp { phone, message } => {
            let message = message
                .or_else(|| config.links.default_message.clone())
                .unwrap_or_default();
            config.link_builder().whatsapp_url(&phone, &message)
        }
        LinkCommand::Tel { phone } => tel_url(&phone),
        LinkCommand::Format { phone } => format_phone_number(&phone),
    };
    emit(&url)?;
    Ok(ExitCode::SUCCESS)
}

async fn submit(config: &VitrineConfig, args: SubmitArgs) -> Result<ExitCode> {
    let site = loader::load_site_or_default(site_path(args.site.as_deref(), config))?;

    let mut data = Map::new();
    data.insert("name".into(), Value::String(args.name));
    data.insert("email".into(), Value::String(args.email));
    data.insert("message".into(), Value::String(args.message));
    if let Some(phone) = args.phone {
        data.insert("phone".into(), Value::String(phone));
    }
    if let Some(subject) = args.subject {
        data.insert("subject".into(), Value::String(subject));
    }
    data.insert("consent".into(), Value::Bool(args.consent));

    let data = match validators::validate(FormSchema::Contact, &data) {
        Ok(data) => validators::prepare_form_data(&data),
        Err(errors) => {
            for (field, message) in &errors.0 {
                eprintln!("{} {}: {}", "invalid".red().bold(), field, message);
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let endpoint = args
        .endpoint
        .or_else(|| config.forms.endpoint.clone())
        .or_else(|| site.forms.contact_endpoint.clone());
    let page_url = args.page_url.unwrap_or_else(|| site.url.clone());

    let client = FormClient::new(site.title.clone(), config.forms.source.clone(), page_url.clone());
    let result = client.submit(&data, endpoint.as_deref()).await;
    emit(&serde_json::to_string_pretty(&result)?)?;

    let handles = Dispatcher::from_settings(&site.analytics, page_url)
        .track(AnalyticsEvent::form_submit("contact", result.success));
    if !handles.is_empty()
        && tokio::time::timeout(ANALYTICS_GRACE, futures::future::join_all(handles))
            .await
            .is_err()
    {
        debug!("Analytics delivery still pending at exit");
    }

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_flag_wins_over_config() {
        let mut config = VitrineConfig::default();
        config.paths.content = Some(PathBuf::from("from-config.json"));
        assert_eq!(
            content_path(Some(PathBuf::from("flag.json")), &config).unwrap(),
            PathBuf::from("flag.json")
        );
        assert_eq!(
            content_path(None, &config).unwrap(),
            PathBuf::from("from-config.json")
        );
        assert!(content_path(None, &VitrineConfig::default()).is_err());
    }

    #[test]
    fn summary_counts_by_severity() {
        let assembly = Assembly {
            sections: Vec::new(),
            diagnostics: vec![
                Diagnostic::UnknownComponent {
                    index: 0,
                    component: "Marquee".into(),
                },
                Diagnostic::MissingRequired {
                    index: 1,
                    component: "Hero".into(),
                    field: "title".into(),
                },
            ],
        };
        assert_eq!(summary(&assembly), "0 sections, 1 warnings, 1 errors");
    }
}
