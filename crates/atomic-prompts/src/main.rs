//! Render, list, and inspect atomic prompts from the command line.
//!
//! # Examples
//!
//! ```sh
//! # Render a preset plus a couple of extra snippets
//! atomic-prompts render "agent, concise_tone, web_search"
//!
//! # Append free-form text after the sections
//! atomic-prompts render gentle_dev_agent --extra "The project is written in Rust."
//!
//! # Legacy newline-joined output
//! atomic-prompts render "agent,no_loop" --legacy
//!
//! # Show every category, key and preset as JSON
//! atomic-prompts list --json
//!
//! # See what a key string expands to, and what was dropped
//! atomic-prompts explain "gentle_dev_agent, typo_tone"
//!
//! # Use a custom catalog file
//! atomic-prompts --catalog team-prompts.json render playful_agent
//! ```

use std::path::PathBuf;
use std::process;

use atomic_prompts::{CatalogFile, Category, Preset, PromptAssembler, Snippet};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Render, list, and inspect atomic prompts.
#[derive(Parser)]
#[command(name = "atomic-prompts")]
struct Cli {
    /// JSON catalog file to use instead of the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log resolution details (dropped keys, cycles) to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a comma-separated key list into a prompt
    Render {
        /// Comma-separated atomic keys and preset names
        keys: String,

        /// Free-form text appended after the rendered sections
        #[arg(long)]
        extra: Option<String>,

        /// Join top-level values with newlines instead of grouping into sections
        #[arg(long)]
        legacy: bool,
    },

    /// List categories, snippet keys and presets
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the atomic keys a key list resolves to and what was dropped
    Explain {
        /// Comma-separated atomic keys and preset names
        keys: String,
    },
}

/// JSON shape of `list --json`.
#[derive(Serialize)]
struct Listing<'a> {
    snippets: Vec<&'a Snippet>,
    presets: Vec<&'a Preset>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_assembler(catalog: Option<&PathBuf>) -> Result<PromptAssembler, String> {
    match catalog {
        Some(path) => CatalogFile::load(path)
            .and_then(CatalogFile::into_assembler)
            .map_err(|e| e.to_string()),
        None => Ok(PromptAssembler::builtin().clone()),
    }
}

fn list_text(assembler: &PromptAssembler) -> String {
    let mut out = String::new();
    for category in Category::DISPLAY_ORDER {
        let mut entries = assembler.snippets().in_category(category).peekable();
        if entries.peek().is_none() {
            continue;
        }
        out.push_str(&format!("{category} ({})\n", category.title()));
        for snippet in entries {
            out.push_str(&format!("  {}\n", snippet.key));
        }
        out.push('\n');
    }
    if !assembler.presets().is_empty() {
        out.push_str("Presets\n");
        for preset in assembler.presets().iter() {
            out.push_str(&format!("  {} = {}\n", preset.name, preset.constituents.join(",")));
        }
    }
    out
}

fn explain_text(assembler: &PromptAssembler, keys: &str) -> String {
    let report = assembler.explain(keys);
    let line = |label: &str, items: &[&str]| {
        if items.is_empty() {
            format!("{label}: (none)\n")
        } else {
            format!("{label}: {}\n", items.join(", "))
        }
    };
    let unknown: Vec<&str> = report.unknown.iter().map(String::as_str).collect();
    let cycles: Vec<&str> = report.cycles.iter().map(String::as_str).collect();
    let mut out = line("resolved", &report.keys);
    out.push_str(&line("unknown", &unknown));
    out.push_str(&line("cycles", &cycles));
    out
}

fn run(cli: &Cli) -> Result<String, String> {
    let assembler = load_assembler(cli.catalog.as_ref())?;

    match &cli.command {
        Command::Render {
            keys,
            extra,
            legacy,
        } => {
            let rendered = if *legacy {
                assembler.legacy_resolve(keys, extra.as_deref())
            } else {
                assembler.formatted_resolve(keys, extra.as_deref())
            };
            Ok(format!("{rendered}\n"))
        }
        Command::List { json: true } => {
            let listing = Listing {
                snippets: assembler.snippets().iter().collect(),
                presets: assembler.presets().iter().collect(),
            };
            serde_json::to_string_pretty(&listing)
                .map(|s| format!("{s}\n"))
                .map_err(|e| format!("failed to serialize catalog: {e}"))
        }
        Command::List { json: false } => Ok(list_text(&assembler)),
        Command::Explain { keys } => Ok(explain_text(&assembler, keys)),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PromptAssembler {
        let json = r#"{
            "snippets": {
                "Tone": { "calm": "Stay calm." },
                "Tools": { "shell": "You can run commands." }
            },
            "presets": { "ops": "shell, calm", "loop": "loop,calm" }
        }"#;
        CatalogFile::from_json(json)
            .unwrap()
            .into_assembler()
            .unwrap()
    }

    #[test]
    fn cli_parses_render_flags() {
        let cli = Cli::parse_from([
            "atomic-prompts",
            "render",
            "agent",
            "--extra",
            "x",
            "--legacy",
        ]);
        match cli.command {
            Command::Render { keys, extra, legacy } => {
                assert_eq!(keys, "agent");
                assert_eq!(extra.as_deref(), Some("x"));
                assert!(legacy);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["atomic-prompts", "list", "--json", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::List { json: true }));
    }

    #[test]
    fn list_text_groups_by_category() {
        let text = list_text(&sample());
        assert_eq!(
            text,
            "Tone (Tone of Voice)\n  calm\n\nTools (Available Tools)\n  shell\n\n\
             Presets\n  ops = shell,calm\n  loop = loop,calm\n"
        );
    }

    #[test]
    fn explain_text_lists_dropped_keys() {
        let text = explain_text(&sample(), "ghost, loop");
        assert_eq!(text, "resolved: calm\nunknown: ghost\ncycles: loop\n");
    }

    #[test]
    fn run_renders_builtin_catalog() {
        let cli = Cli::parse_from(["atomic-prompts", "render", " , ", "--extra", "Hello"]);
        assert_eq!(run(&cli).unwrap(), "Hello\n");
    }

    #[test]
    fn run_reports_missing_catalog() {
        let cli = Cli::parse_from([
            "atomic-prompts",
            "--catalog",
            "/definitely/not/here.json",
            "list",
        ]);
        let err = run(&cli).unwrap_err();
        assert!(err.contains("failed to read catalog file"));
    }
}
