//! Markdraft - render and export markdown documents.
//!
//! # Usage
//!
//! ```bash
//! markdraft README.md > README.html
//! markdraft --format markdown --output copy.md README.md
//! markdraft --toc --stats --watch --output README.html README.md
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use markdraft::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags, store_path,
};
use markdraft::document::{Stats, TocEntry};
use markdraft::export::ExportFormat;
use markdraft::render::RenderOptions;
use markdraft::session::{JsonFileStore, MemoryStore, Session, Store};
use markdraft::watcher::SourceWatcher;

const WATCH_DEBOUNCE: Duration = Duration::from_millis(200);
const WATCH_POLL: Duration = Duration::from_millis(250);

/// Render markdown to styled HTML, or export it, from the command line
#[derive(Parser, Debug)]
#[command(name = "markdraft", version, about, long_about = None)]
struct Cli {
    /// Markdown file to export (defaults to the saved editor document)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Write the export here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Title of the HTML document (defaults to the file name)
    #[arg(long)]
    title: Option<String>,

    /// Print the table of contents to stderr
    #[arg(long)]
    toc: bool,

    /// Print word count and reading time to stderr
    #[arg(long)]
    stats: bool,

    /// Escape raw HTML in the source before rendering
    #[arg(long)]
    escape_html: bool,

    /// Watch FILE and re-export on every change
    #[arg(short, long, requires = "file")]
    watch: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    match &cli.file {
        Some(file) => {
            if !file.exists() {
                anyhow::bail!("File not found: {}", file.display());
            }
            export_file(file, &effective)?;
            if effective.watch {
                watch(file, &effective)?;
            }
        }
        None => {
            let path = store_path();
            let store = JsonFileStore::open(&path)
                .with_context(|| format!("Failed to open store {}", path.display()))?;
            export_session(&Session::open(store), &effective, None)?;
        }
    }
    Ok(())
}

/// Read `file` and export it once.
fn export_file(file: &Path, flags: &ConfigFlags) -> Result<String> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let title = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned());
    let session = Session::with_content(MemoryStore::new(), &content);
    export_session(&session, flags, title.as_deref())?;
    Ok(content)
}

/// Print the requested reports and write the export.
fn export_session<S: Store>(
    session: &Session<S>,
    flags: &ConfigFlags,
    default_title: Option<&str>,
) -> Result<()> {
    if flags.toc {
        eprint!("{}", format_toc(&session.toc()));
    }
    if flags.stats {
        eprintln!("{}", format_stats(session.stats()));
    }

    let options = RenderOptions {
        escape_html: flags.escape_html,
    };
    let title = flags
        .title
        .as_deref()
        .or(default_title)
        .unwrap_or_else(|| session.active_name());
    let format = flags.format.unwrap_or_default();
    let bytes = markdraft::export::export_with(&session.content(), title, format, &options);

    match &flags.output {
        Some(path) => std::fs::write(path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")
        }
    }
}

/// Re-export `file` whenever its content changes.
fn watch(file: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut watcher = SourceWatcher::new(file, WATCH_DEBOUNCE)
        .with_context(|| format!("Failed to watch {}", file.display()))?;
    if let Some(output) = &flags.output {
        watcher = watcher.ignoring(output);
    }
    eprintln!("Watching {} (Ctrl+C to stop)", watcher.target_path().display());

    let mut last = std::fs::read_to_string(file).unwrap_or_default();
    loop {
        std::thread::sleep(WATCH_POLL);
        if !watcher.take_change_ready() {
            continue;
        }
        let Ok(current) = std::fs::read_to_string(file) else {
            tracing::warn!(file = %file.display(), "source unreadable, waiting for next change");
            continue;
        };
        if current == last {
            continue;
        }
        match export_file(file, flags) {
            Ok(content) => last = content,
            Err(err) => tracing::warn!(error = %err, "re-export failed"),
        }
    }
}

fn format_toc(entries: &[TocEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
            format!("{indent}- {} (#{})\n", entry.title, entry.id)
        })
        .collect()
}

fn format_stats(stats: Stats) -> String {
    format!(
        "{} words, {} characters, {} min read",
        stats.word_count, stats.char_count, stats.reading_time_minutes
    )
}
