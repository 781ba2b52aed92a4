use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::export::ExportFormat;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub toc: bool,
    pub stats: bool,
    pub escape_html: bool,
    pub format: Option<ExportFormat>,
    pub title: Option<String>,
    pub output: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            toc: self.toc || other.toc,
            stats: self.stats || other.stats,
            escape_html: self.escape_html || other.escape_html,
            format: other.format.or(self.format),
            title: other.title.clone().or_else(|| self.title.clone()),
            output: other.output.clone().or_else(|| self.output.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("markdraft").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("markdraft")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("markdraft").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("markdraft")
                .join("config");
        }
    }

    PathBuf::from(".markdraftrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".markdraftrc")
}

/// Default location of the session store next to the global config.
pub fn store_path() -> PathBuf {
    global_config_path().with_file_name("store.json")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Split a config line into flag tokens. A `--title` line keeps the rest of
/// the line as one value so titles may contain spaces.
fn line_tokens(line: &str) -> Vec<String> {
    if let Some(rest) = line
        .strip_prefix("--title")
        .filter(|rest| rest.starts_with(char::is_whitespace))
    {
        return vec!["--title".to_string(), rest.trim().to_string()];
    }
    line.split_whitespace().map(ToOwned::to_owned).collect()
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# markdraft defaults (saved with --save)".to_string());
    if flags.watch {
        lines.push("--watch".to_string());
    }
    if flags.toc {
        lines.push("--toc".to_string());
    }
    if flags.stats {
        lines.push("--stats".to_string());
    }
    if flags.escape_html {
        lines.push("--escape-html".to_string());
    }
    if let Some(format) = flags.format {
        lines.push(format!("--format {}", format_name(format)));
    }
    if let Some(title) = &flags.title {
        lines.push(format!("--title {title}"));
    }
    if let Some(output) = &flags.output {
        lines.push(format!("--output {}", output.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--watch" || token == "-w" {
            flags.watch = true;
        } else if token == "--toc" {
            flags.toc = true;
        } else if token == "--stats" {
            flags.stats = true;
        } else if token == "--escape-html" {
            flags.escape_html = true;
        } else if token == "--format" || token == "-f" {
            if let Some(next) = tokens.get(i + 1) {
                flags.format = parse_format(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--format=") {
            flags.format = parse_format(value);
        } else if token == "--title" {
            if let Some(next) = tokens.get(i + 1) {
                flags.title = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--title=") {
            flags.title = Some(value.to_string());
        } else if token == "--output" || token == "-o" {
            if let Some(next) = tokens.get(i + 1) {
                flags.output = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--output=") {
            flags.output = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

fn parse_format(s: &str) -> Option<ExportFormat> {
    match s {
        "html" => Some(ExportFormat::Html),
        "markdown" | "md" => Some(ExportFormat::Markdown),
        _ => None,
    }
}

const fn format_name(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Html => "html",
        ExportFormat::Markdown => "markdown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "markdraft".to_string(),
            "--watch".to_string(),
            "--toc".to_string(),
            "--stats".to_string(),
            "--format".to_string(),
            "markdown".to_string(),
            "--output=out.md".to_string(),
            "--escape-html".to_string(),
            "README.md".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.watch);
        assert!(flags.toc);
        assert!(flags.stats);
        assert!(flags.escape_html);
        assert_eq!(flags.format, Some(ExportFormat::Markdown));
        assert_eq!(flags.output, Some(PathBuf::from("out.md")));
        assert_eq!(flags.title, None);
    }

    #[test]
    fn test_short_flags() {
        let args: Vec<String> = ["-w", "-f", "html", "-o", "out.html"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let flags = parse_flag_tokens(&args);
        assert!(flags.watch);
        assert_eq!(flags.format, Some(ExportFormat::Html));
        assert_eq!(flags.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn test_unknown_format_is_ignored() {
        let args = vec!["--format".to_string(), "pdf".to_string()];
        assert_eq!(parse_flag_tokens(&args).format, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            watch: true,
            format: Some(ExportFormat::Markdown),
            title: Some("File".to_string()),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            toc: true,
            format: Some(ExportFormat::Html),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.watch);
        assert!(merged.toc);
        assert_eq!(merged.format, Some(ExportFormat::Html));
        assert_eq!(merged.title.as_deref(), Some("File"));
    }

    #[test]
    fn test_title_line_keeps_spaces() {
        assert_eq!(line_tokens("--title My Notes"), ["--title", "My Notes"]);
        assert_eq!(line_tokens("--titles x"), ["--titles", "x"]);
        assert_eq!(line_tokens("--watch --toc"), ["--watch", "--toc"]);
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".markdraftrc");
        let flags = ConfigFlags {
            watch: true,
            toc: true,
            stats: true,
            escape_html: true,
            format: Some(ExportFormat::Markdown),
            title: Some("Release Notes".to_string()),
            output: Some(PathBuf::from("out.md")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let flags = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(flags, ConfigFlags::default());
    }

    #[test]
    fn test_store_path_sits_beside_config() {
        assert_eq!(store_path().file_name().unwrap(), "store.json");
    }
}
