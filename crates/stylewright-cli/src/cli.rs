//! Argument parsing and command execution.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::Style;
use stylewright::{resolve_config, Config, Resolved};

/// Resolve content sources and theme tokens for a utility-CSS build.
#[derive(Debug, Parser)]
#[command(name = "stylewright", version, about)]
pub struct Cli {
    /// Configuration file (default: stylewright.config.{yaml,yml,json} in --root)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root content patterns are resolved against
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the content files to scan
    Files,
    /// Print the resolved theme tree
    Theme {
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print flattened theme tokens
    Tokens,
    /// Resolve everything and print a summary
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Cli {
    /// Log filter matching the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "stylewright=debug,info",
            _ => "trace",
        }
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("loading {}", path.display())),
            None => Config::discover(&self.root).context("discovering configuration"),
        }
    }
}

/// Runs the selected command and returns what it prints.
///
/// `styled` toggles terminal colors in the `tokens` and `check` output.
pub fn run(cli: &Cli, styled: bool) -> Result<String> {
    tracing::debug!(command = ?cli.command, root = %cli.root.display(), "running");
    let config = cli.load_config()?;
    let resolved = resolve_config(&config, &cli.root).context("resolving configuration")?;

    let mut out = String::new();
    match &cli.command {
        Command::Files => {
            for path in resolved.files.iter() {
                writeln!(out, "{}", path.display())?;
            }
        }
        Command::Theme { format } => {
            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&resolved.theme)?,
                Format::Yaml => serde_yaml::to_string(&resolved.theme)?,
            };
            out.push_str(rendered.trim_end());
            out.push('\n');
        }
        Command::Tokens => write_tokens(&mut out, &resolved, styled)?,
        Command::Check => write_summary(&mut out, &resolved, styled)?,
    }
    Ok(out)
}

fn write_tokens(out: &mut String, resolved: &Resolved, styled: bool) -> Result<()> {
    let path_style = Style::new().cyan().force_styling(styled);
    for token in resolved.tokens() {
        writeln!(
            out,
            "{} = {}",
            path_style.apply_to(token.path()),
            token.value()
        )?;
    }
    Ok(())
}

fn write_summary(out: &mut String, resolved: &Resolved, styled: bool) -> Result<()> {
    let ok = Style::new().green().bold().force_styling(styled);
    let warn = Style::new().yellow().bold().force_styling(styled);

    for warning in resolved.warnings() {
        writeln!(out, "{} {}", warn.apply_to("warning:"), warning)?;
    }
    let categories = resolved.theme.len();
    writeln!(
        out,
        "{} {} content file(s), {} token(s) in {} categor{}, {} plugin(s)",
        ok.apply_to("ok:"),
        resolved.files.len(),
        resolved.tokens().len(),
        categories,
        if categories == 1 { "y" } else { "ies" },
        resolved.plugins.len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r##"
content:
  - ./index.html
  - ./src/**/*.{vue,js,ts,jsx,tsx}
theme:
  extend:
    colors:
      ny-red: "#C41E3A"
      ny-gold: "#FFD700"
plugins: []
"##;

    fn project() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("stylewright.config.yaml"), CONFIG).unwrap();
        fs::write(temp_dir.path().join("index.html"), "<body></body>").unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/main.js"), "export {}").unwrap();
        temp_dir
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stylewright").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = cli(&["files"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.config.is_none());
        assert_eq!(cli.log_filter(), "warn");
        assert!(matches!(cli.command, Command::Files));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = cli(&["theme", "--format", "yaml", "-vv", "--root", "site"]);
        assert_eq!(cli.root, PathBuf::from("site"));
        assert_eq!(cli.log_filter(), "trace");
        assert!(matches!(cli.command, Command::Theme { format: Format::Yaml }));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["stylewright"]).is_err());
    }

    #[test]
    fn test_files_lists_in_order() {
        let dir = project();
        let root = dir.path().to_str().unwrap();
        let out = run(&cli(&["--root", root, "files"]), false).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("index.html"));
        assert!(lines[1].ends_with("main.js"));
    }

    #[test]
    fn test_tokens_include_extension() {
        let dir = project();
        let root = dir.path().to_str().unwrap();
        let out = run(&cli(&["--root", root, "tokens"]), false).unwrap();
        assert!(out.contains("colors.ny-red = #C41E3A\n"));
        assert!(out.contains("colors.white = #ffffff\n"));
    }

    #[test]
    fn test_theme_json() {
        let dir = project();
        let root = dir.path().to_str().unwrap();
        let out = run(&cli(&["--root", root, "theme"]), false).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["colors"]["ny-gold"], "#FFD700");
        assert_eq!(value["colors"]["red"]["500"], "#ef4444");
    }

    #[test]
    fn test_check_summary_and_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yaml");
        fs::write(&config_path, CONFIG).unwrap();

        let out = run(
            &cli(&["--config", config_path.to_str().unwrap(), "check"]),
            false,
        )
        .unwrap();
        assert!(out.starts_with("warning: no content files matched"));
        assert!(out.contains("ok: 0 content file(s)"));
    }

    #[test]
    fn test_empty_content_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("stylewright.config.yaml"), "content: []\n").unwrap();
        let root = dir.path().to_str().unwrap();

        let err = run(&cli(&["--root", root, "check"]), false).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("no content sources configured"));
    }

    #[test]
    fn test_missing_config_is_error() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let err = run(&cli(&["--root", root, "files"]), false).unwrap_err();
        assert!(format!("{err:#}").contains("no configuration file found"));
    }
}
