use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitecopy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract the visible copy of a website project into text files")]
#[command(
    long_about = "SiteCopy reads the page templates and HTML files of a website project and \
                  writes the human-readable text of each one to a Markdown file, one phrase per line."
)]
#[command(after_help = "EXAMPLES:\n  \
    sitecopy\n  \
    sitecopy --root ../xpdel-site\n  \
    sitecopy --output copy-review --verbose\n  \
    sitecopy --dry-run --output-format json\n  \
    sitecopy --generate-config --config sitecopy.toml")]
pub struct Cli {
    /// Project root that source paths are resolved against
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Output directory (relative paths are resolved against the root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be done without executing)
    #[arg(long, help = "Show which files would be extracted without writing anything")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref(), &self.root)?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new().with_output_dir(self.output.clone())
    }

    /// Where `--generate-config` writes to.
    pub fn generated_config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from("sitecopy.toml"))
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn base_cli(root: PathBuf) -> Cli {
        Cli {
            root,
            output: None,
            config: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
            dry_run: false,
            generate_config: false,
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sitecopy"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.output.is_none());
        assert_eq!(cli.output_format, OutputFormat::Human);
        assert!(!cli.dry_run);
        assert_eq!(cli.generated_config_path(), PathBuf::from("sitecopy.toml"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "sitecopy",
            "--root",
            "site",
            "-o",
            "copy",
            "--output-format",
            "json",
            "-vv",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.root, PathBuf::from("site"));
        assert_eq!(cli.output, Some(PathBuf::from("copy")));
        assert_eq!(cli.output_format, OutputFormat::Json);
        assert_eq!(cli.verbosity_level(), 2);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["sitecopy", "-q", "-v"]).is_err());

        let cli = Cli::try_parse_from(["sitecopy", "-q"]).unwrap();
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_output_override() {
        let temp_dir = TempDir::new().unwrap();
        let mut cli = base_cli(temp_dir.path().to_path_buf());
        cli.output = Some(PathBuf::from("copy-review"));

        let config = cli.load_config().unwrap();
        assert_eq!(config.output.directory, PathBuf::from("copy-review"));
        assert_eq!(
            config.output_directory(&cli.root),
            temp_dir.path().join("copy-review")
        );
    }

    #[test]
    fn test_config_discovered_under_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("sitecopy.toml"),
            "[output]\ndirectory = \"from_file\"\n",
        )
        .unwrap();

        let cli = base_cli(temp_dir.path().to_path_buf());
        let config = cli.load_config().unwrap();
        assert_eq!(config.output.directory, PathBuf::from("from_file"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        fs::write(&config_path, "[extraction]\ntemplate_extension = \".tsx\"\n").unwrap();

        let mut cli = base_cli(temp_dir.path().to_path_buf());
        cli.config = Some(config_path);
        assert!(cli.load_config().is_err());
    }
}
