use clap::Parser;
use sitecopy::{Cli, OutputFormatter, OutputMode, SiteCopy, SiteCopyError, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let sitecopy = match SiteCopy::from_cli(&cli) {
        Ok(sitecopy) => sitecopy,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    if cli.dry_run {
        return handle_dry_run(&sitecopy);
    }

    match sitecopy.run() {
        Ok(report) => {
            sitecopy.output_formatter().print_run_report(&report);
            0
        }
        Err(e) => {
            sitecopy.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &SiteCopyError) -> i32 {
    match error {
        SiteCopyError::SourceRead { .. } => 3,
        SiteCopyError::OutputWrite { .. } => 4,
        SiteCopyError::Config { .. } => 5,
        SiteCopyError::Scan { .. } => 6,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli.generated_config_path();

    match SiteCopy::generate_sample_config(&config_path) {
        Ok(()) => {
            println!(
                "Generated sample configuration file: {}",
                config_path.display()
            );
            println!("\nTo use this configuration:");
            println!("  sitecopy --config {}", config_path.display());
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!(
                "Failed to generate configuration file: {}",
                e.user_message()
            );
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            exit_code_for(&e)
        }
    }
}

fn handle_dry_run(sitecopy: &SiteCopy) -> i32 {
    let formatter = sitecopy.output_formatter();

    formatter.info("DRY RUN MODE - No files will be written");

    let plan = match sitecopy.plan() {
        Ok(plan) => plan,
        Err(e) => {
            sitecopy.handle_error(&e);
            return exit_code_for(&e);
        }
    };

    let config = sitecopy.config();
    formatter.info(&format!(
        "Output directory: {}",
        sitecopy.output_directory().display()
    ));
    formatter.info(&format!(
        "Template extension: {}",
        config.extraction.template_extension
    ));

    formatter.print_plan(&plan, &config.output.extension);

    if formatter.mode() != OutputMode::Json {
        formatter.print_separator();
        formatter.success("Dry run completed successfully");
    }

    0
}

fn print_startup_error(error: &SiteCopyError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecopy::{cli::OutputFormat, Config};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli_for(root: PathBuf) -> Cli {
        Cli {
            root,
            output: None,
            config: None,
            output_format: OutputFormat::Plain,
            verbose: 0,
            quiet: true,
            dry_run: false,
            generate_config: false,
        }
    }

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let mut cli = cli_for(temp_dir.path().to_path_buf());
        cli.config = Some(config_path.clone());
        cli.generate_config = true;

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[output]"));
        assert!(content.contains("[extraction]"));
    }

    #[test]
    fn test_dry_run_mode() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("xpdel_home.html"), "<p>Hi</p>").unwrap();

        let sitecopy = SiteCopy::new(
            Config::default(),
            temp_dir.path(),
            OutputMode::Plain,
            0,
            true,
        );

        assert_eq!(handle_dry_run(&sitecopy), 0);
        assert!(!temp_dir.path().join("website_content").exists());
    }

    #[test]
    fn test_exit_codes() {
        let read = SiteCopyError::SourceRead {
            path: PathBuf::from("a.html"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad"),
        };
        let config = SiteCopyError::Config {
            message: "bad".to_string(),
        };
        let scan = SiteCopyError::Scan {
            path: PathBuf::from("pages"),
            message: "bad".to_string(),
        };

        assert_eq!(exit_code_for(&read), 3);
        assert_eq!(exit_code_for(&config), 5);
        assert_eq!(exit_code_for(&scan), 6);
    }

    #[test]
    fn test_startup_error_code_for_bad_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[output\n").unwrap();

        let mut cli = cli_for(temp_dir.path().to_path_buf());
        cli.config = Some(config_path);

        match SiteCopy::from_cli(&cli) {
            Err(e) => assert_eq!(exit_code_for(&e), 5),
            Ok(_) => panic!("broken config should not load"),
        }
    }
}
