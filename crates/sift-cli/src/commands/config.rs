//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub async fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, path, formatter),
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Print the effective configuration.
fn show_config(config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    if path.exists() {
        eprintln!("{}", formatter.info(&format!("Loaded from {}", path.display())));
    } else {
        eprintln!(
            "{}",
            formatter.info(&format!("{} does not exist, showing defaults", path.display()))
        );
    }
    println!("{}", config.to_toml()?);
    Ok(())
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", path.display()))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_then_refuse_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);

        let init = || ConfigArgs {
            action: ConfigAction::Init { force: false },
        };

        execute_config(init(), &Config::default(), &path, &formatter)
            .await
            .unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let again = execute_config(init(), &Config::default(), &path, &formatter).await;
        assert!(matches!(again, Err(CliError::Config(_))));

        let forced = ConfigArgs {
            action: ConfigAction::Init { force: true },
        };
        assert!(execute_config(forced, &Config::default(), &path, &formatter)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_show_without_file() {
        let dir = TempDir::new().unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = ConfigArgs {
            action: ConfigAction::Show,
        };

        let result = execute_config(
            args,
            &Config::default(),
            &dir.path().join("absent.toml"),
            &formatter,
        )
        .await;
        assert!(result.is_ok());
    }
}
