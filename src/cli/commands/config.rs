use std::fs;
use std::process::Command as Process;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// View, check or edit the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                info("No configuration file found; defaults are in effect");
            }
            return Ok(());
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration OK");
            } else {
                for p in problems {
                    warning(p);
                }
            }
            return Ok(());
        }

        if *edit_config {
            return edit(editor.as_deref());
        }

        info("Nothing to do (use --print, --check or --edit)");
    }
    Ok(())
}

fn edit(editor: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(
            "no configuration file; run `punchlog init` first".to_string(),
        ));
    }

    let editor = editor
        .map(str::to_string)
        .or_else(|| std::env::var("EDITOR").ok())
        .or_else(|| std::env::var("VISUAL").ok())
        .unwrap_or_else(|| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let status = Process::new(&editor).arg(&path).status()?;
    if !status.success() {
        return Err(AppError::Config(format!(
            "editor '{editor}' exited with an error"
        )));
    }

    Ok(())
}
