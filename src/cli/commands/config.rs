use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// $EDITOR, then $VISUAL, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    debug!(%editor, path = %path.display(), "launching editor");
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    if !*edit_config {
        return Ok(());
    }

    let fallback = default_editor();
    let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

    if open_in(&chosen, &path) {
        success(format!("Configuration edited with '{chosen}'."));
        return Ok(());
    }

    if chosen != fallback {
        warning(format!("Editor '{chosen}' failed, trying '{fallback}'."));
        if open_in(&fallback, &path) {
            success(format!("Configuration edited with '{fallback}'."));
            return Ok(());
        }
    }

    error(format!(
        "Could not edit {} (no working editor).",
        path.display()
    ));
    Ok(())
}
