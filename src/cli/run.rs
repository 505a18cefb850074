//! Command dispatch for the xi18nt CLI.
//!
//! Resolves the project directory and configuration, applies CLI
//! overrides, and hands off to the driver. Printing happens in
//! `cli::report` so this module stays side-effect free apart from the
//! work the commands themselves do.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::{Arguments, Command, TransformCommand};
use crate::config::{default_config_json, load_config, CONFIG_FILE_NAME};
use crate::driver::{run_transform, RunResult};

/// Outcome of running one CLI command.
pub enum CommandOutcome {
    Transform(RunResult),
    Init { path: PathBuf },
}

pub fn run(Arguments { command }: Arguments) -> Result<CommandOutcome> {
    match command {
        Some(Command::Transform(cmd)) => transform(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn transform(cmd: TransformCommand) -> Result<CommandOutcome> {
    let args = cmd.args;
    let cwd = env::current_dir().context("Failed to determine current directory")?;

    let loaded = load_config(&cwd)?;
    let mut config = loaded.config;
    config.validate()?;

    if let Some(bundle_name) = args.common.bundle_name {
        config.bundle_name = Some(bundle_name);
    }

    let project_dir = match args.common.source_root {
        Some(root) => resolve_project_dir(&cwd, &root)?,
        None => resolve_project_dir(&cwd, Path::new(&config.source_root))?,
    };

    let result = run_transform(&project_dir, &config, args.apply, args.common.verbose)?;
    Ok(CommandOutcome::Transform(result))
}

fn resolve_project_dir(cwd: &Path, root: &Path) -> Result<PathBuf> {
    let dir = if root.is_absolute() {
        root.to_path_buf()
    } else {
        cwd.join(root)
    };
    anyhow::ensure!(
        dir.is_dir(),
        "Project directory does not exist: {}",
        dir.display()
    );
    Ok(dir)
}

fn init() -> Result<CommandOutcome> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(CommandOutcome::Init {
        path: config_path.to_path_buf(),
    })
}
