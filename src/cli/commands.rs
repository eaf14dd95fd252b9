//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::assessment_report;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraError;
use crate::util::path::resolve_against;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = project_dir(cli.project_dir.as_deref())?;
    debug!("execute_command: project_dir={}", project_dir.display());

    match &cli.command {
        Some(Commands::Build { output }) => build(&project_dir, output.as_deref()),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => config_show(&project_dir),
            ConfigCommands::Init { global, force } => config_init(&project_dir, *global, *force),
            ConfigCommands::Path => config_path(&project_dir),
        },
        Some(Commands::Completion { shell }) => {
            completion(*shell);
            Ok(())
        }
        None => Cli::command()
            .print_help()
            .map_err(|e| CliError::from(InfraError::io("print help", e))),
    }
}

fn project_dir(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => Err(CliError::InvalidArgs(format!(
            "project directory does not exist: {}",
            dir.display()
        ))),
        None => std::env::current_dir()
            .map_err(|e| CliError::from(InfraError::io("current directory", e))),
    }
}

/// Assemble the report and save it to the configured (or given) path.
#[instrument]
fn build(project_dir: &Path, output_flag: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load(Some(project_dir))?;
    let target = output_flag
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.output.clone());
    let target = resolve_against(project_dir, &target);
    debug!("build: target={}", target.display());

    let container = ServiceContainer::new(settings);
    let document = assessment_report(&container.settings.title_page);
    let saved = container.document_service().save(&document, &target)?;

    output::success(&format!(
        "wrote {} ({} blocks)",
        saved.path.display(),
        saved.blocks
    ));
    Ok(())
}

#[instrument]
fn config_show(project_dir: &Path) -> CliResult<()> {
    let settings = Settings::load(Some(project_dir))?;
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn config_init(project_dir: &Path, global: bool, force: bool) -> CliResult<()> {
    let path = if global {
        global_config_path()
            .ok_or_else(|| CliError::Usage("cannot determine global config directory".into()))?
    } else {
        local_config_path(project_dir)
    };

    let fs = RealFileSystem;
    if fs.exists(&path) {
        if !force {
            return Err(CliError::Usage(format!(
                "config already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }
        output::warning(&format!("overwriting {}", path.display()));
    }

    fs.ensure_parent(&path)
        .map_err(|e| InfraError::io(format!("create directory for {}", path.display()), e))?;
    fs.write(&path, &Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;

    output::action("Created", &path.display());
    Ok(())
}

#[instrument]
fn config_path(project_dir: &Path) -> CliResult<()> {
    let marker = |p: &Path| if p.exists() { "" } else { " (not found)" };

    match global_config_path() {
        Some(global) => output::info(&format!("global: {}{}", global.display(), marker(&global))),
        None => output::info("global: (unavailable)"),
    }
    let local = local_config_path(project_dir);
    output::info(&format!("local:  {}{}", local.display(), marker(&local)));
    output::detail("env:    REPORTDOC_* (e.g. REPORTDOC_OUTPUT)");
    Ok(())
}

fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
