//! Command dispatch and implementations

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::builder::LineTreeBuilder;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::decoder;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { file, fold }) => tree(file, *fold, settings),
        Some(Commands::Check { file }) => check(file, settings),
        Some(Commands::Records { file }) => records(file, settings),
        Some(Commands::Flatten { file }) => flatten(file, settings),
        Some(Commands::Scan { dir }) => scan(dir, settings),
        Some(Commands::Config { command }) => config_cmd(command, settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn parse(file: &Path, settings: &Settings) -> CliResult<crate::arena::TreeArena> {
    let records = decoder::decode_file(file)?;
    let builder = LineTreeBuilder::with_options(settings.builder_options());
    Ok(builder.build(records)?)
}

#[instrument(skip(settings))]
fn tree(file: &Path, fold: bool, settings: &Settings) -> CliResult<()> {
    let forest = parse(file, settings)?;
    for &root in forest.roots() {
        println!("{}", output::record_tree(&forest, root, fold));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn check(file: &Path, settings: &Settings) -> CliResult<()> {
    let forest = parse(file, settings)?;
    output::success(&format!(
        "{}: {} records, {} lines, max depth {}",
        file.display(),
        forest.roots().len(),
        forest.len(),
        forest.depth()
    ));
    Ok(())
}

#[instrument(skip(settings))]
fn records(file: &Path, settings: &Settings) -> CliResult<()> {
    let forest = parse(file, settings)?;
    for &root in forest.roots() {
        if let Some(node) = forest.get_node(root) {
            let id = node.data.id.as_deref().unwrap_or("-");
            output::info(&format!("{}\t{}", id, node.data.tag));
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn flatten(file: &Path, settings: &Settings) -> CliResult<()> {
    let forest = parse(file, settings)?;
    for record in forest.flatten() {
        output::info(&record.to_line());
    }
    Ok(())
}

#[instrument(skip(settings))]
fn scan(dir: &Path, settings: &Settings) -> CliResult<()> {
    if !dir.is_dir() {
        return Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut failed = 0usize;
    for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !settings.scan_extensions.iter().any(|s| s == ext) {
            continue;
        }
        debug!("scanning {}", entry.path().display());
        match parse(entry.path(), settings) {
            Ok(forest) => output::success(&format!(
                "{}: {} records",
                entry.path().display(),
                forest.roots().len()
            )),
            Err(e) => {
                failed += 1;
                output::failure(&format!("{}: {}", entry.path().display(), e));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::ScanFailed { failed });
    }
    Ok(())
}

fn config_cmd(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Effective configuration:");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init => {
            output::info(&Settings::template());
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("no config directory available"),
        },
    }
    Ok(())
}
