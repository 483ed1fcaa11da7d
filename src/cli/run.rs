use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command, ExportArgs},
    report,
};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json, load_config},
    formatter::{Formatter, GraphqlFormatter, PassthroughFormatter},
    pipeline::{self, RunOptions},
};

pub fn run(Arguments { command }: Arguments) -> Result<()> {
    match command {
        Some(Command::Export(args)) => export(args),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn export(args: ExportArgs) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd)?;

    let directory = args
        .directory
        .or_else(|| config.directory.clone().map(PathBuf::from))
        .context("No directory given. Pass --directory or set \"directory\" in the config file.")?;
    let url = args
        .url
        .or(config.url.clone())
        .context("No GraphQL URL given. Pass --url or set \"url\" in the config file.")?;

    let options = RunOptions {
        directory,
        url,
        output: args.output.unwrap_or_else(|| config.output.clone().into()),
        extensions: config.extensions.clone(),
        ignores: config.ignore_patterns()?,
    };

    let formatter: &dyn Formatter = if args.no_format {
        &PassthroughFormatter
    } else {
        &GraphqlFormatter
    };

    let summary = pipeline::run(&options, formatter)?;
    report::print_diagnostics(&summary.diagnostics);
    report::print_summary(&summary, args.verbose);

    Ok(())
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("Created {}", CONFIG_FILE_NAME);
    Ok(())
}
