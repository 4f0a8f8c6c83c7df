//! mernkit - main entry point

use anyhow::Context;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use mernkit::cli::Cli;
use mernkit::config::ScaffoldConfig;
use mernkit::preflight::Toolchain;
use mernkit::project::ProjectSpec;
use mernkit::{prompt, scaffold};

/// Initialize logging. `RUST_LOG` overrides the default `warn` level.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Merge defaults, the optional config file, environment and CLI flags
fn load_config(cli: &Cli) -> anyhow::Result<ScaffoldConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            ScaffoldConfig::load_from_file(path)?
        }
        None => ScaffoldConfig::default(),
    };
    config.apply_env();
    cli.apply_to(&mut config);
    config.validate()?;
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Partial failure only changes the exit status under `--strict`
fn exit_code(config: &ScaffoldConfig, succeeded: bool) -> ExitCode {
    if config.strict && !succeeded {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_logger();
    info!("mernkit starting up");

    let cli = Cli::parse_args();
    let config = load_config(&cli)?;

    let name = match &cli.name {
        Some(name) => name.clone(),
        None => prompt::ask_project_name(io::stdin().lock(), io::stdout())?,
    };
    let base_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine the current directory")?,
    };
    let project = ProjectSpec::from_input(&name, &base_dir);

    let toolchain = Toolchain::resolve(&config);
    if !config.tools_disabled() {
        toolchain.warn_missing();
    }

    let report = match scaffold::scaffold(&project, &config, &toolchain) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to create project root: {}", e);
            eprintln!("Error creating project folder: {}", e);
            return Ok(exit_code(&config, false));
        }
    };

    scaffold::print_summary(&report);
    println!("Project setup complete!");
    println!("{}", scaffold::completion_instructions(&project.relative_dir()));

    Ok(exit_code(&config, report.is_success()))
}
