use clap::Parser;
use std::path::PathBuf;

use crate::config::ScaffoldConfig;

/// mernkit - scaffold a MERN (MongoDB, Express, React, Node) project
#[derive(Parser, Debug)]
#[command(name = "mernkit")]
#[command(about = "Scaffold a MERN project with an Express backend and a React + Vite frontend")]
#[command(version)]
pub struct Cli {
    /// Project name; prompts for one when omitted
    pub name: Option<String>,

    /// Directory to create the project in (default: current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write template files but do not run npm or npx
    #[arg(long)]
    pub skip_install: bool,

    /// Dry-run mode: show what would be done without touching disk or running tools
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 1 when any step failed
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Flags only ever switch options on; they never clear a file setting
    pub fn apply_to(&self, config: &mut ScaffoldConfig) {
        config.skip_install |= self.skip_install;
        config.dry_run |= self.dry_run;
        config.strict |= self.strict;
    }
}
