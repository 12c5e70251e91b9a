mod aur;

use clap::{Parser, Subcommand};

use crate::aur::commands;
use crate::aur::config::Config;

/// Aurum main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode (stream output of external tools)
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone and install packages from the AUR
    Install {
        /// Repository URLs of the packages to install
        #[arg(required = true)]
        sources: Vec<String>,
    },
    /// Remove installed packages along with their local source trees
    Remove {
        /// Names of the packages to remove
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Pull all managed packages and rebuild the ones that changed
    Update,
    /// List managed packages
    List,
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        eprintln!("Debug mode is on");
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load()?;

    match &cli.command {
        Commands::Install { sources } => commands::install(&config, sources, cli.debug),
        Commands::Remove { names } => commands::remove(&config, names, cli.debug),
        Commands::Update => commands::update(&config, cli.debug),
        Commands::List => commands::list(&config),
    }
}
