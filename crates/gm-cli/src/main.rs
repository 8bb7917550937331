//! CLI frontend for the Gamemaster narrative engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gm",
    about = "Gamemaster: a narrative session engine you can play in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an adventure interactively on stdin/stdout
    Play {
        /// World file in JSON (default: the bundled Hawkins adventure)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Start immediately with this player name
        #[arg(short, long)]
        name: Option<String>,

        /// Number of recent choices shown by the journal
        #[arg(long, default_value = "6")]
        history: usize,

        /// Omit the narrator line before each transition
        #[arg(long)]
        plain: bool,
    },

    /// Load a world file and report problems
    Check {
        /// World file in JSON
        world: PathBuf,
    },

    /// List the scenes of a world
    Scenes {
        /// World file in JSON (default: the bundled Hawkins adventure)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "gm_engine=info,gm_cli=info",
        _ => "gm_engine=debug,gm_cli=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            world,
            name,
            history,
            plain,
        } => commands::play::run(world.as_deref(), name.as_deref(), history, plain),
        Commands::Check { world } => commands::check::run(&world),
        Commands::Scenes { world } => commands::scenes::run(world.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
