mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "menu",
    about = "Random meal suggestions from a list you keep",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from menu.yaml or meal_options.json)
    #[arg(long, global = true, env = "MENU_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write menu.yaml and the default catalog if they are missing
    Init,

    /// Suggest a meal (one per category when no category is given)
    Suggest {
        category: Option<String>,
        /// Seed the random draw for a repeatable answer
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List meal options
    List { category: Option<String> },

    /// Add an option to a category
    Add { category: String, option: String },

    /// Remove an option from a category
    Remove { category: String, option: String },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Serve the JSON API
    Serve {
        /// Port to listen on (default: server.port from menu.yaml)
        #[arg(long)]
        port: Option<u16>,

        /// Don't open a browser
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Suggest { category, seed } => {
            cmd::suggest::run(&root, category.as_deref(), seed, cli.json)
        }
        Commands::List { category } => cmd::list::run(&root, category.as_deref(), cli.json),
        Commands::Add { category, option } => cmd::edit::add(&root, &category, &option, cli.json),
        Commands::Remove { category, option } => {
            cmd::edit::remove(&root, &category, &option, cli.json)
        }
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Serve { port, no_open } => cmd::serve::run(&root, port, no_open),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
