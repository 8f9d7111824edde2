//! Redwood CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "redwood")]
#[command(version)]
#[command(about = "Redwood view renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Redwood project in the current directory
    Create {
        /// Project name (also the project directory name)
        name: String,

        /// Project title used in starter files (defaults to the name)
        #[arg(long)]
        title: Option<String>,

        /// Only create the directory tree and config file
        #[arg(long)]
        bare: bool,
    },

    /// Render a page or partial view to HTML
    Render {
        /// Page view to render
        view: Option<String>,

        /// Render this partial instead of a page
        #[arg(short = 'p', long)]
        partial: Option<String>,

        /// Layout to wrap the page in
        #[arg(short = 'l', long)]
        layout: Option<String>,

        /// Namespace appended to asset file names
        #[arg(short = 'n', long)]
        namespace: Option<String>,

        /// Directory to start the config search from (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Write output to FILE instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Print the path a view component resolves to
    Resolve {
        /// Component kind (page, context, partial, layout)
        kind: String,

        /// View name
        view: String,

        /// Namespace appended to asset file names
        #[arg(short = 'n', long)]
        namespace: Option<String>,

        /// Directory to start the config search from (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redwood=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Create { name, title, bare } => {
            commands::create::execute(commands::create::CreateArgs { name, title, bare })
        }
        Commands::Render {
            view,
            partial,
            layout,
            namespace,
            dir,
            output,
        } => commands::render::execute(commands::render::RenderArgs {
            view,
            partial,
            layout,
            namespace,
            dir,
            output,
        }),
        Commands::Resolve {
            kind,
            view,
            namespace,
            dir,
        } => commands::resolve::execute(commands::resolve::ResolveArgs {
            kind,
            view,
            namespace,
            dir,
        }),
    }
}
