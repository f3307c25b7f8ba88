mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "landing-kit")]
#[command(version, about = "Static site generator for localized app landing pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize a new site directory
    Init {
        /// Path to create the site directory
        path: PathBuf,
    },

    /// Validate site configuration and translation bundles
    Validate {
        /// Path to site directory
        path: PathBuf,
    },

    /// Build localized pages and sitemap
    Build {
        /// Path to site directory
        path: PathBuf,

        /// Output directory (defaults to the site directory itself)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init { path } => commands::init::run(path).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "landing-kit", &mut io::stdout());
            Ok(())
        }
    }
}
