use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sprig", version, about = "Render node trees to HTML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON node tree to HTML.
    Render {
        /// Path to the JSON tree, or `-` for stdin
        input: PathBuf,
        /// Write the HTML here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print node counts to stderr
        #[arg(long)]
        stats: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render { input, out, stats } => {
            sprig_cli::render_cmd(&input, out.as_deref(), stats)?
        }
    }
    Ok(())
}
