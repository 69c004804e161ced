//! inkpost CLI
//!
//! Binary entry point; the command implementations live in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for inkpost.
#[derive(Parser)]
#[command(
    name = "inkpost",
    version,
    about = "Markdown blog engine with structured content blocks"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Content directory with Markdown posts
    #[arg(long, default_value = "content")]
    content: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// List post metadata, newest first
    List,
    /// Print one parsed post as JSON
    Show {
        /// Post identifier
        id: String,
    },
    /// Generate the RSS feed
    Feed {
        /// Output file
        #[arg(short, long, default_value = "rss.xml")]
        output: std::path::PathBuf,
    },
    /// Validate the corpus (duplicate ids, missing titles)
    Check,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    inkpost::init_tracing(cli.verbose);

    match cli.command {
        Commands::List => inkpost::cmd::list::run(&cli.content)?,
        Commands::Show { id } => inkpost::cmd::show::run(&cli.content, &id)?,
        Commands::Feed { output } => inkpost::cmd::feed::run(&cli.config, &cli.content, &output)?,
        Commands::Check => inkpost::cmd::check::run(&cli.content)?,
    }

    Ok(())
}
