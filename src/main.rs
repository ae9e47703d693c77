use anyhow::Result;
use clap::{Parser, Subcommand};

/// campos - David Campos Realty & Remodeling website
#[derive(Parser)]
#[command(name = "campos")]
#[command(about = "Realty and remodeling marketing site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = campos::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    campos::observability::init_logging(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => campos::server::serve(config, host, port).await,
    }
}
