mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};

use client::HearthClient;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Hearth CLI", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the server is up
    Ping,
    /// List every recipe on the server
    List {
        /// Print the raw JSON instead of one line per recipe
        #[arg(long)]
        json: bool,
    },
    /// Replace all recipes with the built-in sample set
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = HearthClient::new(&cli.server);

    match cli.command {
        Commands::Ping => {
            println!("{}", client.ping().await?);
        }
        Commands::List { json } => {
            let recipes = client.list_recipes().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            } else if recipes.is_empty() {
                println!("No recipes.");
            } else {
                for recipe in &recipes {
                    println!("{}", client::summary_line(recipe));
                }
            }
        }
        Commands::Reset => {
            let count = client.reset_mock_data().await?;
            println!("Reset to {} sample recipes", count);
        }
    }

    Ok(())
}
