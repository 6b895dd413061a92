use clap::{Parser, Subcommand};
use serde_json::Value;

use stringsvc::endpoint::{CountRequest, UppercaseRequest};

#[derive(Parser)]
#[command(name = "stringsvc-cli")]
#[command(about = "Client for the string service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Uppercase a string
    Uppercase { s: String },
    /// Count the characters of a string
    Count { s: String },
    /// Dump Prometheus metrics
    Metrics,
    /// Check service liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Uppercase { s } => {
            let res = client
                .post(format!("{}/uppercase", cli.url))
                .json(&UppercaseRequest { s })
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Count { s } => {
            let res = client
                .post(format!("{}/count", cli.url))
                .json(&CountRequest { s })
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Metrics => {
            let res = client.get(format!("{}/metrics", cli.url)).send().await?;
            println!("{}", res.error_for_status()?.text().await?);
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
