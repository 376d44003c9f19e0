mod api_types;
mod auth;
mod config;
mod delete_service;
mod http_server;

use api_types::DeleteRequest;
use clap::{Parser, Subcommand};
use config::Config;
use delete_service::DeleteService;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(long)]
        host: Option<String>,
    },
    /// Delete a single message directly, without going through HTTP
    Delete {
        #[arg(long)]
        account_id: String,
        #[arg(short, long)]
        queue: String,
        #[arg(short, long)]
        endpoint: String,
        #[arg(short, long)]
        receipt_handle: String,
    },
    /// Check connectivity to AWS SQS
    TestConnection,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load_with_overrides()?;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            let addr = format!("{}:{}", config.server.host, config.server.port);
            println!("Starting {} v{}", config.api.title, config.api.version);
            if config.auth.api_password.is_none() {
                println!("API_PASSWORD not set - authentication is disabled");
            }

            let app = http_server::create_router(config);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!("Server running at http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Delete {
            account_id,
            queue,
            endpoint,
            receipt_handle,
        } => {
            let service = DeleteService::new(config.aws.clone());
            let request = DeleteRequest {
                id_aws: account_id,
                queue_name: queue,
                sqs_endpoint: endpoint,
                receipt_handle,
            };
            let queue_url = service.delete_message(&request).await?;
            println!("Message deleted successfully from {}", queue_url);
        }
        Commands::TestConnection => {
            let service = DeleteService::new(config.aws.clone());
            let region = service.test_connection().await?;
            println!(
                "AWS SQS connection established successfully (region: {})",
                region
            );
        }
    }

    Ok(())
}
