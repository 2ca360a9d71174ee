use clap::Parser;

use adx_rtb::cli::{Cli, Commands};
use adx_rtb::commands;
use adx_rtb::error::Result;
use adx_rtb::rtb::auth::{fetch_access_token, ServiceAccountKey};
use adx_rtb::rtb::client::RealtimeBiddingClient;

#[tokio::main]
async fn main() {
    // Logging
    tracing_subscriber::fmt::init();

    let cli: Cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Build the authenticated client before dispatching. A missing or
    // unreadable key file fails here, before any API call is attempted.
    let key = ServiceAccountKey::from_file(cli.credentials.as_deref())?;
    let token = fetch_access_token(&key).await?;
    let client = RealtimeBiddingClient::new(token.value)?;

    match cli.command {
        Commands::RemoveTargetedPublishers(args) => {
            commands::remove_targeted_publishers::execute(&client, args).await?
        }
        Commands::CreateVideoCreative(args) => {
            commands::create_video_creative::execute(&client, args).await?
        }
    }

    Ok(())
}
