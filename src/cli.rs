use clap::{Parser, Subcommand};


const DEFAULT_PRETARGETING_CONFIG_RESOURCE_ID: &str = "ENTER_CONFIG_RESOURCE_ID_HERE";

#[derive(Parser)]
#[command(name = "adx-rtb", version = "0.1.0", about = "A command-line client for the Authorized Buyers Real-time Bidding API.")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a service account key JSON file
    #[arg(long, global = true, env = "GOOGLE_APPLICATION_CREDENTIALS", value_name = "PATH")]
    pub credentials: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove publisher IDs from a pretargeting configuration's publisher targeting.
    RemoveTargetedPublishers(RemoveTargetedPublishersArgs),
    /// Create a creative with video content for a buyer account.
    CreateVideoCreative(CreateVideoCreativeArgs),
}

#[derive(Debug, Parser)]
pub struct RemoveTargetedPublishersArgs {
    /// The resource ID of the bidders resource under which the pretargeting
    /// configuration was created
    #[arg(short, long)]
    pub account_id: String,
    /// The resource ID of the pretargeting configuration that is being acted upon
    #[arg(short, long, default_value = DEFAULT_PRETARGETING_CONFIG_RESOURCE_ID)]
    pub pretargeting_config_id: String,
    /// The publisher IDs to be removed from this configuration's publisher
    /// targeting, as found in bid requests or ads.txt / app-ads.txt
    #[arg(long, num_args = 0..)]
    pub publisher_ids: Vec<String>,
}

#[derive(Debug, Parser)]
pub struct CreateVideoCreativeArgs {
    /// The resource ID of the buyers resource under which the creative is created
    #[arg(short, long)]
    pub account_id: String,
    /// The user-specified creative ID, at most 128 bytes
    #[arg(short, long)]
    pub creative_id: Option<String>,
    /// The name of the company being advertised in the creative
    #[arg(long, default_value = "Test")]
    pub advertiser_name: String,
    /// The creative attributes being declared
    #[arg(long, num_args = 0.., default_value = "CREATIVE_TYPE_VAST_VIDEO")]
    pub declared_attributes: Vec<String>,
    /// The click-through URLs being declared
    #[arg(long, num_args = 0.., default_value = "http://test.com")]
    pub declared_click_urls: Vec<String>,
    /// The restricted categories being declared
    #[arg(long, num_args = 0..)]
    pub declared_restricted_categories: Vec<String>,
    /// The vendor IDs being declared
    #[arg(long, num_args = 0..)]
    pub declared_vendor_ids: Vec<i64>,
    /// The URL to fetch a video ad
    #[arg(long, default_value = "https://video.test.com/ads?id=123456&wprice=%%WINNING_PRICE%%")]
    pub video_url: String,
}
