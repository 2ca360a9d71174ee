use tracing::info;
use uuid::Uuid;

use crate::cli::CreateVideoCreativeArgs;
use crate::error::Result;
use crate::rtb::client::RealtimeBiddingClient;
use crate::rtb::resource::buyer_name;
use crate::rtb::{Creative, VideoContent};

/// Creates a creative with video content for the given buyer account.
pub async fn execute(client: &RealtimeBiddingClient, args: CreateVideoCreativeArgs) -> Result<()> {
    let parent = buyer_name(&args.account_id);

    let creative = Creative {
        creative_id: args
            .creative_id
            .unwrap_or_else(|| format!("Video_Creative_{}", Uuid::new_v4())),
        advertiser_name: args.advertiser_name,
        declared_attributes: args.declared_attributes,
        declared_click_through_urls: args.declared_click_urls,
        declared_restricted_categories: args.declared_restricted_categories,
        declared_vendor_ids: args.declared_vendor_ids,
        video: VideoContent {
            video_url: args.video_url,
        },
    };

    info!("Creating creative {} under {}", creative.creative_id, parent);
    println!("Creating video creative for buyer account \"{}\".", parent);

    let response = client.create_creative(&parent, &creative).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
