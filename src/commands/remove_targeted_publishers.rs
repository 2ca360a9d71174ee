use tracing::info;

use crate::cli::RemoveTargetedPublishersArgs;
use crate::error::Result;
use crate::rtb::client::RealtimeBiddingClient;
use crate::rtb::resource::pretargeting_config_name;

/// Removes publisher IDs from a pretargeting configuration's publisher
/// targeting. This is the only way to remove publisher IDs once the
/// configuration has been created.
pub async fn execute(
    client: &RealtimeBiddingClient,
    args: RemoveTargetedPublishersArgs,
) -> Result<()> {
    let config_name = pretargeting_config_name(&args.account_id, &args.pretargeting_config_id);

    info!(
        "Removing {} publisher ID(s) from {}",
        args.publisher_ids.len(),
        config_name
    );
    println!(
        "Removing publisher IDs from publisher targeting for pretargeting configuration with name: \"{}\".",
        config_name
    );

    let response = client
        .remove_targeted_publishers(&config_name, &args.publisher_ids)
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
