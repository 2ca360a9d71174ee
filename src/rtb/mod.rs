pub mod auth;
pub mod client;
pub mod resource;

use serde::{Deserialize, Serialize};

/// Body of a removeTargetedPublishers call. The list is sent exactly as
/// supplied: same order, duplicates kept, empty list allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTargetedPublishersRequest {
    #[serde(rename = "publisherIds")]
    pub publisher_ids: Vec<String>,
}

/// A creative resource as accepted by buyers.creatives.create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creative {
    #[serde(rename = "creativeId")]
    pub creative_id: String,
    #[serde(rename = "advertiserName")]
    pub advertiser_name: String,
    #[serde(rename = "declaredAttributes")]
    pub declared_attributes: Vec<String>,
    #[serde(rename = "declaredClickThroughUrls")]
    pub declared_click_through_urls: Vec<String>,
    #[serde(rename = "declaredRestrictedCategories")]
    pub declared_restricted_categories: Vec<String>,
    #[serde(rename = "declaredVendorIds")]
    pub declared_vendor_ids: Vec<i64>,
    pub video: VideoContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoContent {
    #[serde(rename = "videoUrl")]
    pub video_url: String,
}
