//! Resource name helpers for Real-time Bidding API paths.
//!
//! These are pure formatting functions so they can be tested without touching
//! the network.

/// Name of a pretargeting configuration under a bidder account.
pub fn pretargeting_config_name(account_id: &str, config_id: &str) -> String {
    format!("bidders/{}/pretargetingConfigs/{}", account_id, config_id)
}

/// Name of a buyer account, the parent resource for creatives.
pub fn buyer_name(account_id: &str) -> String {
    format!("buyers/{}", account_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretargeting_config_name() {
        assert_eq!(
            pretargeting_config_name("123", "456"),
            "bidders/123/pretargetingConfigs/456"
        );
    }

    #[test]
    fn test_pretargeting_config_name_is_literal_substitution() {
        // IDs are substituted verbatim, no escaping or validation
        assert_eq!(
            pretargeting_config_name("ENTER_BIDDER_RESOURCE_ID_HERE", "ENTER_CONFIG_RESOURCE_ID_HERE"),
            "bidders/ENTER_BIDDER_RESOURCE_ID_HERE/pretargetingConfigs/ENTER_CONFIG_RESOURCE_ID_HERE"
        );
    }

    #[test]
    fn test_buyer_name() {
        assert_eq!(buyer_name("789"), "buyers/789");
    }
}
