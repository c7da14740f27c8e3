//! DTOs for the analytics endpoint.

use serde::Serialize;

use crate::application::services::Analytics;

/// Lightweight analytics for a link: total clicks plus the most recent
/// client IPs, most recent first, capped at five.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub click_count: i64,
    pub last5_ips: Vec<String>,
}

impl From<Analytics> for AnalyticsResponse {
    fn from(analytics: Analytics) -> Self {
        Self {
            click_count: analytics.click_count,
            last5_ips: analytics.last_ips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let response = AnalyticsResponse::from(Analytics {
            click_count: 3,
            last_ips: vec!["1.1.1.1".to_string(), "2.2.2.2".to_string()],
        });

        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value["clickCount"], 3);
        assert_eq!(value["last5Ips"][0], "1.1.1.1");
        assert_eq!(value["last5Ips"][1], "2.2.2.2");
    }
}
