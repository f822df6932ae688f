use serde::{Deserialize, Serialize};

/// Body returned by the default and region time endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeResponse {
    pub message: String,
    /// Wall-clock time formatted as `YYYY-MM-DD HH:MM:SS`
    pub current_time: String,
}

/// Body returned by the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// One entry of the region listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub region: String,
    /// IANA timezone name
    pub timezone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_response_field_names() {
        let response = TimeResponse {
            message: "Automate All The Things".to_string(),
            current_time: "2024-01-01 12:00:00".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Automate All The Things");
        assert_eq!(json["current_time"], "2024-01-01 12:00:00");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_health_response_field_names() {
        let json = r#"{"status": "healthy", "timestamp": "2024-01-01 12:00:00"}"#;
        let response: HealthResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "healthy");
        assert_eq!(response.timestamp, "2024-01-01 12:00:00");
    }
}
