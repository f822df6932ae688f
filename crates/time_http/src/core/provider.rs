use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::core::{
    error::{TimeServerError, TimeServerResult},
    regions,
    utils::TIMESTAMP_FORMAT,
};

/// Time server implementation
#[derive(Debug, Clone)]
pub struct TimeServer {
    pub(crate) local_timezone: Tz,
}

impl TimeServer {
    pub fn new() -> Self {
        // Try to detect the system's local timezone
        let local_tz = match iana_time_zone::get_timezone() {
            Ok(tz_name) => match tz_name.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                    chrono_tz::UTC
                }
            },
            Err(_) => {
                tracing::warn!("Could not detect system timezone, defaulting to UTC");
                chrono_tz::UTC
            }
        };

        Self::with_local_timezone(local_tz)
    }

    pub fn with_local_timezone(local_timezone: Tz) -> Self {
        Self { local_timezone }
    }

    pub fn local_timezone_name(&self) -> &'static str {
        self.local_timezone.name()
    }

    pub(crate) fn parse_timezone(&self, timezone_name: &str) -> TimeServerResult<Tz> {
        Tz::from_str(timezone_name).map_err(|_| TimeServerError::InvalidTimezone {
            timezone: timezone_name.to_string(),
        })
    }

    /// Current time in the named timezone as `YYYY-MM-DD HH:MM:SS`
    pub fn format_time(&self, timezone_name: &str) -> TimeServerResult<String> {
        self.format_time_at(timezone_name, Utc::now())
    }

    /// Render `instant` in the named timezone as `YYYY-MM-DD HH:MM:SS`
    ///
    /// # Errors
    ///
    /// Returns [`TimeServerError::InvalidTimezone`] when `timezone_name` is
    /// not in the timezone database.
    pub fn format_time_at(
        &self,
        timezone_name: &str,
        instant: DateTime<Utc>,
    ) -> TimeServerResult<String> {
        let timezone = self.parse_timezone(timezone_name)?;
        Ok(format_in(&timezone, instant))
    }

    /// Current time in the server's local timezone
    pub fn local_time(&self) -> String {
        self.local_time_at(Utc::now())
    }

    pub fn local_time_at(&self, instant: DateTime<Utc>) -> String {
        format_in(&self.local_timezone, instant)
    }

    /// Current time for a caller-supplied region name.
    ///
    /// Unknown regions resolve to UTC, so this only fails if the region
    /// table names a zone the timezone database does not know.
    pub fn region_time(&self, region: &str) -> TimeServerResult<String> {
        self.region_time_at(region, Utc::now())
    }

    pub fn region_time_at(&self, region: &str, instant: DateTime<Utc>) -> TimeServerResult<String> {
        let timezone_name = regions::resolve_timezone(region);
        self.format_time_at(timezone_name, instant)
    }
}

impl Default for TimeServer {
    fn default() -> Self {
        Self::new()
    }
}

fn format_in(timezone: &Tz, instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(timezone)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, TimeZone};

    use super::*;

    fn new_year_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn assert_timestamp_shape(value: &str) {
        assert_eq!(value.len(), 19, "unexpected timestamp {value:?}");
        assert!(NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).is_ok());
        for (index, ch) in value.char_indices() {
            match index {
                4 | 7 => assert_eq!(ch, '-'),
                10 => assert_eq!(ch, ' '),
                13 | 16 => assert_eq!(ch, ':'),
                _ => assert!(ch.is_ascii_digit(), "{value:?}"),
            }
        }
    }

    #[test]
    fn test_time_server_creation() {
        let server = TimeServer::new();
        // Should not panic and should have a valid local timezone
        assert!(!server.local_timezone_name().is_empty());
    }

    #[test]
    fn test_timezone_parsing() {
        let server = TimeServer::with_local_timezone(chrono_tz::UTC);

        assert!(server.parse_timezone("UTC").is_ok());
        assert!(server.parse_timezone("Asia/Tokyo").is_ok());

        let err = server.parse_timezone("Invalid/Timezone").unwrap_err();
        assert!(matches!(
            err,
            TimeServerError::InvalidTimezone { ref timezone } if timezone == "Invalid/Timezone"
        ));
    }

    #[test]
    fn test_format_time_at_applies_offsets() {
        let server = TimeServer::with_local_timezone(chrono_tz::UTC);
        let instant = new_year_2024();

        assert_eq!(
            server.format_time_at("UTC", instant).unwrap(),
            "2024-01-01 00:00:00"
        );
        assert_eq!(
            server.format_time_at("Asia/Kolkata", instant).unwrap(),
            "2024-01-01 05:30:00"
        );
        assert_eq!(
            server.format_time_at("Asia/Kathmandu", instant).unwrap(),
            "2024-01-01 05:45:00"
        );
        assert_eq!(
            server.format_time_at("America/New_York", instant).unwrap(),
            "2023-12-31 19:00:00"
        );
    }

    #[test]
    fn test_format_time_at_handles_dst() {
        let server = TimeServer::with_local_timezone(chrono_tz::UTC);
        let summer = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();

        assert_eq!(
            server.format_time_at("Europe/London", summer).unwrap(),
            "2024-07-01 13:00:00"
        );
        assert_eq!(
            server.format_time_at("America/New_York", summer).unwrap(),
            "2024-07-01 08:00:00"
        );
    }

    #[test]
    fn test_format_time_invalid_timezone() {
        let server = TimeServer::with_local_timezone(chrono_tz::UTC);

        let err = server.format_time("Invalid/Timezone").unwrap_err();
        assert_eq!(err.to_string(), "Invalid timezone: Invalid/Timezone");
    }

    #[test]
    fn test_format_time_shape() {
        let server = TimeServer::new();

        assert_timestamp_shape(&server.format_time("Asia/Tokyo").unwrap());
        assert_timestamp_shape(&server.format_time("UTC").unwrap());
        assert_timestamp_shape(&server.local_time());
    }

    #[test]
    fn test_local_time_uses_local_timezone() {
        let server = TimeServer::with_local_timezone(chrono_tz::Asia::Tokyo);

        assert_eq!(server.local_timezone_name(), "Asia/Tokyo");
        assert_eq!(server.local_time_at(new_year_2024()), "2024-01-01 09:00:00");
    }

    #[test]
    fn test_region_time_resolves_region() {
        let server = TimeServer::with_local_timezone(chrono_tz::UTC);
        let instant = new_year_2024();

        for region in ["tokyo", "Tokyo", "TOKYO"] {
            assert_eq!(
                server.region_time_at(region, instant).unwrap(),
                "2024-01-01 09:00:00"
            );
        }
        assert_eq!(
            server.region_time_at("india", instant).unwrap(),
            "2024-01-01 05:30:00"
        );
        assert_eq!(
            server.region_time_at("tokio", instant).unwrap(),
            "2024-01-01 00:00:00"
        );
    }
}
