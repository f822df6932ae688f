// Constants for format strings and response text
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const GREETING: &str = "Automate All The Things";
pub const HEALTHY: &str = "healthy";

/// Capitalize a region name for display
///
/// The first character is upper-cased and the rest lower-cased, so
/// `"tOKYO"` becomes `"Tokyo"` and `"new york"` becomes `"New york"`.
pub fn capitalize(region: &str) -> String {
    let mut chars = region.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Build the greeting used by the region endpoint
///
/// # Arguments
///
/// * `region` - The region name exactly as supplied by the caller
pub fn region_greeting(region: &str) -> String {
    format!("{}: Current time in {}", GREETING, capitalize(region))
}
