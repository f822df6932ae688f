use std::collections::HashMap;
use std::sync::LazyLock;

/// Zone returned for any region missing from the table
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Region name (lowercase) to IANA timezone name
const REGION_TIMEZONES: &[(&str, &str)] = &[
    // Americas
    ("new york", "America/New_York"),
    ("newyork", "America/New_York"),
    ("nyc", "America/New_York"),
    ("chicago", "America/Chicago"),
    ("denver", "America/Denver"),
    ("los angeles", "America/Los_Angeles"),
    ("losangeles", "America/Los_Angeles"),
    ("la", "America/Los_Angeles"),
    ("san francisco", "America/Los_Angeles"),
    ("seattle", "America/Los_Angeles"),
    ("phoenix", "America/Phoenix"),
    ("anchorage", "America/Anchorage"),
    ("honolulu", "Pacific/Honolulu"),
    ("hawaii", "Pacific/Honolulu"),
    ("toronto", "America/Toronto"),
    ("vancouver", "America/Vancouver"),
    ("canada", "America/Toronto"),
    ("mexico", "America/Mexico_City"),
    ("mexico city", "America/Mexico_City"),
    ("sao paulo", "America/Sao_Paulo"),
    ("brazil", "America/Sao_Paulo"),
    ("buenos aires", "America/Argentina/Buenos_Aires"),
    ("argentina", "America/Argentina/Buenos_Aires"),
    ("bogota", "America/Bogota"),
    ("lima", "America/Lima"),
    ("santiago", "America/Santiago"),
    // Europe
    ("london", "Europe/London"),
    ("uk", "Europe/London"),
    ("dublin", "Europe/Dublin"),
    ("ireland", "Europe/Dublin"),
    ("lisbon", "Europe/Lisbon"),
    ("paris", "Europe/Paris"),
    ("france", "Europe/Paris"),
    ("berlin", "Europe/Berlin"),
    ("germany", "Europe/Berlin"),
    ("madrid", "Europe/Madrid"),
    ("spain", "Europe/Madrid"),
    ("rome", "Europe/Rome"),
    ("italy", "Europe/Rome"),
    ("amsterdam", "Europe/Amsterdam"),
    ("brussels", "Europe/Brussels"),
    ("zurich", "Europe/Zurich"),
    ("stockholm", "Europe/Stockholm"),
    ("oslo", "Europe/Oslo"),
    ("helsinki", "Europe/Helsinki"),
    ("warsaw", "Europe/Warsaw"),
    ("athens", "Europe/Athens"),
    ("istanbul", "Europe/Istanbul"),
    ("turkey", "Europe/Istanbul"),
    ("kyiv", "Europe/Kyiv"),
    ("moscow", "Europe/Moscow"),
    ("russia", "Europe/Moscow"),
    // Africa
    ("cairo", "Africa/Cairo"),
    ("egypt", "Africa/Cairo"),
    ("lagos", "Africa/Lagos"),
    ("nigeria", "Africa/Lagos"),
    ("nairobi", "Africa/Nairobi"),
    ("kenya", "Africa/Nairobi"),
    ("johannesburg", "Africa/Johannesburg"),
    ("south africa", "Africa/Johannesburg"),
    ("casablanca", "Africa/Casablanca"),
    // Asia
    ("dubai", "Asia/Dubai"),
    ("uae", "Asia/Dubai"),
    ("riyadh", "Asia/Riyadh"),
    ("tehran", "Asia/Tehran"),
    ("karachi", "Asia/Karachi"),
    ("pakistan", "Asia/Karachi"),
    ("india", "Asia/Kolkata"),
    ("kolkata", "Asia/Kolkata"),
    ("mumbai", "Asia/Kolkata"),
    ("delhi", "Asia/Kolkata"),
    ("bangalore", "Asia/Kolkata"),
    ("kathmandu", "Asia/Kathmandu"),
    ("nepal", "Asia/Kathmandu"),
    ("dhaka", "Asia/Dhaka"),
    ("bangkok", "Asia/Bangkok"),
    ("thailand", "Asia/Bangkok"),
    ("jakarta", "Asia/Jakarta"),
    ("singapore", "Asia/Singapore"),
    ("kuala lumpur", "Asia/Kuala_Lumpur"),
    ("manila", "Asia/Manila"),
    ("hong kong", "Asia/Hong_Kong"),
    ("hongkong", "Asia/Hong_Kong"),
    ("shanghai", "Asia/Shanghai"),
    ("beijing", "Asia/Shanghai"),
    ("china", "Asia/Shanghai"),
    ("taipei", "Asia/Taipei"),
    ("seoul", "Asia/Seoul"),
    ("korea", "Asia/Seoul"),
    ("tokyo", "Asia/Tokyo"),
    ("japan", "Asia/Tokyo"),
    // Oceania
    ("perth", "Australia/Perth"),
    ("adelaide", "Australia/Adelaide"),
    ("brisbane", "Australia/Brisbane"),
    ("sydney", "Australia/Sydney"),
    ("melbourne", "Australia/Melbourne"),
    ("australia", "Australia/Sydney"),
    ("auckland", "Pacific/Auckland"),
    ("new zealand", "Pacific/Auckland"),
    // Special
    ("utc", "UTC"),
    ("gmt", "Etc/GMT"),
];

static REGION_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| REGION_TIMEZONES.iter().copied().collect());

/// Resolve a user-supplied region name to an IANA timezone name.
///
/// Matching is case-insensitive but otherwise exact. Unknown regions,
/// including the empty string, resolve to [`DEFAULT_TIMEZONE`].
pub fn resolve_timezone(region: &str) -> &'static str {
    let key = region.to_lowercase();

    match REGION_TABLE.get(key.as_str()) {
        Some(&timezone) => timezone,
        None => {
            tracing::debug!(region, "Unknown region, falling back to {}", DEFAULT_TIMEZONE);
            DEFAULT_TIMEZONE
        }
    }
}

/// All known regions with their timezones, sorted by region name
pub fn regions() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<_> = REGION_TABLE
        .iter()
        .map(|(region, timezone)| (*region, *timezone))
        .collect();
    entries.sort_unstable_by_key(|(region, _)| *region);
    entries
}
