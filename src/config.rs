//! Editor Configuration
//!
//! Compiled-in settings for the structure editor, plus the input parsing
//! that depends on them.

/// Settings shared by every card via `AppContext`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
    /// Upper bound for the "number of beds" input
    pub max_beds_per_room: usize,
    /// How long the save notice stays visible
    pub notice_duration_ms: u32,
    /// Log the JSON payload on submit
    pub log_payload: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_beds_per_room: 12,
            notice_duration_ms: 2500,
            log_payload: true,
        }
    }
}

impl EditorConfig {
    /// Parse the bed count field, clamped to `0..=max_beds_per_room`
    pub fn parse_bed_count(&self, raw: &str) -> Option<usize> {
        let value: i64 = raw.trim().parse().ok()?;
        Some(value.clamp(0, self.max_beds_per_room as i64) as usize)
    }
}

/// Parse an area field in square metres; blank means zero
pub fn parse_area(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    let value: f64 = raw.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Parse a floor number; anything below 1 is rejected
pub fn parse_floor_number(raw: &str) -> Option<u32> {
    raw.trim().parse().ok().filter(|n| *n >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_count_clamped() {
        let config = EditorConfig::default();
        assert_eq!(config.parse_bed_count("4"), Some(4));
        assert_eq!(config.parse_bed_count(" 40 "), Some(12));
        assert_eq!(config.parse_bed_count("-3"), Some(0));
        assert_eq!(config.parse_bed_count("two"), None);
    }

    #[test]
    fn test_parse_area() {
        assert_eq!(parse_area(""), Some(0.0));
        assert_eq!(parse_area("12.5"), Some(12.5));
        assert_eq!(parse_area("-1"), None);
        assert_eq!(parse_area("NaN"), None);
    }

    #[test]
    fn test_parse_floor_number() {
        assert_eq!(parse_floor_number("3"), Some(3));
        assert_eq!(parse_floor_number("0"), None);
        assert_eq!(parse_floor_number("x"), None);
    }
}
