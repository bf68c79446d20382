//! Firmware version extraction from image file names

use regex::Regex;
use std::sync::LazyLock;

/// Matches `major.minor.patch` with an optional trailing letter: `16.09.03a`
/// Captures: 1=major, 2=minor, 3=patch, 4=letter
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\.(\d+)\.(\d+)([A-Za-z])?").expect("Invalid VERSION_REGEX")
});

/// Extract the first dotted version token from `text`.
///
/// Leading zeros are stripped from each numeric component, so
/// `cat9k-02.5.03a.bin` yields `2.5.3a`. Returns `None` when nothing matches.
pub fn extract_version(text: &str) -> Option<String> {
    let caps = VERSION_REGEX.captures(text)?;
    let component = |i: usize| {
        let digits = caps.get(i).map_or("", |m| m.as_str());
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    };

    let mut version = format!("{}.{}.{}", component(1), component(2), component(3));
    if let Some(letter) = caps.get(4) {
        version.push_str(letter.as_str());
    }
    Some(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_zeros() {
        assert_eq!(
            extract_version("firmware-02.5.03a.bin").as_deref(),
            Some("2.5.3a")
        );
    }

    #[test]
    fn test_plain_version() {
        assert_eq!(
            extract_version("cat9k_iosxe.16.09.03.SPA.bin").as_deref(),
            Some("16.9.3")
        );
    }

    #[test]
    fn test_zero_component_is_kept() {
        assert_eq!(extract_version("img-1.0.00.bin").as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            extract_version("1.2.3-to-4.5.6.bin").as_deref(),
            Some("1.2.3")
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_version("config.txt"), None);
        assert_eq!(extract_version("12.4"), None);
        assert_eq!(extract_version(""), None);
    }
}
