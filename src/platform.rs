/// Supported vendor platforms and URL-based platform detection

/// An e-commerce or quick-commerce vendor the backend knows how to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Amazon,
    Flipkart,
    Blinkit,
    Zepto,
    Instamart,
    Desidime,
}

/// Detection table in priority order: the first substring found in a URL
/// wins. Supporting a new vendor is an entry here plus a `Platform` variant.
pub const PLATFORM_MATCHES: &[(Platform, &str)] = &[
    (Platform::Amazon, "amazon"),
    (Platform::Flipkart, "flipkart"),
    (Platform::Blinkit, "blinkit"),
    (Platform::Zepto, "zepto"),
    (Platform::Instamart, "instamart"),
    (Platform::Desidime, "desidime"),
];

impl Platform {
    /// Lower-case name the backend stores and sends over the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Flipkart => "flipkart",
            Platform::Blinkit => "blinkit",
            Platform::Zepto => "zepto",
            Platform::Instamart => "instamart",
            Platform::Desidime => "desidime",
        }
    }

    /// Human-readable name for badges and error copy.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Flipkart => "Flipkart",
            Platform::Blinkit => "Blinkit",
            Platform::Zepto => "Zepto",
            Platform::Instamart => "Instamart",
            Platform::Desidime => "Desidime",
        }
    }

    /// Look a platform up by the name the backend sends.
    pub fn from_wire(name: &str) -> Option<Platform> {
        PLATFORM_MATCHES
            .iter()
            .map(|(platform, _)| *platform)
            .find(|platform| platform.wire_name() == name)
    }
}

/// Detect which supported platform a product URL belongs to.
///
/// The URL is lower-cased and the entries of [`PLATFORM_MATCHES`] are tried
/// in order; the first substring hit wins, so a URL mentioning several
/// vendors resolves to the earliest entry in the table.
///
/// Examples:
/// - https://www.amazon.in/dp/B0ABC123 → Amazon
/// - https://www.flipkart.com/phone/p/itm123 → Flipkart
/// - https://example.com/item → None
pub fn detect_platform(url: &str) -> Option<Platform> {
    let url = url.to_lowercase();

    PLATFORM_MATCHES
        .iter()
        .find(|(_, needle)| url.contains(*needle))
        .map(|(platform, _)| *platform)
}

/// The supported platforms as a sentence fragment for error messages,
/// e.g. "Amazon, Flipkart, Blinkit, Zepto, Instamart, or Desidime".
pub fn supported_platforms() -> String {
    let names: Vec<&str> = PLATFORM_MATCHES
        .iter()
        .map(|(platform, _)| platform.display_name())
        .collect();

    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_each_platform() {
        assert_eq!(
            detect_platform("https://www.amazon.in/dp/B0ABC123"),
            Some(Platform::Amazon)
        );
        assert_eq!(
            detect_platform("https://www.flipkart.com/phone/p/itm123"),
            Some(Platform::Flipkart)
        );
        assert_eq!(
            detect_platform("https://blinkit.com/prn/milk/prid/12345"),
            Some(Platform::Blinkit)
        );
        assert_eq!(
            detect_platform("https://www.zeptonow.com/pn/bread/pvid/42"),
            Some(Platform::Zepto)
        );
        assert_eq!(
            detect_platform("https://www.swiggy.com/instamart/item/XYZ"),
            Some(Platform::Instamart)
        );
        assert_eq!(
            detect_platform("https://www.desidime.com/deals/headphones"),
            Some(Platform::Desidime)
        );
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(
            detect_platform("HTTPS://WWW.AMAZON.IN/DP/B0ABC123"),
            Some(Platform::Amazon)
        );
        assert_eq!(
            detect_platform("https://www.FlipKart.com/watch/p/itm9"),
            Some(Platform::Flipkart)
        );
    }

    #[test]
    fn test_detect_priority_order_wins() {
        // Both substrings present: the earlier table entry wins.
        assert_eq!(
            detect_platform("https://www.flipkart.com/tv?cmp=amazon"),
            Some(Platform::Amazon)
        );
        assert_eq!(
            detect_platform("https://www.zeptonow.com/?ref=flipkart"),
            Some(Platform::Flipkart)
        );
    }

    #[test]
    fn test_detect_unsupported() {
        assert_eq!(detect_platform("https://example.com/item"), None);
        assert_eq!(detect_platform("https://www.ebay.com/itm/1234"), None);
        assert_eq!(detect_platform(""), None);
    }

    #[test]
    fn test_wire_and_display_names() {
        assert_eq!(Platform::Amazon.wire_name(), "amazon");
        assert_eq!(Platform::Desidime.wire_name(), "desidime");
        assert_eq!(Platform::Zepto.display_name(), "Zepto");
        assert_eq!(Platform::Instamart.display_name(), "Instamart");
    }

    #[test]
    fn test_from_wire() {
        assert_eq!(Platform::from_wire("amazon"), Some(Platform::Amazon));
        assert_eq!(Platform::from_wire("blinkit"), Some(Platform::Blinkit));
        assert_eq!(Platform::from_wire("Amazon"), None);
        assert_eq!(Platform::from_wire("ebay"), None);
    }

    #[test]
    fn test_supported_platforms_sentence() {
        assert_eq!(
            supported_platforms(),
            "Amazon, Flipkart, Blinkit, Zepto, Instamart, or Desidime"
        );
    }
}
