/// Client-side validation for product submissions
use thiserror::Error;
use url::Url;

use crate::platform::{self, Platform};

/// Why a submitted product URL was rejected. The `Display` text is shown
/// to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid URL")]
    InvalidUrl,
    #[error("Unsupported platform. Please use {supported}.")]
    UnsupportedPlatform { supported: String },
}

/// Whether the candidate parses as an absolute URL.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

/// Validate a product URL before it is sent to the backend.
///
/// Checks run in order: the URL must parse, then it must match one of the
/// supported platforms. The first failure wins, so an unparsable URL is
/// reported as invalid even if it names a known vendor.
pub fn validate_product_url(url: &str) -> Result<Platform, ValidationError> {
    if !is_valid_url(url) {
        return Err(ValidationError::InvalidUrl);
    }

    platform::detect_platform(url).ok_or_else(|| ValidationError::UnsupportedPlatform {
        supported: platform::supported_platforms(),
    })
}
