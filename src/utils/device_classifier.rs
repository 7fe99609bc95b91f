//! User-agent device classification.
//!
//! A deliberately coarse rule: the analytics display only distinguishes
//! mobile from desktop traffic, so a token scan beats a full user-agent
//! parser here.

use crate::domain::entities::DeviceType;

/// Tokens whose presence marks a user agent as mobile.
const MOBILE_TOKENS: &[&str] = &["mobile", "android", "iphone", "ipad", "ipod"];

/// Classifies a raw user-agent string as mobile or desktop.
///
/// Matching is case-insensitive substring search over [`MOBILE_TOKENS`];
/// anything else, including an empty string, is desktop.
pub fn classify_device(user_agent: &str) -> DeviceType {
    let ua = user_agent.to_ascii_lowercase();

    if MOBILE_TOKENS.iter().any(|token| ua.contains(token)) {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    }
}
