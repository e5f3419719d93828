//! Display helpers.

/// Shorten an address for display: first 6 and last 4 characters.
///
/// `0x52908400098527886E0F7030069857D2E4169EE7` → `0x5290...9EE7`.
/// Strings too short to shorten are returned unchanged.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
