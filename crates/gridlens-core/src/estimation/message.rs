//! Outage message formatting.

use super::ZoneMessage;

/// Maximum characters of an operator message shown on an outage card.
pub const OUTAGE_MESSAGE_MAX_LEN: usize = 300;

pub const ELLIPSIS: &str = "...";

/// Issue tracker used for outage links.
pub const DEFAULT_ISSUE_BASE_URL: &str =
    "https://github.com/electricitymaps/electricitymaps-contrib/issues";

/// Keeps the first `max_len` characters and appends [`ELLIPSIS`] if anything was cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}

/// Link to the issue behind an outage, when the message names one.
pub fn issue_link(zone_message: &ZoneMessage, base_url: &str) -> Option<String> {
    zone_message
        .issue_id()
        .map(|issue| format!("{}/{}", base_url.trim_end_matches('/'), issue))
}

/// Display form of an outage message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedZoneMessage {
    pub text: String,
    pub issue_url: Option<String>,
}

/// Formats a zone message for display; empty or missing messages render nothing.
pub fn format_zone_message(
    zone_message: Option<&ZoneMessage>,
    max_len: usize,
    issue_base_url: &str,
) -> Option<FormattedZoneMessage> {
    let zone_message = zone_message.filter(|m| !m.message.is_empty())?;
    Some(FormattedZoneMessage {
        text: truncate(&zone_message.message, max_len),
        issue_url: issue_link(zone_message, issue_base_url),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unchanged() {
        assert_eq!(truncate("ok", 300), "ok");
        assert_eq!(truncate("", 300), "");
        let exact = "x".repeat(300);
        assert_eq!(truncate(&exact, 300), exact);
    }

    #[test]
    fn long_text_cut_with_ellipsis() {
        let long = "A".repeat(400);
        let out = truncate(&long, OUTAGE_MESSAGE_MAX_LEN);
        assert_eq!(out, format!("{}...", "A".repeat(300)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "é".repeat(5);
        assert_eq!(truncate(&text, 3), "ééé...");
    }

    #[test]
    fn issue_link_rules() {
        let base = DEFAULT_ISSUE_BASE_URL;
        let with = ZoneMessage::new("down").with_issue("123");
        assert_eq!(
            issue_link(&with, base).as_deref(),
            Some("https://github.com/electricitymaps/electricitymaps-contrib/issues/123")
        );
        assert_eq!(issue_link(&ZoneMessage::new("ok").with_issue("None"), base), None);
        assert_eq!(issue_link(&ZoneMessage::new("ok"), base), None);
        assert_eq!(
            issue_link(&with, "https://tracker.example/issues/").as_deref(),
            Some("https://tracker.example/issues/123")
        );
    }

    #[test]
    fn empty_message_renders_nothing() {
        let empty = ZoneMessage::new("").with_issue("5");
        assert_eq!(format_zone_message(Some(&empty), 300, DEFAULT_ISSUE_BASE_URL), None);
        assert_eq!(format_zone_message(None, 300, DEFAULT_ISSUE_BASE_URL), None);
    }
}
