//! Small formatting helpers shared by the view-models.

use chrono::{DateTime, Utc};
use url::form_urlencoded;

/// Formats a timestamp as readable text, e.g. "Nov 16, 2025". Absent dates
/// format to nothing rather than a placeholder.
pub(crate) fn format_date(value: Option<&DateTime<Utc>>) -> Option<String> {
    value.map(|date| date.format("%b %-d, %Y").to_string())
}

/// First `max_chars` characters of a body, with an ellipsis when truncated.
/// Counts characters, not bytes, so multi-byte text is never split.
pub(crate) fn preview(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        return body.to_string();
    }
    let cut: String = body.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Link to the single-post page.
pub(crate) fn post_href(id: i64) -> String {
    format!("/post/?id={id}")
}

/// Link to a profile page, with the handle percent-encoded into the query.
pub(crate) fn profile_href(handle: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", handle)
        .finish();
    format!("/profile/?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_dates_as_short_text() {
        let date = Utc.with_ymd_and_hms(2025, 11, 16, 2, 13, 37).unwrap();
        assert_eq!(format_date(Some(&date)).as_deref(), Some("Nov 16, 2025"));
        assert_eq!(format_date(None), None);
    }

    #[test]
    fn preview_truncates_long_bodies_only() {
        assert_eq!(preview("short", 120), "short");
        let long = "x".repeat(121);
        let cut = preview(&long, 120);
        assert_eq!(cut.chars().count(), 123);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let body = "åéî".repeat(50);
        let cut = preview(&body, 120);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 123);
    }

    #[test]
    fn profile_links_encode_the_handle() {
        assert_eq!(profile_href("alice"), "/profile/?name=alice");
        assert_eq!(profile_href("a b&c"), "/profile/?name=a+b%26c");
    }
}
