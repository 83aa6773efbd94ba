//! One-shot form-success flag.
//!
//! The contact form posts to a relay that redirects back with
//! `?success=1`. The flag is consumed exactly once and stripped from the
//! URL, so a reload or a shared link does not re-show the banner.

use url::Url;

/// Query parameter the form relay appends on successful submission.
const SUCCESS_PARAM: &str = "success";

/// Checks `href` for the `success=1` marker. Returns the href with the
/// marker stripped when it was present; `None` means no banner and no URL
/// rewrite. Unparseable hrefs are treated as unflagged.
pub fn consume_success_flag(href: &str) -> Option<String> {
    let mut parsed = Url::parse(href).ok()?;

    let flagged = parsed
        .query_pairs()
        .any(|(key, value)| key == SUCCESS_PARAM && value == "1");
    if !flagged {
        return None;
    }

    let remaining: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| key != SUCCESS_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if remaining.is_empty() {
        parsed.set_query(None);
    } else {
        parsed
            .query_pairs_mut()
            .clear()
            .extend_pairs(remaining.iter().map(|(key, value)| (key.as_str(), value.as_str())));
    }

    Some(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flag_is_stripped_with_fragment_kept() {
        let cleaned = consume_success_flag("https://pentatraders.com/?success=1#contact");

        assert_eq!(
            cleaned.as_deref(),
            Some("https://pentatraders.com/#contact")
        );
    }

    #[test]
    fn test_other_query_params_survive_the_strip() {
        let cleaned =
            consume_success_flag("https://pentatraders.com/?utm_source=fb&success=1#contact");

        assert_eq!(
            cleaned.as_deref(),
            Some("https://pentatraders.com/?utm_source=fb#contact")
        );
    }

    #[test]
    fn test_flag_requires_the_exact_value_one() {
        assert_eq!(
            consume_success_flag("https://pentatraders.com/?success=0"),
            None
        );
        assert_eq!(
            consume_success_flag("https://pentatraders.com/?success=yes"),
            None
        );
    }

    #[test]
    fn test_plain_url_is_left_alone() {
        assert_eq!(consume_success_flag("https://pentatraders.com/"), None);
        assert_eq!(
            consume_success_flag("https://pentatraders.com/#products"),
            None
        );
    }

    #[test]
    fn test_garbage_href_is_treated_as_unflagged() {
        assert_eq!(consume_success_flag("not a url"), None);
    }

    #[test]
    fn test_local_dev_origin_with_port() {
        let cleaned = consume_success_flag("http://127.0.0.1:8080/?success=1#contact");

        assert_eq!(cleaned.as_deref(), Some("http://127.0.0.1:8080/#contact"));
    }
}
