//! Page-jump validation and query-string rewriting.

use url::Url;

use crate::error::PageError;

/// Integer prefix of `raw`, the way the browser's `parseInt` reads it:
/// leading whitespace skipped, optional sign, decimal digits up to the
/// first non-digit. `None` when there are no digits.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for d in digits {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d - b'0'));
    }
    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Max page count from the holder attribute.
pub fn parse_max_pages(attribute: &str) -> Result<i64, PageError> {
    parse_int_prefix(attribute).ok_or(PageError::MissingMaxPages)
}

/// Accept `raw` only if it reads as an integer in `1..=max_pages`.
pub fn validate_page(raw: &str, max_pages: i64) -> Result<u32, PageError> {
    parse_int_prefix(raw)
        .filter(|page| (1..=max_pages).contains(page))
        .and_then(|page| u32::try_from(page).ok())
        .ok_or(PageError::InvalidPage { max: max_pages })
}

/// Set query parameters on `href`, preserving all others.
///
/// The first occurrence of a key is replaced in place and later duplicates
/// dropped; absent keys are appended.
pub fn with_query_params(href: &str, params: &[(&str, &str)]) -> Result<String, PageError> {
    let mut url = Url::parse(href).map_err(|source| PageError::InvalidUrl {
        url: href.to_string(),
        source,
    })?;

    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    for &(key, value) in params {
        match pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                pairs[first].1 = value.to_string();
                let mut index = 0;
                pairs.retain(|(k, _)| {
                    let keep = k != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }

    url.query_pairs_mut().clear().extend_pairs(&pairs);
    Ok(url.to_string())
}
