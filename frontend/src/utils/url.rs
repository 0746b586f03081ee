use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// RFC 3986 unreserved characters stay readable.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Appends `key=value` to `url`, keeping any query string already present.
pub fn append_query(url: &str, key: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        url,
        separator,
        encode_query_value(key),
        encode_query_value(value)
    )
}

#[cfg(target_arch = "wasm32")]
fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn origin() -> Option<String> {
    None
}

/// Prefixes root-relative URLs with the page origin; absolute URLs pass through.
pub fn absolutize(url: &str) -> String {
    absolutize_with(url, origin().as_deref())
}

fn absolutize_with(url: &str, origin: Option<&str>) -> String {
    match origin {
        Some(origin) if url.starts_with('/') && !url.starts_with("//") => {
            format!("{}{}", origin.trim_end_matches('/'), url)
        }
        _ => url.to_string(),
    }
}
