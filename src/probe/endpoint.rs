//! Endpoint families of the monitored service.

/// Prefix of redeemable code pages.
pub const CODE_URL_PREFIX: &str = "https://secretsanta.cadbury.co.uk/code/";

/// Prefix the service redirects to once a code is gone.
pub const MISSED_OUT_URL_PREFIX: &str = "https://secretsanta.cadbury.co.uk/missed-out";

/// Whether `url` has the shape of a code page URL.
pub fn is_valid_code_url(url: &str) -> bool {
    matches_family(url, CODE_URL_PREFIX)
}

/// Whether `url` points at the missed-out page.
pub fn is_missed_out_url(url: &str) -> bool {
    matches_family(url, MISSED_OUT_URL_PREFIX)
}

// The remainder after the prefix must stay on a single line.
fn matches_family(url: &str, prefix: &str) -> bool {
    url.strip_prefix(prefix)
        .is_some_and(|rest| !rest.contains(['\n', '\r', '\u{2028}', '\u{2029}']))
}
