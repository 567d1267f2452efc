/// Complete an incomplete URL: add a missing scheme and leave anything that
/// already carries one untouched
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    let has_scheme = ["http://", "https://", "file://", "data:", "about:", "chrome://"]
        .iter()
        .any(|scheme| trimmed.starts_with(scheme));
    if has_scheme {
        return trimmed.to_string();
    }

    // Relative paths stay relative
    if trimmed.starts_with('/') || trimmed.starts_with("./") || trimmed.starts_with("../") {
        return trimmed.to_string();
    }

    // Local development targets default to http
    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    format!("https://{}", trimmed)
}
