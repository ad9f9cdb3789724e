//! URL policy for image candidates. Pure string functions, no I/O.

/// True for inline-encoded `data:` URIs, which are never fetched.
pub fn is_data_uri(url: &str) -> bool {
    url.starts_with("data:")
}

/// True when the URL carries the site's content-asset path marker, which
/// separates article images from UI chrome and icons.
pub fn is_content_asset(url: &str, marker: &str) -> bool {
    url.contains(marker)
}

/// Derive the full-resolution URL. Everything from the first occurrence of
/// `marker` onward is a thumbnailing directive and is dropped.
pub fn full_size_url<'a>(url: &'a str, marker: &str) -> &'a str {
    match url.find(marker) {
        Some(at) => &url[..at],
        None => url,
    }
}

/// Overall progress after `done` of `total` candidates, as a rounded percent.
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((done as f64 / total as f64) * 100.0).round() as u8
}
