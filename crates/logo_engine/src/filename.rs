/// Filename for a saved image: the URL's final path segment, or a
/// `logo_{index}.jpg` fallback when the segment is missing or carries no
/// extension. The result is always sanitized for the local filesystem.
pub fn logo_filename(full_size: &str, index: usize) -> String {
    let name = match final_path_segment(full_size) {
        Some(segment) if segment.contains('.') => segment.to_string(),
        _ => format!("logo_{index}.jpg"),
    };
    sanitize_file_name(&name)
}

/// Retain only alphanumeric characters, spaces, periods, and underscores,
/// then strip trailing whitespace. Path separators never survive, so the
/// result cannot escape the output directory.
pub fn sanitize_file_name(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '_'))
        .collect();
    kept.trim_end().to_string()
}

fn final_path_segment(raw: &str) -> Option<&str> {
    // Query and fragment are not part of the path.
    let path = raw.split(['?', '#']).next().unwrap_or(raw);
    path.rsplit('/').next().filter(|segment| !segment.is_empty())
}
