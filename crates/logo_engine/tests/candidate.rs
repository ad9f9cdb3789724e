use logo_engine::{
    full_size_url, is_content_asset, is_data_uri, logo_filename, percent, sanitize_file_name,
};
use pretty_assertions::assert_eq;

#[test]
fn data_uris_are_recognized() {
    assert!(is_data_uri("data:image/png;base64,iVBORw0KGgo="));
    assert!(is_data_uri("data:image/gif;base64,R0lGOD"));
    assert!(!is_data_uri("https://cdn.example/images/logo.png"));
}

#[test]
fn content_asset_marker_separates_article_images_from_chrome() {
    assert!(is_content_asset(
        "https://cdn.example/images/5/5f/Logo.png",
        "/images/"
    ));
    assert!(!is_content_asset("https://cdn.example/ui/sprite.png", "/images/"));
    assert!(!is_content_asset("images/no-leading-slash.png", "/images/"));
}

#[test]
fn revision_marker_truncates_thumbnail_directives() {
    assert_eq!(
        full_size_url(
            "https://cdn.example/images/Logo.png/revision/latest/scale-to-width-down/50",
            "/revision/"
        ),
        "https://cdn.example/images/Logo.png"
    );
    assert_eq!(
        full_size_url("https://cdn.example/images/Logo.png", "/revision/"),
        "https://cdn.example/images/Logo.png"
    );
}

#[test]
fn percent_rounds_to_nearest() {
    assert_eq!(percent(1, 3), 33);
    assert_eq!(percent(2, 3), 67);
    assert_eq!(percent(3, 3), 100);
    assert_eq!(percent(1, 7), 14);
}

#[test]
fn filename_comes_from_final_path_segment() {
    assert_eq!(
        logo_filename("https://cdn.example/images/a/Logo One.png", 4),
        "Logo One.png"
    );
}

#[test]
fn filename_excludes_query_and_fragment() {
    assert_eq!(
        logo_filename("https://cdn.example/images/logo.png?cb=123", 0),
        "logo.png"
    );
}

#[test]
fn filename_falls_back_when_segment_lacks_extension() {
    assert_eq!(logo_filename("https://cdn.example/images/raw", 4), "logo_4.jpg");
}

#[test]
fn filename_falls_back_when_segment_is_missing() {
    assert_eq!(logo_filename("https://cdn.example/images/", 7), "logo_7.jpg");
}

#[test]
fn sanitize_keeps_only_safe_characters() {
    assert_eq!(sanitize_file_name("logo (1).png  "), "logo 1.png");
    assert_eq!(sanitize_file_name("a<b>c:d.png"), "abcd.png");
}

#[test]
fn sanitize_defeats_path_traversal() {
    assert_eq!(sanitize_file_name("../../etc/passwd"), "....etcpasswd");
    assert_eq!(sanitize_file_name("..\\windows\\system32"), "..windowssystem32");
}

#[test]
fn sanitize_keeps_unicode_letters() {
    assert_eq!(sanitize_file_name("Müller_Logo.png"), "Müller_Logo.png");
}
