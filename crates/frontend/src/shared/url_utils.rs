/// Utilities for URL path handling

/// Last path segment of a URL, used for compact image option labels.
/// Example: "/media/recipes/a.jpg" -> "a.jpg"
pub fn file_name_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(file_name_from_url("/media/recipes/a.jpg"), "a.jpg");
        assert_eq!(file_name_from_url("https://cdn.example.com/m/b.png"), "b.png");
        assert_eq!(file_name_from_url("a.jpg"), "a.jpg");
    }

    #[test]
    fn test_degenerate_urls() {
        assert_eq!(file_name_from_url("/media/recipes/"), "");
        assert_eq!(file_name_from_url(""), "");
    }
}
