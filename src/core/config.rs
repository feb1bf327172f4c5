//! Build-time configuration for the console.
//!
//! The API base URL and the public website URL are baked into the bundle at
//! compile time; override them with the `API_BASE_URL` and `SITE_BASE_URL`
//! environment variables when building.

/// Base URL of the platform REST API.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api",
};

/// Base URL of the public-facing website (used for "view on site" links).
pub const SITE_BASE_URL: &str = match option_env!("SITE_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3001",
};

/// Build a full API URL from a path.
///
/// Joins the configured base with `path`, normalizing the slash between them.
pub fn get_api_url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

/// Build a full public-site URL from a path.
pub fn get_site_url(path: &str) -> String {
    join_url(SITE_BASE_URL, path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_inserts_single_slash() {
        assert_eq!(join_url("http://api.test", "blogs"), "http://api.test/blogs");
        assert_eq!(
            join_url("http://api.test/", "/blogs"),
            "http://api.test/blogs"
        );
        assert_eq!(
            join_url("http://api.test", "/blogs/7"),
            "http://api.test/blogs/7"
        );
    }

    #[test]
    fn test_join_url_empty_path_returns_base() {
        assert_eq!(join_url("http://api.test/", ""), "http://api.test");
    }

    #[test]
    fn test_get_api_url_uses_configured_base() {
        let url = get_api_url("ideas");
        assert!(url.starts_with(API_BASE_URL.trim_end_matches('/')));
        assert!(url.ends_with("/ideas"));
    }

    #[test]
    fn test_get_site_url_uses_site_base() {
        let url = get_site_url("/blog/my-post");
        assert!(url.starts_with(SITE_BASE_URL.trim_end_matches('/')));
        assert!(url.ends_with("/blog/my-post"));
    }
}
