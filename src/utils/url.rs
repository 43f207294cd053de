// src/utils/url.rs

//! URL building for the watchlist site.

use regex::Regex;

/// Join a host and an absolute path.
///
/// # Examples
/// ```
/// use watchlist_streams::utils::url::join;
///
/// assert_eq!(
///     join("https://letterboxd.com/", "/film/alien/"),
///     "https://letterboxd.com/film/alien/"
/// );
/// ```
pub fn join(host: &str, path: &str) -> String {
    let host = host.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{host}{path}")
    } else {
        format!("{host}/{path}")
    }
}

/// Path of one page of a user's watchlist.
pub fn watchlist_page_path(username: &str, page: u32) -> String {
    format!("/{username}/watchlist/page/{page}")
}

/// Normalize a stored slug into a detail-page path.
///
/// Entries that already look like a path are kept; a bare slug becomes
/// `/film/<slug>/`.
pub fn film_path(slug: &str) -> String {
    let slug = slug.trim();
    if slug.starts_with('/') {
        slug.to_string()
    } else {
        format!("/film/{}/", slug.trim_matches('/'))
    }
}

/// Recover the detail-page path from a link such as
/// `https://letterboxd.com/film/alien/` or `/film/alien/details/`.
pub fn film_path_from_link(link: &str) -> Option<String> {
    Regex::new(r"/film/([^/?#]+)/?")
        .ok()?
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|slug| format!("/film/{}/", slug.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_handles_slashes() {
        assert_eq!(join("https://letterboxd.com", "/a"), "https://letterboxd.com/a");
        assert_eq!(join("https://letterboxd.com/", "a"), "https://letterboxd.com/a");
    }

    #[test]
    fn test_watchlist_page_path() {
        assert_eq!(
            watchlist_page_path("someone", 3),
            "/someone/watchlist/page/3"
        );
    }

    #[test]
    fn test_film_path_keeps_paths() {
        assert_eq!(film_path("/film/alien/\n"), "/film/alien/");
    }

    #[test]
    fn test_film_path_wraps_bare_slug() {
        assert_eq!(film_path("alien"), "/film/alien/");
    }

    #[test]
    fn test_film_path_from_link() {
        assert_eq!(
            film_path_from_link("https://letterboxd.com/film/alien/"),
            Some("/film/alien/".to_string())
        );
        assert_eq!(
            film_path_from_link("/film/heat-1995/details/"),
            Some("/film/heat-1995/".to_string())
        );
        assert_eq!(film_path_from_link("/someone/list/x/"), None);
    }
}
