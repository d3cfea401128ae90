//! Next-page extraction from the API's pagination links.

/// Parse the page number out of a response's `next` URL.
///
/// The list endpoints report the following page as a full URL
/// (`...?key=...&page=3&page_size=40`); the page number is the only
/// part the feed needs. `None` — either because the link is absent or
/// carries no `page` parameter — means the resource is exhausted.
/// A `next` link without an explicit `page` refers to page 2 only when
/// the API omits `page=1` from first-page requests, which it does not
/// do here, so that case is treated as exhausted as well.
pub fn next_page_number(next: Option<&str>) -> Option<u32> {
    let url = next?;
    let query = url.split_once('?')?.1;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_page_parameter() {
        assert_eq!(
            next_page_number(Some(
                "https://api.rawg.io/api/games?key=abc&page=2&page_size=40"
            )),
            Some(2)
        );
        assert_eq!(
            next_page_number(Some("https://api.rawg.io/api/games?page=17")),
            Some(17)
        );
    }

    #[test]
    fn absent_link_means_exhausted() {
        assert_eq!(next_page_number(None), None);
    }

    #[test]
    fn link_without_page_means_exhausted() {
        assert_eq!(
            next_page_number(Some("https://api.rawg.io/api/games?key=abc")),
            None
        );
        assert_eq!(next_page_number(Some("not a url")), None);
    }

    #[test]
    fn malformed_page_value_means_exhausted() {
        assert_eq!(
            next_page_number(Some("https://api.rawg.io/api/games?page=two")),
            None
        );
    }
}
