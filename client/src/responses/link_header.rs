use once_cell::sync::Lazy;
use regex::Regex;

static LINK_ENTRY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<([^>]*)>\s*;\s*rel="?(\w+)"?"#).unwrap());

static PAGE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]page=(\d+)").unwrap());

static PAGE_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]pageId=(\d+)").unwrap());

/// One target of a `Link` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub url: String,
    /// `page` query parameter of the target, for navigable pagination
    pub page: Option<u32>,
    /// `pageId` query parameter of the target, for forward-only pagination
    pub page_id: Option<i64>,
}

impl PageLink {
    fn from_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            page: PAGE_REGEX
                .captures(url)
                .and_then(|c| c[1].parse().ok()),
            page_id: PAGE_ID_REGEX
                .captures(url)
                .and_then(|c| c[1].parse().ok()),
        }
    }
}

/// Pagination links sent by Manage in the `Link` response header.
///
/// ```text
/// Link: <https://host/v4_6_release/apis/3.0/service/slas?page=2&pageSize=25>; rel="next",
///       <https://host/v4_6_release/apis/3.0/service/slas?page=4&pageSize=25>; rel="last"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<PageLink>,
    pub prev: Option<PageLink>,
    pub next: Option<PageLink>,
    pub last: Option<PageLink>,
}

impl PageLinks {
    /// Parses a `Link` header value. Unknown relations are ignored.
    pub fn parse(header: &str) -> Self {
        let mut links = PageLinks::default();
        for captures in LINK_ENTRY_REGEX.captures_iter(header) {
            let link = PageLink::from_url(&captures[1]);
            match &captures[2] {
                "first" => links.first = Some(link),
                "prev" | "previous" => links.prev = Some(link),
                "next" => links.next = Some(link),
                "last" => links.last = Some(link),
                other => log::trace!("Ignoring link relation {other}"),
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigable_links() {
        let header = r#"<https://na.myconnectwise.net/v4_6_release/apis/3.0/service/slas?page=1&pageSize=25>; rel="first", <https://na.myconnectwise.net/v4_6_release/apis/3.0/service/slas?page=3&pageSize=25>; rel="next", <https://na.myconnectwise.net/v4_6_release/apis/3.0/service/slas?page=1&pageSize=25>; rel="prev", <https://na.myconnectwise.net/v4_6_release/apis/3.0/service/slas?page=9&pageSize=25>; rel="last""#;
        let links = PageLinks::parse(header);

        assert_eq!(links.first.unwrap().page, Some(1));
        assert_eq!(links.prev.unwrap().page, Some(1));
        let next = links.next.unwrap();
        assert_eq!(next.page, Some(3));
        assert_eq!(next.page_id, None);
        assert!(next.url.ends_with("page=3&pageSize=25"));
        assert_eq!(links.last.unwrap().page, Some(9));
    }

    #[test]
    fn test_parse_forward_only_link() {
        let header = r#"<https://host/apis/3.0/service/slas?pageSize=25&pageId=1042>; rel="next""#;
        let links = PageLinks::parse(header);
        let next = links.next.unwrap();
        assert_eq!(next.page, None);
        assert_eq!(next.page_id, Some(1042));
        assert!(links.last.is_none());
    }

    #[test]
    fn test_page_size_is_not_mistaken_for_page() {
        let link = PageLink::from_url("https://host/x?pageSize=25");
        assert_eq!(link.page, None);
    }

    #[test]
    fn test_parse_empty_header() {
        assert_eq!(PageLinks::parse(""), PageLinks::default());
    }
}
