//! Page-link window and navigation state for the users table
//!
//! ```rust
//! use roster::web::PaginationControl;
//!
//! // 45 users, 20 per page, windows of 10 links
//! let control = PaginationControl::new(2, 45, 20, 10);
//! assert_eq!(control.max_pages, 3);
//! assert_eq!(control.numbers(), vec![1, 2, 3]);
//! assert!(!control.prev.disabled);
//! assert!(!control.next.disabled);
//! ```

/// One numbered page link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: u64,
    pub href: String,
    pub active: bool,
}

/// First / Previous / Next / Last button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub disabled: bool,
}

/// Everything the template needs to draw the pagination bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    pub page: u64,
    pub max_pages: u64,
    pub links: Vec<PageLink>,
    pub first: NavLink,
    pub prev: NavLink,
    pub next: NavLink,
    pub last: NavLink,
}

fn page_href(page: u64) -> String {
    format!("?page={}", page)
}

impl PaginationControl {
    /// Build the control for a 1-based `page`
    ///
    /// Links cover the fixed window of `window_size` pages containing `page`,
    /// cut off at the last page. With no users there are no pages and the
    /// window is empty.
    pub fn new(page: u64, count: u64, page_size: u64, window_size: u64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let window_size = window_size.max(1);

        let max_pages = count.div_ceil(page_size);
        let window_start = ((page - 1) / window_size) * window_size + 1;
        let window_end = window_start
            .saturating_add(window_size - 1)
            .min(max_pages);

        let links = (window_start..=window_end)
            .map(|number| PageLink {
                number,
                href: page_href(number),
                active: number == page,
            })
            .collect();

        let at_start = page == 1;
        let at_end = page == max_pages;

        Self {
            page,
            max_pages,
            links,
            first: NavLink {
                href: "/".to_string(),
                disabled: at_start,
            },
            prev: NavLink {
                href: page_href((page - 1).max(1)),
                disabled: at_start,
            },
            next: NavLink {
                href: page_href(page.saturating_add(1)),
                disabled: at_end,
            },
            last: NavLink {
                href: page_href(max_pages.max(1)),
                disabled: at_end,
            },
        }
    }

    /// Page numbers in the current window
    pub fn numbers(&self) -> Vec<u64> {
        self.links.iter().map(|l| l.number).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_window() {
        let control = PaginationControl::new(1, 45, 20, 10);
        assert_eq!(control.max_pages, 3);
        assert_eq!(control.numbers(), vec![1, 2, 3]);
        assert!(control.links[0].active);
        assert!(!control.links[1].active);
        assert_eq!(control.links[1].href, "?page=2");
    }

    #[test]
    fn test_second_window() {
        // 250 users -> 13 pages; page 12 sits in the 11..=13 window
        let control = PaginationControl::new(12, 250, 20, 10);
        assert_eq!(control.max_pages, 13);
        assert_eq!(control.numbers(), vec![11, 12, 13]);
        assert!(control.links.iter().any(|l| l.active && l.number == 12));
    }

    #[test]
    fn test_window_boundaries() {
        let control = PaginationControl::new(10, 1000, 20, 10);
        assert_eq!(control.numbers(), (1..=10).collect::<Vec<_>>());

        let control = PaginationControl::new(11, 1000, 20, 10);
        assert_eq!(control.numbers(), (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_contains_page_and_is_bounded() {
        for count in [1, 19, 20, 21, 45, 199, 200, 201, 1234] {
            let max_pages = PaginationControl::new(1, count, 20, 10).max_pages;
            for page in 1..=max_pages {
                let control = PaginationControl::new(page, count, 20, 10);
                assert!(control.links.len() <= 10);
                assert_eq!(control.links.iter().filter(|l| l.active).count(), 1);
                assert!(control.numbers().contains(&page));
            }
        }
    }

    #[test]
    fn test_nav_on_first_page() {
        let control = PaginationControl::new(1, 45, 20, 10);
        assert!(control.first.disabled);
        assert!(control.prev.disabled);
        assert!(!control.next.disabled);
        assert!(!control.last.disabled);
        assert_eq!(control.first.href, "/");
        assert_eq!(control.next.href, "?page=2");
        assert_eq!(control.last.href, "?page=3");
    }

    #[test]
    fn test_nav_on_last_page() {
        let control = PaginationControl::new(3, 45, 20, 10);
        assert!(!control.first.disabled);
        assert!(!control.prev.disabled);
        assert!(control.next.disabled);
        assert!(control.last.disabled);
        assert_eq!(control.prev.href, "?page=2");
    }

    #[test]
    fn test_single_page_disables_everything() {
        let control = PaginationControl::new(1, 5, 20, 10);
        assert_eq!(control.max_pages, 1);
        assert!(control.first.disabled && control.prev.disabled);
        assert!(control.next.disabled && control.last.disabled);
    }

    #[test]
    fn test_empty_collection() {
        let control = PaginationControl::new(1, 0, 20, 10);
        assert_eq!(control.max_pages, 0);
        assert!(control.links.is_empty());
        assert!(control.first.disabled);
    }

    #[test]
    fn test_page_past_end_has_empty_window() {
        let control = PaginationControl::new(15, 45, 20, 10);
        assert!(control.links.is_empty());
        assert!(!control.next.disabled);
    }
}
