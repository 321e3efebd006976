//! Pagination envelope

use serde::{Deserialize, Serialize};

/// `{ data, total, page, per_page, total_pages }` as returned by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Page count derived from `total` and `per_page`.
    ///
    /// Servers that omit `total_pages` still paginate correctly.
    pub fn pages(&self) -> u32 {
        total_pages(self.total, self.per_page)
    }
}

/// `ceil(total / per_page)`; zero when `per_page` is zero
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(95, 20), 5);
        assert_eq!(total_pages(100, 20), 5);
        assert_eq!(total_pages(101, 20), 6);
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_navigation_flags() {
        let page: PaginatedResponse<u32> = serde_json::from_str(
            r#"{"data":[1,2],"total":25,"page":1,"per_page":10}"#,
        )
        .unwrap();

        assert_eq!(page.pages(), 3);
        assert!(page.has_next());
        assert!(!page.has_prev());
    }
}
