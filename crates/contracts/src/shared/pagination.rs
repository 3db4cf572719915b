use serde::{Deserialize, Serialize};

/// Page envelope used by every listing endpoint. `next` is absent on the
/// last page, `previous` on the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn total_pages(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.count.div_ceil(u64::from(page_size))
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(count: u64, next: Option<&str>, previous: Option<&str>) -> PaginatedResponse<u32> {
        PaginatedResponse {
            count,
            next: next.map(String::from),
            previous: previous.map(String::from),
            results: Vec::new(),
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(page(25, None, None).total_pages(12), 3);
        assert_eq!(page(24, None, None).total_pages(12), 2);
        assert_eq!(page(1, None, None).total_pages(12), 1);
        assert_eq!(page(0, None, None).total_pages(12), 0);
    }

    #[test]
    fn first_page_has_no_previous_last_page_has_no_next() {
        let first = page(25, Some("/books/?page=2"), None);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = page(25, None, Some("/books/?page=2"));
        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn deserializes_null_links_as_absent() {
        let parsed: PaginatedResponse<u32> = serde_json::from_str(
            r#"{ "count": 2, "next": null, "previous": null, "results": [1, 2] }"#,
        )
        .unwrap();
        assert_eq!(parsed.results, vec![1, 2]);
        assert!(!parsed.has_next());
        assert!(!parsed.has_previous());
    }
}
