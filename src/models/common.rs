use serde::{Deserialize, Serialize};

/// Wire-level wrapper every backend endpoint returns. The gateway unwraps
/// `result` uniformly; the status metadata is carried for diagnostics only.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub result: T,
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub request_time: Option<String>,
    #[serde(default)]
    pub response_time: Option<String>,
}

/// Standard paginated collection shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResult<T> {
    /// Builds a page from raw fields, deriving `total_pages` the way listing
    /// endpoints that omit it expect.
    pub fn from_raw(items: Vec<T>, total_count: i64, page: i64, page_size: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_count + page_size - 1) / page_size
        } else {
            0
        };
        PaginatedResult {
            items,
            total_count,
            page,
            page_size,
            total_pages,
        }
    }
}

/// An id/name pair used by filter payloads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IdName {
    pub id: String,
    pub name: String,
}

/// Common listing parameters (page, pageSize, search).
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: i64,
    pub page_size: i64,
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery {
            page: 1,
            page_size: 25,
            search: String::new(),
        }
    }
}

impl ListQuery {
    pub fn new(page: i64, page_size: i64, search: impl Into<String>) -> Self {
        ListQuery {
            page,
            page_size,
            search: search.into(),
        }
    }

    /// Renders the query string, URL-encoding the search term.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the query string matches the wire convention, including
    /// encoding of the search term.
    #[test]
    fn test_list_query_to_query_string() {
        let query = ListQuery::new(2, 50, "pump house");
        assert_eq!(query.to_query_string(), "page=2&pageSize=50&search=pump+house");

        let default = ListQuery::default();
        assert_eq!(default.to_query_string(), "page=1&pageSize=25&search=");
    }

    /// Test the derived page count, including a partial last page.
    #[test]
    fn test_paginated_result_from_raw() {
        let page = PaginatedResult::from_raw(vec![1, 2, 3], 101, 1, 25);
        assert_eq!(page.total_pages, 5);
        let exact = PaginatedResult::from_raw(vec![1], 100, 1, 25);
        assert_eq!(exact.total_pages, 4);
        let empty = PaginatedResult::<i64>::from_raw(vec![], 0, 1, 0);
        assert_eq!(empty.total_pages, 0);
    }
}
