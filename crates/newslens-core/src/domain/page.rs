use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Spring-style pagination envelope. `number` is the 0-based page index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub size: u32,
    pub number: u32,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        u64::from(self.number) + 1 >= self.total_pages
    }

    pub fn next_page(&self) -> Option<u32> {
        if self.is_last() {
            None
        } else {
            Some(self.number + 1)
        }
    }
}

/// Outcome of an admin operation (batch jobs, deletes, membership edits).
///
/// The backend reports different counters per operation; the common ones
/// are typed and everything else is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSummary {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub affected: Option<u64>,
    pub processed: Option<u64>,
    pub failed: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_ignores_extra_fields() {
        let page: Page<u32> = serde_json::from_value(json!({
            "content": [1, 2],
            "totalElements": 42,
            "totalPages": 3,
            "size": 20,
            "number": 0,
            "sort": { "sorted": true },
            "first": true
        }))
        .expect("page");

        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.next_page(), Some(1));
    }

    #[test]
    fn last_page_has_no_next() {
        let page = Page::<u32> {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size: 20,
            number: 0,
        };
        assert!(page.is_last());
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn summary_keeps_unknown_counters() {
        let summary: OperationSummary = serde_json::from_value(json!({
            "message": "queued",
            "processed": 5,
            "skippedLowValue": 2
        }))
        .expect("summary");

        assert_eq!(summary.processed, Some(5));
        assert_eq!(summary.extra.get("skippedLowValue"), Some(&json!(2)));
    }
}
