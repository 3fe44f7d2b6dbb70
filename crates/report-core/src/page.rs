//! Cursor-following pagination shared by every list-style remote call.

use std::future::Future;

use crate::SourceError;

/// Page size requested from the remote service (its documented maximum).
pub const PAGE_SIZE: u32 = 50;

/// Ceiling on pages followed in one listing.
///
/// Cursor chains terminate naturally when the service stops returning a
/// token; the ceiling guards against a misbehaving service handing back a
/// non-terminating chain.
pub const MAX_PAGES: usize = 1000;

/// One page of a cursor-driven listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Cursor for the next page, absent on the last page.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// A page with items and no continuation.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }
}

/// Follow a cursor chain to completion and concatenate all pages.
///
/// `fetch` is called with `None` first, then with each returned cursor
/// until a page comes back without one. Pagination is all-or-nothing: any
/// page failure aborts the whole listing, because a partial result would
/// silently under-report.
pub async fn paginate<T, F, Fut>(mut fetch: F) -> Result<Vec<T>, SourceError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, SourceError>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    for _ in 0..MAX_PAGES {
        let page = fetch(cursor.take()).await?;
        items.extend(page.items);

        match page.next_token {
            Some(token) => cursor = Some(token),
            None => return Ok(items),
        }
    }

    Err(SourceError::PageLimit(MAX_PAGES))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn test_single_page() {
        let result = paginate(|cursor| async move {
            assert!(cursor.is_none());
            Ok(Page::last(vec!["a", "b"]))
        })
        .await
        .unwrap();

        assert_eq!(result, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_concatenates_pages_in_order() {
        let calls = AtomicUsize::new(0);
        let result = paginate(|cursor| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                match n {
                    0 => {
                        assert!(cursor.is_none());
                        Ok(Page {
                            items: vec![1, 2],
                            next_token: Some("p2".to_string()),
                        })
                    }
                    1 => {
                        assert_eq!(cursor.as_deref(), Some("p2"));
                        Ok(Page {
                            items: vec![3],
                            next_token: Some("p3".to_string()),
                        })
                    }
                    _ => {
                        assert_eq!(cursor.as_deref(), Some("p3"));
                        Ok(Page::last(vec![]))
                    }
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(result, vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_page_failure_aborts_whole_listing() {
        let calls = AtomicUsize::new(0);
        let result: Result<Vec<i32>, _> = paginate(|_| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Ok(Page {
                        items: vec![1],
                        next_token: Some("p2".to_string()),
                    })
                } else {
                    Err(SourceError::Network("connection reset".to_string()))
                }
            }
        })
        .await;

        assert!(matches!(result, Err(SourceError::Network(_))));
    }

    #[tokio::test]
    async fn test_non_terminating_cursor_hits_ceiling() {
        let result: Result<Vec<i32>, _> = paginate(|_| async {
            Ok(Page {
                items: vec![],
                next_token: Some("again".to_string()),
            })
        })
        .await;

        assert!(matches!(result, Err(SourceError::PageLimit(MAX_PAGES))));
    }
}
