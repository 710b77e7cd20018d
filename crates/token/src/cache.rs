use crate::{metrics::Metrics, TokenError};
use std::future::Future;
use tokio::sync::OnceCell;

/// Token metadata the standard treats as immutable for a deployed contract.
///
/// Each slot is filled at most once. Presence is tracked by the cell itself,
/// so `decimals == 0` or an empty name are cached like any other value.
#[derive(Debug, Default)]
pub(crate) struct MetadataCache {
    pub(crate) name: OnceCell<String>,
    pub(crate) symbol: OnceCell<String>,
    pub(crate) decimals: OnceCell<u8>,
}

/// Return the cached value, or run `fetch` to fill the slot.
///
/// Concurrent callers on an empty slot wait for the first fetch instead of
/// issuing their own. A failed fetch leaves the slot empty.
pub(crate) async fn get_or_fetch<'a, T, F, Fut>(
    cell: &'a OnceCell<T>,
    field: &'static str,
    metrics: &Metrics,
    fetch: F,
) -> Result<&'a T, TokenError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, TokenError>>,
{
    if let Some(value) = cell.get() {
        metrics.record_cache_hit(field);
        return Ok(value);
    }

    cell.get_or_try_init(fetch).await
}
