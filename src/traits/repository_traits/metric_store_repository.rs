use crate::common::*;

use crate::dto::metric_page::*;

#[async_trait]
pub trait MetricStoreRepository: Send + Sync {
    #[doc = "
        Fetch one bounded-range page of metric rows from the remote store
        # Arguments
        * `offset` - 0-indexed offset of the first row to request
        * `limit` - maximum number of rows for this page
    "]
    async fn fetch_page(&self, offset: usize, limit: usize) -> anyhow::Result<MetricPage>;
}
