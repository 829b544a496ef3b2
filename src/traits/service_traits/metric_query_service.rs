use crate::common::*;

use crate::model::metric::metric_sample::*;

#[async_trait]
pub trait MetricQueryService: Send + Sync {
    #[doc = "
        Fetch the complete metric history from the store, oldest bucket first
        # Returns
        * Every row the store holds, accumulated across pages. Zero total rows
          is an error, not an empty vector.
    "]
    async fn fetch_metric_history(&self) -> anyhow::Result<Vec<MetricSample>>;
}
