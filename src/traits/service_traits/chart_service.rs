use crate::common::*;

use crate::model::metric::metric_sample::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render the metric series as a dual-axis line chart and save it as a PNG file
        # Arguments
        * `series` - time-ordered, non-empty metric series (empty series is an error)
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_dual_axis_chart(
        &self,
        series: &[MetricSample],
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
