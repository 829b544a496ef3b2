use crate::common::*;

use crate::model::{configs::chart_render_config::*, metric::metric_sample::*};

use crate::traits::service_traits::{chart_service::*, metric_query_service::*};

use crate::utils_modules::series_utils::*;

#[derive(Debug, new)]
pub struct MainController<Q: MetricQueryService, C: ChartService> {
    metric_query_service: Q,
    chart_service: C,
    render_config: ChartRenderConfig,
}

impl<Q: MetricQueryService, C: ChartService> MainController<Q, C> {
    #[doc = r#"
        파이프라인 전체를 1회 실행하는 핵심 함수.

        1. 저장소의 전체 지표 이력을 페이지 단위로 조회한다
        2. 차트 캔버스 폭에 맞게 시계열을 다운샘플링한다
        3. 이중 축 라인 차트를 PNG 로 렌더링한다
        4. 어느 단계든 실패하면 부분 결과 없이 전체 실행이 실패한다

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 치명적 오류 시 Err
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        /* 1. 전체 지표 이력 조회 */
        let series: Vec<MetricSample> = self.metric_query_service.fetch_metric_history().await?;

        /* 2. 플롯용 다운샘플링 */
        let sampled: Vec<MetricSample> = downsample(series, *self.render_config.max_points());

        /* 3. 이중 축 차트 렌더링 */
        let output_path: PathBuf = PathBuf::from(self.render_config.output_path());
        self.chart_service
            .generate_dual_axis_chart(&sampled, &output_path)
            .await?;

        info!("Chart written to {:?}", output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::service::chart_service_impl::*;

    /* 고정된 합성 시계열을 돌려주는 가짜 조회 서비스 */
    struct FixedQueryService {
        series: Vec<MetricSample>,
    }

    #[async_trait]
    impl MetricQueryService for FixedQueryService {
        async fn fetch_metric_history(&self) -> anyhow::Result<Vec<MetricSample>> {
            Ok(self.series.clone())
        }
    }

    #[tokio::test]
    async fn pipeline_produces_a_non_empty_image_from_synthetic_samples() {
        let base: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 11, 3, 12, 0, 0).unwrap();
        let series: Vec<MetricSample> = (0..3)
            .map(|i| {
                MetricSample::new(
                    base + ChronoDuration::minutes(i),
                    40 + i,
                    12_000 + i * 500,
                    1_000_000.0 + i as f64,
                )
            })
            .collect();

        let dir = tempfile::tempdir().unwrap();
        let output: PathBuf = dir.path().join("charts").join("platform-metrics.png");

        let mut render_config: ChartRenderConfig = ChartRenderConfig::default();
        render_config.output_path = output.to_string_lossy().to_string();

        let controller = MainController::new(
            FixedQueryService { series },
            ChartServiceImpl::new(render_config.clone()),
            render_config,
        );

        controller.main_task().await.unwrap();

        let metadata = std::fs::metadata(&output).unwrap();
        assert!(metadata.len() > 0);
    }
}
