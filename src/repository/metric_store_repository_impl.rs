use crate::common::*;

use crate::model::configs::metric_store_config::*;
use crate::model::metric::metric_sample::*;

use crate::dto::metric_page::*;

use crate::traits::repository_traits::metric_store_repository::*;

#[derive(Debug, Clone)]
pub struct MetricStoreRepositoryImpl {
    client: Client,
    endpoint: String,
    service_key: String,
}

impl MetricStoreRepositoryImpl {
    #[doc = r#"
        검증된 저장소 설정을 주입받아 리포지토리를 생성하는 함수.

        PostgREST 는 테이블 하나가 곧 질의 가능한 리소스이므로, 조회할 컬럼과
        정렬 순서를 쿼리스트링에 고정해 엔드포인트를 미리 만들어 둔다.
    "#]
    pub fn new(store_config: &MetricStoreConfig) -> Result<Self, anyhow::Error> {
        let base_url: &str = store_config.base_url().trim_end_matches('/');
        let endpoint: String = format!(
            "{}/rest/v1/platform_metrics_minute?select=bucket,live_streams,total_viewers,total_market_cap&order=bucket.asc",
            base_url
        );

        let client: Client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("[MetricStoreRepositoryImpl->new] Failed to build HTTP client")?;

        Ok(MetricStoreRepositoryImpl {
            client,
            endpoint,
            service_key: store_config.service_key().to_string(),
        })
    }
}

#[async_trait]
impl MetricStoreRepository for MetricStoreRepositoryImpl {
    #[doc = "Function that EXECUTES one bounded-range read against the metric store"]
    async fn fetch_page(&self, offset: usize, limit: usize) -> anyhow::Result<MetricPage> {
        /* Range 헤더는 0-indexed, 양끝 포함 */
        let range_header: String = format!("{}-{}", offset, offset + limit - 1);

        let response = self
            .client
            .get(&self.endpoint)
            .header("apikey", &self.service_key)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.service_key),
            )
            .header(header::ACCEPT, "application/json")
            .header(header::RANGE, &range_header)
            .send()
            .await
            .with_context(|| {
                format!(
                    "[MetricStoreRepositoryImpl->fetch_page] Request failed for range {}",
                    range_header
                )
            })?;

        let status: StatusCode = response.status();

        /* 전체(200) 또는 부분(206) 응답만 허용하고 나머지는 즉시 실패 */
        if status != StatusCode::OK && status != StatusCode::PARTIAL_CONTENT {
            let error_body: String = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "[MetricStoreRepositoryImpl->fetch_page] Unexpected page status {} for range {}: {}",
                status,
                range_header,
                error_body
            ));
        }

        let rows: Vec<MetricSample> = response.json::<Vec<MetricSample>>().await.with_context(|| {
            format!(
                "[MetricStoreRepositoryImpl->fetch_page] Failed to deserialize rows for range {}",
                range_header
            )
        })?;

        Ok(MetricPage::new(rows, status.as_u16()))
    }
}
