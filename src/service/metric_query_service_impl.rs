use crate::common::*;

use crate::traits::{
    repository_traits::metric_store_repository::*, service_traits::metric_query_service::*,
};

use crate::dto::metric_page::*;

use crate::enums::fetch_state::*;

use crate::model::metric::metric_sample::*;

#[doc = "한 번의 범위 요청으로 가져오는 최대 행 수"]
pub const CHUNK_SIZE: usize = 1000;

#[derive(Debug, new)]
pub struct MetricQueryServiceImpl<R: MetricStoreRepository> {
    metric_repo: R,
}

#[async_trait]
impl<R: MetricStoreRepository> MetricQueryService for MetricQueryServiceImpl<R> {
    #[doc = r#"
        저장소의 전체 지표 이력을 페이지 단위로 끌어와 하나의 시계열로 합쳐주는 함수.

        offset 0 부터 CHUNK_SIZE 씩 전진하며 범위 요청을 반복한다. 전체 행 수를
        미리 알 수 없는 저장소에서는 "짧은 페이지(0건 포함)가 곧 끝" 이 가장 싼
        종료 규칙이다. 짧은 페이지를 받으면 추가 요청 없이 바로 Done 으로 전이한다.

        페이지 하나라도 실패하면 부분 결과 없이 전체 조회가 실패한다. 재시도는 없다.

        # Returns
        * `Vec<MetricSample>` - bucket 오름차순 전체 이력. 0건이면 "no data" 오류.
    "#]
    async fn fetch_metric_history(&self) -> anyhow::Result<Vec<MetricSample>> {
        let mut rows: Vec<MetricSample> = Vec::new();
        let mut offset: usize = 0;
        let mut state: FetchState = FetchState::Fetching;

        while state == FetchState::Fetching {
            let page: MetricPage = self.metric_repo.fetch_page(offset, CHUNK_SIZE).await?;
            let page_len: usize = page.rows().len();

            info!(
                "Fetched metric page: offset={}, rows={}, status={}",
                offset,
                page_len,
                page.status_code()
            );

            rows.extend(page.into_rows());

            state = state.advance(page_len, CHUNK_SIZE);
            offset += CHUNK_SIZE;
        }

        if rows.is_empty() {
            return Err(anyhow!(
                "[MetricQueryServiceImpl->fetch_metric_history] No data returned from the metric store"
            ));
        }

        info!("Metric history fetch complete: {} rows", rows.len());

        Ok(rows)
    }
}
