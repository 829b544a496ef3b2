use crate::common::*;

use crate::model::metric::metric_sample::*;

#[doc = "저장소가 한 번의 범위 요청에 대해 돌려준 응답 묶음 - 행 목록과 응답 상태코드"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct MetricPage {
    pub rows: Vec<MetricSample>,
    pub status_code: u16,
}

impl MetricPage {
    pub fn into_rows(self) -> Vec<MetricSample> {
        self.rows
    }
}
