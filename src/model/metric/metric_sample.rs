use crate::common::*;

#[doc = "플랫폼 지표 테이블의 1분 집계 행 하나를 나타내는 구조체"]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct MetricSample {
    pub bucket: DateTime<Utc>,
    pub live_streams: i64,
    pub total_viewers: i64,
    /* 조회는 하지만 현재 차트에는 그리지 않는 값 */
    pub total_market_cap: f64,
}
