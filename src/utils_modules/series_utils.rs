use crate::common::*;

use crate::model::metric::metric_sample::*;

#[doc = r#"
    차트 캔버스 폭에 맞도록 시계열을 고정 간격(stride) 추출 방식으로 줄여주는 순수 함수.

    `len <= max_points` 이면 입력을 그대로 반환한다. 그 외에는
    `stride = ceil(len / max_points)` 를 계산하고, 0부터 시작해 인덱스가 stride 의
    배수인 표본만 남긴다. 평균이나 보간을 하지 않는 단순 추출이므로 순서와 분포는
    유지되지만, `(len - 1) % stride != 0` 인 경우 마지막 표본이 떨어져 나가
    차트 오른쪽 끝이 실제 마지막 시각보다 이를 수 있다. 호환성을 위해 이 규칙을
    그대로 유지한다.

    # Arguments
    * `series` - bucket 오름차순으로 정렬된 시계열
    * `max_points` - 출력 표본 수 상한 (0 이면 전제조건 위반)

    # Returns
    * `Vec<MetricSample>` - 최대 `max_points` 개의 대표 표본
"#]
pub fn downsample(series: Vec<MetricSample>, max_points: usize) -> Vec<MetricSample> {
    assert!(
        max_points > 0,
        "[downsample] 'max_points' must be greater than 0"
    );

    if series.len() <= max_points {
        return series;
    }

    let stride: usize = series.len().div_ceil(max_points);

    series
        .into_iter()
        .enumerate()
        .filter(|(index, _)| index % stride == 0)
        .map(|(_, sample)| sample)
        .collect()
}
