use crate::common::*;
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::*;

use crate::model::configs::chart_render_config::*;
use crate::model::metric::metric_sample::*;

use crate::utils_modules::time_utils::*;

/* 두 축의 색을 고정해 이중 축을 혼동 없이 읽을 수 있게 한다 */
const STREAM_COLOR: RGBColor = RGBColor(31, 119, 180);
const VIEWER_COLOR: RGBColor = RGBColor(255, 127, 14);

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    render_config: ChartRenderConfig,
}

#[doc = "Helper function to determine Y-axis range with padding"]
fn calculate_y_range(values: &[i64]) -> (i64, i64) {
    if values.is_empty() {
        return (0, 100);
    }

    let min_val: i64 = *values.iter().min().unwrap_or(&0);
    let max_val: i64 = *values.iter().max().unwrap_or(&100);

    let padding: i64 = ((max_val - min_val) as f64 * 0.1).max(1.0) as i64;

    let y_min: i64 = (min_val - padding).max(0);
    let y_max: i64 = max_val + padding;

    (y_min, y_max)
}

#[doc = "눈금 숫자에 천 단위 구분 쉼표를 넣어주는 함수"]
fn format_thousands(value: i64) -> String {
    let digits: String = value.to_string();
    let mut result: String = String::new();
    let mut count: i32 = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

#[doc = "플롯 구간의 양 끝 UTC 시각을 담은 차트 제목을 만들어주는 함수"]
pub fn build_chart_title(series: &[MetricSample]) -> String {
    let start_label: String = format_utc_label(*series[0].bucket());
    let end_label: String = format_utc_label(*series[series.len() - 1].bucket());
    format!("Platform Metrics ({} → {})", start_label, end_label)
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    #[doc = r#"
        다운샘플링까지 끝난 시계열을 이중 축 라인 차트 PNG 로 그려주는 함수.

        왼쪽 축은 라이브 스트림 수, 오른쪽 축은 총 시청자 수를 나타내며,
        축 설명과 눈금 색을 각 시리즈 색에 맞춘다. 범례는 두 축의 항목을
        하나의 박스로 합친다. total_market_cap 은 조회만 하고 그리지 않는다.

        # Arguments
        * `series` - 시간 오름차순의 비어있지 않은 시계열 (비어있으면 파일을 만들지 않고 실패)
        * `output_path` - PNG 저장 경로 (기존 파일은 덮어씀)
    "#]
    async fn generate_dual_axis_chart(
        &self,
        series: &[MetricSample],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        if series.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_dual_axis_chart] Cannot generate chart with empty series"
            ));
        }

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = build_chart_title(series);
        let image_size: (u32, u32) = (
            *self.render_config.image_width(),
            *self.render_config.image_height(),
        );

        let times: Vec<DateTime<Utc>> = series.iter().map(|s| *s.bucket()).collect();
        let live_streams: Vec<i64> = series.iter().map(|s| *s.live_streams()).collect();
        let total_viewers: Vec<i64> = series.iter().map(|s| *s.total_viewers()).collect();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                let mut x_start: DateTime<Utc> = times[0];
                let mut x_end: DateTime<Utc> = times[times.len() - 1];

                /* 표본이 하나뿐이면 구간이 0이 되므로 양쪽으로 1분씩 벌려준다 */
                if x_start == x_end {
                    x_start -= ChronoDuration::minutes(1);
                    x_end += ChronoDuration::minutes(1);
                }

                let span: ChronoDuration = x_end - x_start;

                let (streams_min, streams_max) = calculate_y_range(&live_streams);
                let (viewers_min, viewers_max) = calculate_y_range(&total_viewers);

                let root = BitMapBackend::new(&output_path_str, image_size).into_drawing_area();
                root.fill(&WHITE)?;

                let mut chart = ChartBuilder::on(&root)
                    .caption(&title, ("sans-serif", 36).into_font().color(&BLACK))
                    .margin(30)
                    .x_label_area_size(70)
                    .y_label_area_size(90)
                    .right_y_label_area_size(90)
                    .build_cartesian_2d(x_start..x_end, streams_min..streams_max)?
                    .set_secondary_coord(x_start..x_end, viewers_min..viewers_max);

                let grid_color: RGBColor = RGBColor(210, 210, 210);

                chart
                    .configure_mesh()
                    .x_desc("Timestamp (UTC)")
                    .y_desc("Live Streams")
                    .x_labels(times.len().min(10))
                    .y_labels(10)
                    .disable_x_mesh()
                    .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
                    .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(2))
                    .axis_desc_style(("sans-serif", 22).into_font().color(&STREAM_COLOR))
                    .x_label_style(("sans-serif", 16).into_font().color(&BLACK))
                    .y_label_style(("sans-serif", 16).into_font().color(&STREAM_COLOR))
                    .x_label_formatter(&|x| format_axis_tick(x, span))
                    .y_label_formatter(&|y| format_thousands(*y))
                    .draw()?;

                chart
                    .configure_secondary_axes()
                    .y_desc("Total Viewers")
                    .axis_desc_style(("sans-serif", 22).into_font().color(&VIEWER_COLOR))
                    .label_style(("sans-serif", 16).into_font().color(&VIEWER_COLOR))
                    .y_label_formatter(&|y| format_thousands(*y))
                    .draw()?;

                chart
                    .draw_series(LineSeries::new(
                        times.iter().copied().zip(live_streams.iter().copied()),
                        ShapeStyle::from(&STREAM_COLOR).stroke_width(2),
                    ))?
                    .label("Live Streams")
                    .legend(|(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], STREAM_COLOR.stroke_width(2))
                    });

                chart
                    .draw_secondary_series(LineSeries::new(
                        times.iter().copied().zip(total_viewers.iter().copied()),
                        ShapeStyle::from(&VIEWER_COLOR).stroke_width(2),
                    ))?
                    .label("Total Viewers")
                    .legend(|(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], VIEWER_COLOR.stroke_width(2))
                    });

                /* 두 축의 범례를 하나의 박스로 합친다 */
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(WHITE.mix(0.85))
                    .border_style(RGBColor(120, 120, 120))
                    .label_font(("sans-serif", 18))
                    .draw()?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_dual_axis_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->generate_dual_axis_chart] drawing/present failed")?;

        info!("Dual-axis chart generated successfully: {:?}", output_path);

        Ok(())
    }
}
