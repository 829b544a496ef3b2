use crate::common::*;

#[doc = "차트 제목에 쓰는 사람 친화적 UTC 시각 문자열을 반환하는 함수"]
pub fn format_utc_label(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[doc = "플롯 구간의 길이에 따라 X축 눈금용 축약 포맷을 골라 문자열로 변환하는 함수"]
/// # Arguments
/// * `time` - 눈금 시각
/// * `span` - 플롯 전체 구간의 길이
pub fn format_axis_tick(time: &DateTime<Utc>, span: ChronoDuration) -> String {
    if span <= ChronoDuration::days(1) {
        time.format("%H:%M").to_string()
    } else {
        time.format("%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn utc_label_matches_title_format() {
        let label: String = format_utc_label(utc(2025, 11, 3, 9, 5));
        assert_eq!(label, "2025-11-03 09:05 UTC");
    }

    #[test]
    fn axis_tick_is_time_only_within_one_day() {
        let tick: String = format_axis_tick(&utc(2025, 11, 3, 9, 5), ChronoDuration::hours(6));
        assert_eq!(tick, "09:05");
    }

    #[test]
    fn axis_tick_includes_date_beyond_one_day() {
        let tick: String = format_axis_tick(&utc(2025, 11, 3, 9, 5), ChronoDuration::days(3));
        assert_eq!(tick, "11-03 09:05");
    }
}
