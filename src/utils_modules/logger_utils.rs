use crate::common::*;

#[doc = "로그 출력 포맷 지정 함수"]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{:?}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().id(),
        record.args()
    )
}

#[doc = r#"
    전역 로거를 설정해주는 함수.

    `logs/` 디렉토리 아래에 일 단위로 로테이션되는 로그 파일을 남기고,
    Info 레벨 이상은 stdout 으로도 복제한다. 로그 파일은 최근 7개까지만 보관한다.
"#]
pub fn set_global_logger() {
    let handle = Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("[set_global_logger] Invalid log spec: {:?}", e))
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .duplicate_to_stdout(Duplicate::Info)
        .format(log_format)
        .start()
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e));

    /* 핸들이 drop 되면 로거가 종료되므로 프로세스 수명 동안 유지한다 */
    std::mem::forget(handle);
}
