use crate::common::*;

#[doc = r#"
    차트 렌더링 설정 파일(TOML)의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `CHART_CONFIG_PATH` 환경변수를 통해 TOML 형식의 렌더링 설정 파일 경로를 지정받는다.
    이 파일에는 다운샘플링 상한, 이미지 크기, 출력 경로 등이 포함되어 있다.
    필수 설정이 아니므로 환경변수가 없으면 None 을 반환하고, 이후 기본값으로 동작한다.
    once_lazy를 사용하여 첫 접근 시에만 초기화되며, 이후에는 캐시된 값을 재사용한다.

    # 예상 파일 내용
    차트 렌더링 설정 정보 (TOML 형식)
"#]
pub static CHART_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| env::var("CHART_CONFIG_PATH").ok());
