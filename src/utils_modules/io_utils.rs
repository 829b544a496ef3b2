use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 적절한 오류 반환

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read file: {}", file_path))?;
    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] Failed to parse TOML: {}", file_path))?;

    Ok(toml)
}
