use crate::common::*;

#[doc = r#"
    지표 저장소(Supabase PostgREST) 접속 정보.

    기존에는 Fetcher 내부에서 환경변수를 직접 조회했으나, 숨은 전역 상태를 없애기 위해
    구성 시점에 검증된 값을 명시적으로 주입받는 구조로 변경했다. 덕분에 Fetcher 는
    가짜 설정을 주입해서 독립적으로 테스트할 수 있다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct MetricStoreConfig {
    pub base_url: String,
    pub service_key: String,
}

impl MetricStoreConfig {
    #[doc = "환경변수에서 접속 정보를 읽어와 검증 후 반환하는 함수"]
    /// # Returns
    /// * Result<Self, anyhow::Error> - 필수 환경변수가 없거나 비어있으면 Err
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url: String = env::var("SUPABASE_URL").map_err(|_| {
            anyhow!("[MetricStoreConfig->from_env] 'SUPABASE_URL' must be set")
        })?;

        let service_key: String = env::var("SUPABASE_SERVICE_ROLE_KEY").map_err(|_| {
            anyhow!("[MetricStoreConfig->from_env] 'SUPABASE_SERVICE_ROLE_KEY' must be set")
        })?;

        if base_url.trim().is_empty() {
            return Err(anyhow!(
                "[MetricStoreConfig->from_env] 'SUPABASE_URL' must not be empty"
            ));
        }

        if service_key.trim().is_empty() {
            return Err(anyhow!(
                "[MetricStoreConfig->from_env] 'SUPABASE_SERVICE_ROLE_KEY' must not be empty"
            ));
        }

        Ok(MetricStoreConfig::new(base_url, service_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serial_test::serial;

    #[test]
    #[serial]
    fn missing_url_is_a_configuration_error() {
        env::remove_var("SUPABASE_URL");
        env::remove_var("SUPABASE_SERVICE_ROLE_KEY");

        let error = MetricStoreConfig::from_env().unwrap_err();
        assert!(error.to_string().contains("'SUPABASE_URL' must be set"));
    }

    #[test]
    #[serial]
    fn empty_service_key_is_a_configuration_error() {
        env::set_var("SUPABASE_URL", "https://example.supabase.co");
        env::set_var("SUPABASE_SERVICE_ROLE_KEY", "   ");

        let error = MetricStoreConfig::from_env().unwrap_err();
        assert!(
            error
                .to_string()
                .contains("'SUPABASE_SERVICE_ROLE_KEY' must not be empty")
        );

        env::remove_var("SUPABASE_URL");
        env::remove_var("SUPABASE_SERVICE_ROLE_KEY");
    }

    #[test]
    #[serial]
    fn valid_environment_builds_a_config() {
        env::set_var("SUPABASE_URL", "https://example.supabase.co");
        env::set_var("SUPABASE_SERVICE_ROLE_KEY", "service-role-key");

        let config: MetricStoreConfig = MetricStoreConfig::from_env().unwrap();
        assert_eq!(config.base_url(), "https://example.supabase.co");
        assert_eq!(config.service_key(), "service-role-key");

        env::remove_var("SUPABASE_URL");
        env::remove_var("SUPABASE_SERVICE_ROLE_KEY");
    }
}
