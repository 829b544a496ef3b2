use crate::common::*;

use crate::env_configuration::env_config::*;
use crate::utils_modules::io_utils::*;

#[doc = "차트 렌더링 설정 정보"]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ChartRenderConfig {
    pub max_points: usize,
    pub image_width: u32,
    pub image_height: u32,
    pub output_path: String,
}

impl Default for ChartRenderConfig {
    fn default() -> Self {
        ChartRenderConfig {
            max_points: 720,
            image_width: 1600,
            image_height: 900,
            output_path: String::from("dashboard/public/charts/platform-metrics.png"),
        }
    }
}

impl ChartRenderConfig {
    #[doc = "CHART_CONFIG_PATH 가 지정된 경우 TOML 파일에서 설정을 읽어오고, 없으면 기본값을 사용하는 함수"]
    pub fn load() -> anyhow::Result<Self> {
        let config: ChartRenderConfig = match CHART_CONFIG_PATH.as_deref() {
            Some(path) => read_toml_from_file::<ChartRenderConfig>(path)?,
            None => ChartRenderConfig::default(),
        };

        if config.max_points == 0 {
            return Err(anyhow!(
                "[ChartRenderConfig->load] 'max_points' must be greater than 0"
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config: ChartRenderConfig = ChartRenderConfig::default();

        assert_eq!(config.max_points, 720);
        assert_eq!(config.image_width, 1600);
        assert_eq!(config.image_height, 900);
        assert_eq!(
            config.output_path,
            "dashboard/public/charts/platform-metrics.png"
        );
    }
}
