pub mod chart_render_config;
pub mod metric_store_config;
