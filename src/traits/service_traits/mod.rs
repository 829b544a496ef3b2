pub mod chart_service;
pub mod metric_query_service;
