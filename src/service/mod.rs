pub mod chart_service_impl;
pub mod metric_query_service_impl;
