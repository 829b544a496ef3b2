pub mod metric_page;
