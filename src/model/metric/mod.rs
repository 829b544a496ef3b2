pub mod metric_sample;
