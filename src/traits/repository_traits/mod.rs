pub mod metric_store_repository;
