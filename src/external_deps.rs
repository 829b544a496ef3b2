pub use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::{Client, StatusCode, header};
pub use tokio::time::Duration;
