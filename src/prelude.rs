pub use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{Getters, Setters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::Value;
