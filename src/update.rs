use std::time::Duration;

use thiserror::Error;

/// Crate name used for registry lookups and upgrade suggestions.
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

const CRATES_IO_API: &str = "https://crates.io/api/v1";
const REGISTRY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum UpdateError {
    /// The registry could not be reached or returned an unusable answer.
    #[error("could not determine the latest published version: {0}")]
    Remote(String),
}

/// Result of comparing the installed version against the registry.
///
/// Versions are compared for exact string equality only. A remote string
/// that differs from the local one is a [`UpdateStatus::Mismatch`] even if
/// it would order as older.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    UpToDate { version: String },
    Mismatch { installed: String, latest: String },
}

/// Source of the latest published version of this tool.
///
/// Injectable so tests can substitute a fake for the live registry.
#[allow(async_fn_in_trait)]
pub trait VersionSource {
    async fn latest_version(&self) -> Result<String, UpdateError>;
}

/// Version source backed by the crates.io registry API.
pub struct CratesIo {
    base_url: String,
}

impl CratesIo {
    pub fn new() -> Self {
        Self {
            base_url: CRATES_IO_API.to_string(),
        }
    }
}

impl Default for CratesIo {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSource for CratesIo {
    async fn latest_version(&self) -> Result<String, UpdateError> {
        let url = format!("{}/crates/{}", self.base_url, CRATE_NAME);

        let client = reqwest::Client::builder()
            .timeout(REGISTRY_TIMEOUT)
            .build()
            .map_err(|e| UpdateError::Remote(e.to_string()))?;

        let response = client
            .get(&url)
            .header("User-Agent", concat!("claude-spec-chain-cli/", env!("CARGO_PKG_VERSION")))
            .send()
            .await
            .map_err(|e| UpdateError::Remote(e.to_string()))?;

        if !response.status().is_success() {
            return Err(UpdateError::Remote(format!(
                "registry returned HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| UpdateError::Remote(e.to_string()))?;

        json["crate"]["max_version"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| UpdateError::Remote("missing max_version in registry response".to_string()))
    }
}

/// Get the locally installed version from package metadata.
pub fn installed_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Compare the installed version string against the latest published one.
pub async fn check<S: VersionSource>(source: &S) -> Result<UpdateStatus, UpdateError> {
    let installed = installed_version();
    let latest = source.latest_version().await?;
    let latest = latest.trim();

    if installed == latest {
        Ok(UpdateStatus::UpToDate {
            version: installed.to_string(),
        })
    } else {
        Ok(UpdateStatus::Mismatch {
            installed: installed.to_string(),
            latest: latest.to_string(),
        })
    }
}
