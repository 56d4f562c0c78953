use super::api::ApiClient;
use super::error::ApiError;
use tracing::debug;

/// Gate controlling the certification affordance in the drawer title.
#[derive(Clone)]
pub struct CertificationService {
    api: ApiClient,
}

impl CertificationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// True when the most recent attempt meets the pass threshold. Remote
    /// failure is an `Err`: the caller shows the gate as not passed plus
    /// an inline notice, never a silent swallow.
    pub async fn check_passed(&self, certification: &str) -> Result<bool, ApiError> {
        let result = self.api.highest_score(certification).await?;
        let passed = result.passed();
        debug!(certification, passed, "certification gate evaluated");
        Ok(passed)
    }
}
