/*
[INPUT]:  None (one-shot queries)
[OUTPUT]: Backend provider configuration and liveness status
[POS]:    HTTP layer - config and health endpoints (no lifecycle)
[UPDATE]: When the backend config payload changes
*/

use crate::http::{Result, StudycastClient};
use crate::types::{BackendConfig, HealthStatus};
use reqwest::Method;

impl StudycastClient {
    /// Fetch provider defaults and available local models
    ///
    /// GET /api/config
    pub async fn fetch_config(&self) -> Result<BackendConfig> {
        let builder = self.request(Method::GET, "/api/config")?;
        self.send_json(builder).await
    }

    /// Liveness probe
    ///
    /// GET /api/health
    pub async fn health(&self) -> Result<HealthStatus> {
        let builder = self.request(Method::GET, "/api/health")?;
        self.send_json(builder).await
    }
}
