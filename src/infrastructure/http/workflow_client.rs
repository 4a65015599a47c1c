use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, error, info};
use crate::domain::{
    error::TriggerError,
    models::{IdToken, WorkflowConfiguration},
    ports::WorkflowSubmitter,
};

const EXECUTION_PATH: &str = "workflow/execution";

pub struct HttpWorkflowClient {
    client: Client,
    base_url: String,
}

impl HttpWorkflowClient {
    /// `base_url` must end with `/`.
    pub fn new(base_url: String) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn execution_url(&self) -> String {
        format!("{}{}", self.base_url, EXECUTION_PATH)
    }
}

#[async_trait]
impl WorkflowSubmitter for HttpWorkflowClient {
    #[tracing::instrument(skip_all, fields(workflow = %config.name))]
    async fn submit(&self, config: &WorkflowConfiguration, token: &IdToken) -> Result<(), TriggerError> {
        let url = self.execution_url();
        let body = serde_json::to_string(config)?;
        debug!("POST {} ({} bytes)", url, body.len());

        let response = self.client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, token.as_str())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("Workflow API unreachable at {}: {}", url, e);
                TriggerError::Submission(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Workflow API returned {}: {}", status, body);
            return Err(TriggerError::Rejected { status: status.as_u16(), body });
        }

        info!("Workflow execution accepted with status {}", status);
        Ok(())
    }
}
