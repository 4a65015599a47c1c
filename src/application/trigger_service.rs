use std::sync::Arc;
use tracing::{info, debug, error};
use crate::domain::{
    error::TriggerError,
    models::{build_workflow_config, ServiceCredentials, TriggerNotification},
    ports::{IdentityProvider, WorkflowSubmitter},
};

pub struct TriggerService {
    identity_provider: Arc<dyn IdentityProvider>,
    workflow_submitter: Arc<dyn WorkflowSubmitter>,
    credentials: ServiceCredentials,
}

impl TriggerService {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        workflow_submitter: Arc<dyn WorkflowSubmitter>,
        credentials: ServiceCredentials,
    ) -> Self {
        Self {
            identity_provider,
            workflow_submitter,
            credentials,
        }
    }

    /// Starts the media-analysis workflow for a newly created object.
    ///
    /// Any failure is logged together with the notification and returned
    /// wrapped with the object's location.
    #[tracing::instrument(skip(self), fields(bucket = %notification.bucket, key = %notification.key))]
    pub async fn process(&self, notification: &TriggerNotification) -> Result<(), TriggerError> {
        self.run(notification).await.map_err(|e| {
            error!(?notification, "failed to start workflow for s3://{}/{}: {}",
                notification.bucket, notification.key, e);
            e.for_object(&notification.bucket, &notification.key)
        })
    }

    async fn run(&self, notification: &TriggerNotification) -> Result<(), TriggerError> {
        // Step 1: Build workflow configuration
        debug!("Step 1: Building workflow configuration");
        let config = build_workflow_config(&notification.bucket, &notification.key);

        // Step 2: Authenticate
        debug!("Step 2: Authenticating as {}", self.credentials.username);
        let token = self.identity_provider.authenticate(&self.credentials).await?;
        debug!("Obtained identity token");

        // Step 3: Submit
        debug!("Step 3: Submitting workflow {}", config.name);
        self.workflow_submitter.submit(&config, &token).await?;

        info!("Started workflow {} for s3://{}/{}", config.name, notification.bucket, notification.key);
        Ok(())
    }
}
