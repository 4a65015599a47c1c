use async_trait::async_trait;
use crate::domain::{
    error::TriggerError,
    models::{IdToken, ServiceCredentials, WorkflowConfiguration},
};

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, credentials: &ServiceCredentials) -> Result<IdToken, TriggerError>;
}

#[async_trait]
pub trait WorkflowSubmitter: Send + Sync {
    async fn submit(&self, config: &WorkflowConfiguration, token: &IdToken) -> Result<(), TriggerError>;
}
