use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::{error::DisplayErrorContext, types::AuthFlowType, Client};
use tracing::{debug, error};
use crate::domain::{
    error::TriggerError,
    models::{IdToken, ServiceCredentials},
    ports::IdentityProvider,
};

pub struct CognitoIdentityProvider {
    client: Client,
}

impl CognitoIdentityProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for CognitoIdentityProvider {
    #[tracing::instrument(skip_all, fields(user_pool_id = %credentials.user_pool_id))]
    async fn authenticate(&self, credentials: &ServiceCredentials) -> Result<IdToken, TriggerError> {
        debug!("Initiating admin auth for {}", credentials.username);
        let response = self.client
            .admin_initiate_auth()
            .user_pool_id(&credentials.user_pool_id)
            .client_id(&credentials.client_id)
            .auth_flow(AuthFlowType::AdminNoSrpAuth)
            .auth_parameters("USERNAME", &credentials.username)
            .auth_parameters("PASSWORD", &credentials.password)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!("Cognito rejected authentication: {}", message);
                TriggerError::Authentication(message)
            })?;

        response
            .authentication_result()
            .and_then(|result| result.id_token())
            .map(IdToken::new)
            .ok_or_else(|| {
                error!("Cognito response carried no id token (challenge: {:?})", response.challenge_name());
                TriggerError::MissingIdToken
            })
    }
}
