use crate::domain::{error::TriggerError, models::ServiceCredentials};

pub const USER_POOL_ID_VAR: &str = "UserPoolId";
pub const POOL_CLIENT_ID_VAR: &str = "PoolClientId";
pub const USER_NAME_VAR: &str = "UserName";
pub const USER_PWD_VAR: &str = "UserPwd";
pub const WORKFLOW_ENDPOINT_VAR: &str = "WorkflowEndpoint";
pub const AWS_ENDPOINT_URL_VAR: &str = "AWS_ENDPOINT_URL";

/// Process configuration, read once at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service login for the identity pool.
    pub credentials: ServiceCredentials,

    /// Base URL of the workflow API, always ending in `/`.
    pub workflow_endpoint: String,

    /// Overrides the AWS endpoint for local emulation.
    pub aws_endpoint_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, TriggerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, TriggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| TriggerError::Config(format!("{name} must be provided")))
        };

        let credentials = ServiceCredentials {
            user_pool_id: required(USER_POOL_ID_VAR)?,
            client_id: required(POOL_CLIENT_ID_VAR)?,
            username: required(USER_NAME_VAR)?,
            password: required(USER_PWD_VAR)?,
        };

        let mut workflow_endpoint = required(WORKFLOW_ENDPOINT_VAR)?;
        if !workflow_endpoint.ends_with('/') {
            workflow_endpoint.push('/');
        }

        let aws_endpoint_url = lookup(AWS_ENDPOINT_URL_VAR).filter(|value| !value.is_empty());

        Ok(Config {
            credentials,
            workflow_endpoint,
            aws_endpoint_url,
        })
    }
}
