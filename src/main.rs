use std::sync::Arc;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use aws_lambda_events::event::s3::S3Event;
use mie_workflow_trigger::{
    application::trigger_service::TriggerService,
    config::Config,
    infrastructure::{cognito::identity_provider::CognitoIdentityProvider, http::workflow_client::HttpWorkflowClient},
    lambda_handler::function_handler,
};
use tracing::{info, debug};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("mie_workflow_trigger=debug".parse()?)
            .add_directive("aws_sdk=warn".parse()?)
            .add_directive("aws_config=warn".parse()?))
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .init();

    info!("Starting workflow trigger");
    let config = Config::from_env()?;
    debug!("Workflow endpoint: {}, user pool: {}", config.workflow_endpoint, config.credentials.user_pool_id);

    let mut aws_config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest());

    // Configure endpoint for LocalStack if AWS_ENDPOINT_URL is set
    if let Some(endpoint_url) = &config.aws_endpoint_url {
        info!("Using custom AWS endpoint: {}", endpoint_url);
        aws_config_builder = aws_config_builder.endpoint_url(endpoint_url);
    }

    let aws_config = aws_config_builder.load().await;
    debug!("AWS region: {:?}", aws_config.region());

    let identity_provider = Arc::new(CognitoIdentityProvider::new(
        aws_sdk_cognitoidentityprovider::Client::new(&aws_config),
    ));
    let workflow_client = Arc::new(HttpWorkflowClient::new(config.workflow_endpoint.clone()));
    let service = TriggerService::new(identity_provider, workflow_client, config.credentials);

    run(service_fn(|event: LambdaEvent<S3Event>| function_handler(event, &service))).await
}
