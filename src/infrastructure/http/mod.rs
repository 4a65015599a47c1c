pub mod workflow_client;
