pub mod cognito;
pub mod http;
