use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use tracing::{debug, error, info, warn};
use crate::{
    application::trigger_service::TriggerService,
    domain::{error::TriggerError, models::TriggerNotification},
};

/// Reads the created object from the first record of an S3 notification.
pub fn notification_from_event(event: &S3Event) -> Result<TriggerNotification, TriggerError> {
    let record = event
        .records
        .first()
        .ok_or_else(|| TriggerError::MalformedEvent("no records in S3 event".to_string()))?;

    if event.records.len() > 1 {
        warn!("S3 event carries {} records, only the first is processed", event.records.len());
    }

    let bucket = record
        .s3
        .bucket
        .name
        .clone()
        .ok_or_else(|| TriggerError::MalformedEvent("record has no bucket name".to_string()))?;
    let raw_key = record
        .s3
        .object
        .key
        .as_deref()
        .ok_or_else(|| TriggerError::MalformedEvent("record has no object key".to_string()))?;

    Ok(TriggerNotification {
        bucket,
        key: decode_key(raw_key)?,
    })
}

/// S3 notification keys are form-encoded: `+` for spaces, `%XX` for the rest.
fn decode_key(raw: &str) -> Result<String, TriggerError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|key| key.into_owned())
        .map_err(|e| TriggerError::MalformedEvent(format!("undecodable object key {raw:?}: {e}")))
}

pub async fn function_handler(
    event: LambdaEvent<S3Event>,
    service: &TriggerService,
) -> Result<(), Error> {
    debug!("Received S3 event with {} records", event.payload.records.len());

    let notification = notification_from_event(&event.payload).map_err(|e| {
        error!(records = ?event.payload.records, "failed to read S3 event: {}", e);
        e
    })?;
    info!("Processing file: s3://{}/{}", notification.bucket, notification.key);

    service.process(&notification).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        models::{IdToken, ServiceCredentials, WorkflowConfiguration},
        ports::{IdentityProvider, WorkflowSubmitter},
    };
    use async_trait::async_trait;
    use lambda_runtime::Context;
    use serde_json::{json, Value};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn record(bucket: Value, key: Value) -> Value {
        json!({
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "awsRegion": "us-east-1",
            "eventTime": "2024-01-01T00:00:00.000Z",
            "eventName": "ObjectCreated:Put",
            "userIdentity": { "principalId": "AWS:EXAMPLE" },
            "requestParameters": { "sourceIPAddress": "127.0.0.1" },
            "responseElements": {
                "x-amz-request-id": "C3D13FE58DE4C810",
                "x-amz-id-2": "FMyUVURIY8/IgAtTv8xRjskZQpcIZ9KG4V5Wp6S7S/JRWeUWerMUE5JgHvANOjpD"
            },
            "s3": {
                "s3SchemaVersion": "1.0",
                "configurationId": "upload",
                "bucket": {
                    "name": bucket,
                    "ownerIdentity": { "principalId": "EXAMPLE" },
                    "arn": "arn:aws:s3:::videos"
                },
                "object": {
                    "key": key,
                    "size": 1024,
                    "eTag": "d41d8cd98f00b204e9800998ecf8427e",
                    "sequencer": "0055AED6DCD90281E5"
                }
            }
        })
    }

    fn event(records: Vec<Value>) -> S3Event {
        serde_json::from_value(json!({ "Records": records })).unwrap()
    }

    #[test]
    fn reads_first_record() {
        let event = event(vec![
            record(json!("videos"), json!("clip1.mp4")),
            record(json!("videos"), json!("clip2.mp4")),
        ]);

        let notification = notification_from_event(&event).unwrap();

        assert_eq!(
            notification,
            TriggerNotification { bucket: "videos".into(), key: "clip1.mp4".into() }
        );
    }

    #[test]
    fn decodes_form_encoded_keys() {
        let event = event(vec![record(json!("videos"), json!("raw/My+Holiday%282024%29.mp4"))]);

        let notification = notification_from_event(&event).unwrap();

        assert_eq!(notification.key, "raw/My Holiday(2024).mp4");
    }

    #[test]
    fn rejects_events_without_object() {
        let cases = [
            event(vec![]),
            event(vec![record(Value::Null, json!("clip1.mp4"))]),
            event(vec![record(json!("videos"), Value::Null)]),
            event(vec![record(json!("videos"), json!("bad%FF%FE.mp4"))]),
        ];

        for case in cases {
            let err = notification_from_event(&case).unwrap_err();
            assert!(matches!(err, TriggerError::MalformedEvent(_)), "{err:?}");
        }
    }

    #[derive(Default)]
    struct CountingPorts {
        auth_calls: AtomicUsize,
        submit_calls: AtomicUsize,
    }

    #[async_trait]
    impl IdentityProvider for CountingPorts {
        async fn authenticate(&self, _: &ServiceCredentials) -> Result<IdToken, TriggerError> {
            self.auth_calls.fetch_add(1, Ordering::SeqCst);
            Ok(IdToken::new("tok123"))
        }
    }

    #[async_trait]
    impl WorkflowSubmitter for CountingPorts {
        async fn submit(&self, _: &WorkflowConfiguration, _: &IdToken) -> Result<(), TriggerError> {
            self.submit_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn service(ports: &Arc<CountingPorts>) -> TriggerService {
        TriggerService::new(
            ports.clone(),
            ports.clone(),
            ServiceCredentials {
                user_pool_id: "pool".into(),
                client_id: "client".into(),
                username: "svc".into(),
                password: "secret".into(),
            },
        )
    }

    #[tokio::test]
    async fn handler_starts_one_workflow() {
        let ports = Arc::new(CountingPorts::default());
        let payload = event(vec![record(json!("videos"), json!("clip1.mp4"))]);

        function_handler(LambdaEvent::new(payload, Context::default()), &service(&ports))
            .await
            .unwrap();

        assert_eq!(ports.auth_calls.load(Ordering::SeqCst), 1);
        assert_eq!(ports.submit_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn malformed_event_fails_before_any_call() {
        let ports = Arc::new(CountingPorts::default());

        let result =
            function_handler(LambdaEvent::new(event(vec![]), Context::default()), &service(&ports)).await;

        assert!(result.is_err());
        assert_eq!(ports.auth_calls.load(Ordering::SeqCst), 0);
        assert_eq!(ports.submit_calls.load(Ordering::SeqCst), 0);
    }
}
