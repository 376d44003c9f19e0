use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sqs::Client;
use aws_sdk_sqs::config::Credentials;
use aws_sdk_sqs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use std::time::Duration;
use tracing::info;

use crate::api_types::DeleteRequest;
use crate::config::AwsConfig;

/// Adapter around the remote SQS delete-message operation.
///
/// Each call builds a fresh client from the process-wide AWS settings; no
/// client state is shared between requests.
pub struct DeleteService {
    aws: AwsConfig,
}

impl DeleteService {
    pub fn new(aws: AwsConfig) -> Self {
        Self { aws }
    }

    /// Construct the queue URL from the caller-supplied endpoint, account id
    /// and queue name. A leading `https://` on the endpoint is stripped
    /// first, so the result is the same whether or not the caller includes
    /// the scheme.
    pub fn build_queue_url(sqs_endpoint: &str, id_aws: &str, queue_name: &str) -> String {
        let endpoint = sqs_endpoint
            .strip_prefix("https://")
            .unwrap_or(sqs_endpoint);
        format!("https://{}/{}/{}", endpoint, id_aws, queue_name)
    }

    async fn client(&self) -> Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.aws.region.clone()))
            .retry_config(RetryConfig::disabled())
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(self.aws.request_timeout_seconds))
                    .build(),
            );

        // Static credentials when both keys are configured, otherwise fall
        // through to the SDK default provider chain.
        if let (Some(access_key), Some(secret_key)) =
            (&self.aws.access_key_id, &self.aws.secret_access_key)
        {
            loader = loader.credentials_provider(Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                None,
                None,
                "sqs-delete-config",
            ));
        }

        if let Some(endpoint_url) = &self.aws.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        Client::new(&loader.load().await)
    }

    /// Delete one message identified by its receipt handle. Returns the
    /// queue URL the delete was issued against.
    pub async fn delete_message(&self, request: &DeleteRequest) -> Result<String, RemoteError> {
        let queue_url =
            Self::build_queue_url(&request.sqs_endpoint, &request.id_aws, &request.queue_name);

        info!("Attempting to delete message from queue: {}", queue_url);

        let client = self.client().await;
        client
            .delete_message()
            .queue_url(queue_url.as_str())
            .receipt_handle(request.receipt_handle.as_str())
            .send()
            .await
            .map_err(RemoteError::from_sdk)?;

        info!("Message successfully deleted from queue: {}", queue_url);
        Ok(queue_url)
    }

    /// Lightweight connectivity probe: list at most one queue. Returns the
    /// configured region on success.
    pub async fn test_connection(&self) -> Result<String, RemoteError> {
        let client = self.client().await;
        client
            .list_queues()
            .max_results(1)
            .send()
            .await
            .map_err(RemoteError::from_sdk)?;

        Ok(self.aws.region.clone())
    }
}

/// Any failure originating from the remote SQS call. The HTTP layer maps
/// every kind to a 500 with the message embedded verbatim; the kind is kept
/// so callers inside the crate can discriminate later without changing the
/// external contract.
#[derive(Debug, Clone)]
pub struct RemoteError {
    pub kind: String,
    pub message: String,
}

impl RemoteError {
    fn from_sdk<E>(err: SdkError<E>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        let kind = match &err {
            SdkError::ServiceError(_) => err
                .as_service_error()
                .and_then(|e| e.code())
                .unwrap_or("ServiceError")
                .to_string(),
            SdkError::TimeoutError(_) => "TimeoutError".to_string(),
            SdkError::DispatchFailure(_) => "DispatchFailure".to_string(),
            SdkError::ResponseError(_) => "ResponseError".to_string(),
            SdkError::ConstructionFailure(_) => "ConstructionFailure".to_string(),
            _ => "Unknown".to_string(),
        };

        Self {
            kind,
            message: DisplayErrorContext(&err).to_string(),
        }
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RemoteError {}
