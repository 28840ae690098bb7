use crate::core::{ConfigProvider, MessagePublisher, PublishReceipt, PublishRequest};
use crate::utils::error::{NotifierError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::config::Region;
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_sns::types::MessageAttributeValue;
use aws_sdk_sns::Client as SnsClient;

/// Builds the SNS client once per process from the default AWS provider chain,
/// with optional region and endpoint overrides.
pub async fn build_client<C: ConfigProvider>(config: &C) -> SnsClient {
    let shared = aws_config::load_defaults(BehaviorVersion::latest()).await;

    let mut builder = aws_sdk_sns::config::Builder::from(&shared);
    if let Some(region) = config.region() {
        builder = builder.region(Region::new(region.to_string()));
    }
    if let Some(endpoint) = config.endpoint_url() {
        tracing::debug!(endpoint, "Using custom SNS endpoint");
        builder = builder.endpoint_url(endpoint);
    }

    SnsClient::from_conf(builder.build())
}

/// Error text reported by the service, falling back to the full error chain.
fn provider_message<E>(err: &E) -> String
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(err).to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: SnsClient,
}

impl SnsPublisher {
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessagePublisher for SnsPublisher {
    async fn publish(&self, request: PublishRequest) -> Result<PublishReceipt> {
        let mut publish = self
            .client
            .publish()
            .topic_arn(request.topic_arn)
            .message(request.message)
            .subject(request.subject);

        for (name, value) in request.message_attributes {
            let attribute = MessageAttributeValue::builder()
                .data_type("String")
                .string_value(value)
                .build()
                .map_err(|e| NotifierError::notification(e.to_string()))?;
            publish = publish.message_attributes(name, attribute);
        }

        let output = publish.send().await.map_err(|err| {
            let message = provider_message(&err);
            tracing::debug!(
                code = err.code().unwrap_or("unknown"),
                "SNS publish rejected: {}",
                DisplayErrorContext(&err)
            );
            NotifierError::notification(message)
        })?;

        let message_id = output
            .message_id()
            .map(str::to_string)
            .ok_or_else(|| NotifierError::notification("SNS publish response carried no MessageId"))?;

        Ok(PublishReceipt {
            message_id,
            sequence_number: output.sequence_number().map(str::to_string),
        })
    }
}
