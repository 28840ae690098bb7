use crate::core::{
    ConfigProvider, MessagePublisher, NotificationRequest, NotificationResult, PublishRequest,
};
use crate::utils::error::Result;
use std::collections::BTreeMap;
use tracing::field;
use tracing::Instrument;

/// Message attribute subscribers filter on.
pub const STATUS_ATTRIBUTE: &str = "Booking.Status";

/// Subject line for a booking outcome.
///
/// Without a reference the failure template is rendered with an empty reference.
pub fn subject_for(booking_reference: Option<&str>) -> String {
    match booking_reference {
        Some(reference) if !reference.is_empty() => {
            format!("Booking confirmation for {}", reference)
        }
        _ => format!(
            "Unable to process booking for {}",
            booking_reference.unwrap_or("")
        ),
    }
}

/// Publish parameters for one notification: subject, JSON body and status attribute.
pub fn publish_request(topic_arn: &str, request: &NotificationRequest) -> Result<PublishRequest> {
    let mut message_attributes = BTreeMap::new();
    message_attributes.insert(STATUS_ATTRIBUTE.to_string(), request.status().to_string());

    Ok(PublishRequest {
        topic_arn: topic_arn.to_string(),
        message: serde_json::to_string(&request.payload)?,
        subject: subject_for(request.booking_reference.as_deref()),
        message_attributes,
    })
}

/// Publishes booking outcome notifications to a single topic.
pub struct Notifier<P: MessagePublisher> {
    publisher: P,
    topic_arn: String,
}

impl<P: MessagePublisher> Notifier<P> {
    pub fn new(publisher: P, topic_arn: impl Into<String>) -> Self {
        Self {
            publisher,
            topic_arn: topic_arn.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(publisher: P, config: &C) -> Self {
        Self::new(publisher, config.topic_arn())
    }

    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }

    pub fn build_request(&self, request: &NotificationRequest) -> Result<PublishRequest> {
        publish_request(&self.topic_arn, request)
    }

    pub async fn notify(&self, request: &NotificationRequest) -> Result<NotificationResult> {
        let span = tracing::info_span!(
            "notify_booking",
            booking_reference = request.booking_reference.as_deref().unwrap_or(""),
            notification_id = field::Empty,
            notification = field::Empty,
        );

        self.publish_in_span(request).instrument(span).await
    }

    async fn publish_in_span(&self, request: &NotificationRequest) -> Result<NotificationResult> {
        let publish = self.build_request(request)?;
        tracing::debug!(
            subject = %publish.subject,
            status = %request.status(),
            "Publishing booking notification"
        );

        match self.publisher.publish(publish).await {
            Ok(receipt) => {
                let span = tracing::Span::current();
                span.record("notification_id", receipt.message_id.as_str());
                span.record("notification", field::debug(&receipt));
                tracing::info!("Booking notification published");

                Ok(NotificationResult {
                    notification_id: receipt.message_id,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Booking notification failed");
                Err(e)
            }
        }
    }
}
