use async_trait::async_trait;
use booking_notifier::core::{BookingEvent, MessagePublisher, PublishReceipt, PublishRequest};
use booking_notifier::{handle_event, Notifier, NotifierError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_test::{assert_err, assert_ok};

const TOPIC: &str = "arn:aws:sns:ap-southeast-2:123456789012:booking-notifications";

/// Stands in for SNS: records requests and hands out sequential ids.
#[derive(Clone, Default)]
struct RecordingPublisher {
    sent: Arc<Mutex<Vec<PublishRequest>>>,
    reject_with: Option<String>,
}

#[async_trait]
impl MessagePublisher for RecordingPublisher {
    async fn publish(&self, request: PublishRequest) -> Result<PublishReceipt> {
        if let Some(message) = &self.reject_with {
            return Err(NotifierError::Notification {
                message: message.clone(),
            });
        }

        let mut sent = self.sent.lock().await;
        sent.push(request);
        Ok(PublishReceipt {
            message_id: format!("msg-{}", sent.len()),
            sequence_number: None,
        })
    }
}

fn event(value: serde_json::Value) -> BookingEvent {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn test_confirmed_booking_end_to_end() {
    let publisher = RecordingPublisher::default();
    let notifier = Notifier::new(publisher.clone(), TOPIC);

    let id = assert_ok!(
        handle_event(
            &notifier,
            event(serde_json::json!({
                "customerId": "cust-1",
                "payment": {"price": "100"},
                "bookingReference": "BK-9"
            })),
        )
        .await
    );
    assert_eq!(id, "msg-1");

    let sent = publisher.sent.lock().await;
    assert_eq!(sent.len(), 1);
    let request = &sent[0];
    assert_eq!(request.topic_arn, TOPIC);
    assert_eq!(request.subject, "Booking confirmation for BK-9");
    assert_eq!(
        request.message_attributes.get("Booking.Status").map(String::as_str),
        Some("confirmed")
    );

    let body: serde_json::Value = serde_json::from_str(&request.message).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"customerId": "cust-1", "price": "100"})
    );
}

#[tokio::test]
async fn test_cancelled_booking_end_to_end() {
    let publisher = RecordingPublisher::default();
    let notifier = Notifier::new(publisher.clone(), TOPIC);

    assert_ok!(
        handle_event(
            &notifier,
            event(serde_json::json!({
                "customerId": "cust-1",
                "payment": {"price": "100"}
            })),
        )
        .await
    );

    let sent = publisher.sent.lock().await;
    assert_eq!(sent[0].subject, "Unable to process booking for ");
    assert_eq!(
        sent[0].message_attributes.get("Booking.Status").map(String::as_str),
        Some("cancelled")
    );
}

#[tokio::test]
async fn test_null_event_is_rejected_before_publishing() {
    let publisher = RecordingPublisher::default();
    let notifier = Notifier::new(publisher.clone(), TOPIC);

    let err = assert_err!(
        handle_event(
            &notifier,
            event(serde_json::json!({
                "customerId": null,
                "payment": {"price": null},
                "bookingReference": null
            })),
        )
        .await
    );

    assert!(matches!(err, NotifierError::InvalidInput { .. }));
    assert!(publisher.sent.lock().await.is_empty());
}

#[tokio::test]
async fn test_provider_failure_surfaces_as_notification_error() {
    let publisher = RecordingPublisher {
        reject_with: Some("Topic not found".to_string()),
        ..Default::default()
    };
    let notifier = Notifier::new(publisher, TOPIC);

    let err = assert_err!(
        handle_event(
            &notifier,
            event(serde_json::json!({
                "customerId": "cust-1",
                "payment": {"price": "100"},
                "bookingReference": "BK-9"
            })),
        )
        .await
    );

    assert_eq!(err.error_type(), "BookingNotificationException");
    assert_eq!(err.to_string(), "Topic not found");
}

#[tokio::test]
async fn test_repeated_invocations_publish_twice() {
    let publisher = RecordingPublisher::default();
    let notifier = Notifier::new(publisher.clone(), TOPIC);
    let input = serde_json::json!({
        "customerId": "cust-1",
        "payment": {"price": "100"},
        "bookingReference": "BK-9"
    });

    let first = assert_ok!(handle_event(&notifier, event(input.clone())).await);
    let second = assert_ok!(handle_event(&notifier, event(input)).await);

    assert_ne!(first, second);
    assert_eq!(publisher.sent.lock().await.len(), 2);
}
