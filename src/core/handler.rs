use crate::core::notifier::Notifier;
use crate::core::{BookingEvent, MessagePublisher, NotificationPayload, NotificationRequest};
use crate::utils::error::{NotifierError, Result};

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Turns the state machine event into a notification request.
///
/// Only rejects the event when customer and price are *both* missing; a single
/// missing field is passed through and published as `null`.
pub fn validate(event: BookingEvent) -> Result<NotificationRequest> {
    let customer_id = present(event.customer_id);
    let price = present(event.payment.and_then(|payment| payment.price));

    if customer_id.is_none() && price.is_none() {
        return Err(NotifierError::invalid_input("Invalid customer and price"));
    }

    Ok(NotificationRequest::new(
        NotificationPayload { customer_id, price },
        present(event.booking_reference),
    ))
}

/// Entry point for one invocation. Returns the bare notification id, which the
/// state machine appends to its output as `notificationId`.
#[tracing::instrument(name = "handler", skip_all)]
pub async fn handle_event<P: MessagePublisher>(
    notifier: &Notifier<P>,
    event: BookingEvent,
) -> Result<String> {
    let request = validate(event).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected booking notification event");
    })?;

    let result = notifier.notify(&request).await?;
    Ok(result.notification_id)
}
