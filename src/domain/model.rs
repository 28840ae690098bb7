use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Event handed over by the booking state machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingEvent {
    pub customer_id: Option<String>,
    pub payment: Option<Payment>,
    pub booking_reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub price: Option<String>,
}

/// Body of the published message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub customer_id: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub payload: NotificationPayload,
    pub booking_reference: Option<String>,
}

impl NotificationRequest {
    pub fn new(payload: NotificationPayload, booking_reference: Option<String>) -> Self {
        Self {
            payload,
            booking_reference: booking_reference.filter(|r| !r.is_empty()),
        }
    }

    pub fn status(&self) -> BookingStatus {
        BookingStatus::from_reference(self.booking_reference.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    pub notification_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn from_reference(booking_reference: Option<&str>) -> Self {
        match booking_reference {
            Some(reference) if !reference.is_empty() => Self::Confirmed,
            _ => Self::Cancelled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the publisher needs for one message. String-typed attributes only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub topic_arn: String,
    pub message: String,
    pub subject: String,
    pub message_attributes: BTreeMap<String, String>,
}

/// What the messaging service handed back for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishReceipt {
    pub message_id: String,
    pub sequence_number: Option<String>,
}
