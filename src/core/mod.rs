pub mod handler;
pub mod notifier;

#[cfg(test)]
pub(crate) mod mock;

pub use crate::domain::model::{
    BookingEvent, BookingStatus, NotificationPayload, NotificationRequest, NotificationResult,
    Payment, PublishReceipt, PublishRequest,
};
pub use crate::domain::ports::{ConfigProvider, MessagePublisher};
pub use crate::utils::error::Result;
