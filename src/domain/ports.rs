use crate::domain::model::{PublishReceipt, PublishRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound "publish message" capability of a topic-based messaging service.
///
/// Implementations report every delivery failure as
/// [`NotifierError::Notification`](crate::utils::error::NotifierError) carrying the
/// provider's message.
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    async fn publish(&self, request: PublishRequest) -> Result<PublishReceipt>;
}

pub trait ConfigProvider: Send + Sync {
    fn topic_arn(&self) -> &str;
    fn region(&self) -> Option<&str>;
    fn endpoint_url(&self) -> Option<&str>;
}
