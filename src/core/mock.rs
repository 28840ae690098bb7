use crate::core::{MessagePublisher, PublishReceipt, PublishRequest, Result};
use crate::utils::error::NotifierError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory publisher recording every request it receives.
#[derive(Clone, Default)]
pub struct MockPublisher {
    sent: Arc<Mutex<Vec<PublishRequest>>>,
    ids: Arc<Mutex<VecDeque<String>>>,
    failure: Option<String>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<const N: usize>(ids: [&str; N]) -> Self {
        Self {
            ids: Arc::new(Mutex::new(ids.iter().map(|id| id.to_string()).collect())),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub async fn sent(&self) -> Vec<PublishRequest> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MessagePublisher for MockPublisher {
    async fn publish(&self, request: PublishRequest) -> Result<PublishReceipt> {
        if let Some(message) = &self.failure {
            return Err(NotifierError::notification(message.clone()));
        }

        let mut sent = self.sent.lock().await;
        sent.push(request);
        let message_id = self
            .ids
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| format!("mock-{}", sent.len()));

        Ok(PublishReceipt {
            message_id,
            sequence_number: None,
        })
    }
}
