use crate::config::{NotifierConfig, ENDPOINT_ENV, REGION_ENV, TOPIC_ENV};
use crate::core::BookingEvent;
use crate::utils::error::Result;
use clap::Parser;
use std::env;
use std::fs;
use std::io::Read;

#[derive(Debug, Clone, Parser)]
#[command(name = "booking-notifier")]
#[command(about = "Publish a booking outcome notification from a state machine event")]
pub struct CliConfig {
    #[arg(long, default_value = "-", help = "Event JSON file, or - for stdin")]
    pub event: String,

    #[arg(long, help = "Topic ARN [env: BOOKING_TOPIC]")]
    pub topic_arn: Option<String>,

    #[arg(long, help = "SNS region override [env: SNS_REGION]")]
    pub region: Option<String>,

    #[arg(long, help = "SNS endpoint override [env: SNS_ENDPOINT_URL]")]
    pub endpoint_url: Option<String>,

    #[arg(long, help = "Print the publish request instead of sending it")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command line values win over the environment.
    pub fn notifier_config(&self) -> Result<NotifierConfig> {
        NotifierConfig::from_lookup(|key| {
            let flag = match key {
                TOPIC_ENV => self.topic_arn.clone(),
                REGION_ENV => self.region.clone(),
                ENDPOINT_ENV => self.endpoint_url.clone(),
                _ => None,
            };
            flag.or_else(|| env::var(key).ok())
        })
    }

    pub fn load_event(&self) -> Result<BookingEvent> {
        let raw = if self.event == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(&self.event)?
        };

        Ok(serde_json::from_str(&raw)?)
    }
}
