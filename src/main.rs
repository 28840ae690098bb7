use anyhow::Context;
use booking_notifier::adapters::sns::{build_client, SnsPublisher};
use booking_notifier::core::handler::validate;
use booking_notifier::core::notifier::publish_request;
use booking_notifier::utils::{logger, validation::Validate};
use booking_notifier::{handle_event, CliConfig, Notifier};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli
        .notifier_config()
        .and_then(|config| config.validate().map(|_| config))
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let event = cli
        .load_event()
        .with_context(|| format!("failed to load event from {}", cli.event))?;

    if cli.dry_run {
        let request = match validate(event) {
            Ok(request) => request,
            Err(e) => {
                eprintln!("❌ {}: {}", e.error_type(), e);
                std::process::exit(1);
            }
        };
        let publish = publish_request(&config.topic_arn, &request)?;
        println!("{}", serde_json::to_string_pretty(&publish)?);
        return Ok(());
    }

    let client = build_client(&config).await;
    let notifier = Notifier::from_config(SnsPublisher::new(client), &config);

    match handle_event(&notifier, event).await {
        Ok(notification_id) => {
            tracing::info!(%notification_id, "Booking notification sent");
            println!("{}", notification_id);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                error_type = e.error_type(),
                "Booking notification failed: {}",
                e
            );
            eprintln!("❌ {}: {}", e.error_type(), e);

            // Delivery failures get their own exit code so wrappers can retry them.
            let exit_code = match e {
                booking_notifier::NotifierError::Notification { .. } => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
