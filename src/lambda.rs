#[cfg(feature = "lambda")]
use booking_notifier::adapters::sns::{build_client, SnsPublisher};
#[cfg(feature = "lambda")]
use booking_notifier::core::BookingEvent;
#[cfg(feature = "lambda")]
use booking_notifier::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use booking_notifier::{handle_event, Notifier, NotifierConfig, NotifierError};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use tracing::Instrument;

#[cfg(feature = "lambda")]
async fn function_handler(
    notifier: &Notifier<SnsPublisher>,
    event: LambdaEvent<BookingEvent>,
) -> Result<String, NotifierError> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!("invocation", request_id = %context.request_id);

    handle_event(notifier, payload).instrument(span).await
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = NotifierConfig::from_env()?;
    config.validate()?;
    tracing::info!(topic_arn = %config.topic_arn, "Starting booking notifier");

    // One client per process, reused by every invocation.
    let client = build_client(&config).await;
    let notifier = Notifier::from_config(SnsPublisher::new(client), &config);
    let notifier = &notifier;

    run(service_fn(move |event: LambdaEvent<BookingEvent>| async move {
        function_handler(notifier, event).await
    }))
    .await
}
