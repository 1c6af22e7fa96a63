use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;
use vanguardhive::adapters::ResendMailer;
use vanguardhive::config::env;
use vanguardhive::serverless::{handle_proxy_event, ProxyRequest, ProxyResponse};
use vanguardhive::utils::logger;
use vanguardhive::{EnvSettings, SubmissionHandler};

async fn function_handler(
    handler: &SubmissionHandler,
    event: LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, Error> {
    tracing::info!("Handling request {}", event.context.request_id);
    Ok(handle_proxy_event(handler, event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // Mail settings are read per invocation; only the endpoint is fixed at cold start.
    let mailer = ResendMailer::new(env::resend_endpoint())?;
    let handler = SubmissionHandler::new(Arc::new(mailer), Arc::new(EnvSettings));
    tracing::info!("Form relay Lambda ready");

    let shared = &handler;
    run(service_fn(move |event: LambdaEvent<ProxyRequest>| async move {
        function_handler(shared, event).await
    }))
    .await
}
