//! Storefront checkout driver entry point.
//!
//! Reads a checkout document as JSON from stdin and prints the outcome.

use std::io::Read;
use std::process::ExitCode;

use storefront::{CheckoutDocument, Config, Outcome, StorefrontError};
use submission::SubmissionClient;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

async fn drive(config: &Config) -> Result<ExitCode, StorefrontError> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let document: CheckoutDocument = serde_json::from_str(&raw)?;

    let client = SubmissionClient::http(config.endpoint());
    match storefront::run(document, &client).await? {
        Outcome::Rejected(errors) => {
            for (field, error) in errors.iter() {
                eprintln!("{field}: {error}");
            }
            Ok(ExitCode::from(2))
        }
        Outcome::Submitted(response) => {
            println!("{}", response.body);
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = match metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
    {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::warn!(error = %err, "metrics recorder not installed");
            None
        }
    };

    // 3. Run the address step and submit
    tracing::info!(endpoint = %config.endpoint(), "starting checkout");
    let code = match drive(&config).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "checkout failed");
            ExitCode::FAILURE
        }
    };

    if let Some(handle) = metrics_handle {
        tracing::debug!(metrics = %handle.render(), "checkout metrics");
    }
    code
}
