use anyhow::{Context, Result};
use std::time::Duration;

use campwatch::config::Config;
use campwatch::crawler::SlotChecker;
use campwatch::server::parse_weekdays;
use campwatch::utils::retry::RetryPolicy;

/// Parameters for a one-shot slot check
pub struct CheckParams {
    pub url: String,
    pub weekdays: Option<String>,
    pub retries: Option<u32>,
    pub delay: Option<u64>,
    pub headed: bool,
}

/// Run one slot check and print the JSON summary
///
/// Returns `Ok(false)` when the check itself reported failure.
pub async fn check(mut config: Config, params: CheckParams) -> Result<bool> {
    let CheckParams {
        url,
        weekdays,
        retries,
        delay,
        headed,
    } = params;

    if headed {
        config.browser.headless = false;
    }

    let defaults = config.retry.policy();
    let policy = RetryPolicy::new(
        retries.unwrap_or(defaults.max_attempts),
        delay.map(Duration::from_secs).unwrap_or(defaults.delay),
    );
    let weekdays = parse_weekdays(weekdays.as_deref());

    tracing::info!(
        url = %url,
        weekdays = ?weekdays,
        attempts = policy.max_attempts,
        "Starting slot check"
    );

    let summary = tokio::task::spawn_blocking(move || {
        SlotChecker::with_chrome(&config).check_slots_with(&url, weekdays.as_deref(), policy)
    })
    .await
    .context("Slot check task failed")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
    );

    Ok(summary.success)
}
