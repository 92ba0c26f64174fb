//! Reachability check for the form server.
//!
//! A suite against a down server should fail in seconds with a pointed
//! message, not after a WebDriver navigation timeout.

use anyhow::Context;

/// Confirm something answers HTTP at `url`. Any response counts, an error
/// status still proves the server is up; the suites find out soon enough
/// whether the page is the form.
pub async fn form_reachable(url: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .context("building HTTP client for the form check")?;

    client
        .get(url)
        .send()
        .await
        .with_context(|| format!("form server not reachable at {url}"))?;

    Ok(())
}
