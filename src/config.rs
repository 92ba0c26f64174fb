//! Target resolution for the live suites.
//!
//! Everything is environment-driven so a suite run can point at another
//! deployment or another chromedriver without a rebuild.

use std::env;

/// Form server on the vendor test host.
pub const DEFAULT_BASE_URL: &str = "http://vendev.vistaplex.org:9080/form";
/// Form name passed in the query string.
pub const DEFAULT_FORM: &str = "sbform";
/// Study identifier passed in the query string.
pub const DEFAULT_STUDY_ID: &str = "PARAXIAL01";
/// Local chromedriver on its default port.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Where a suite run points: the form deployment plus the WebDriver endpoint.
#[derive(Debug, Clone)]
pub struct Target {
    pub base_url: String,
    pub form: String,
    pub study_id: String,
    pub webdriver_url: String,
    pub headless: bool,
}

impl Target {
    /// Resolve the target from the environment, falling back to the
    /// defaults above.
    ///
    /// Overrides:
    /// - `SBFORM_BASE_URL`, `SBFORM_FORM`, `SBFORM_STUDY_ID`
    /// - `WEBDRIVER_URL`
    /// - `SBFORM_E2E_HEADED=1` to watch the browser
    pub fn from_env() -> Self {
        Target {
            base_url: env_or("SBFORM_BASE_URL", DEFAULT_BASE_URL),
            form: env_or("SBFORM_FORM", DEFAULT_FORM),
            study_id: env_or("SBFORM_STUDY_ID", DEFAULT_STUDY_ID),
            webdriver_url: env_or("WEBDRIVER_URL", DEFAULT_WEBDRIVER_URL),
            headless: env::var("SBFORM_E2E_HEADED").as_deref() != Ok("1"),
        }
    }

    /// Full URL of the form under test. Every navigation in a suite goes
    /// through this exact URL; the server decides what the page shows.
    pub fn form_url(&self) -> String {
        format!("{}?form={}&studyId={}", self.base_url, self.form, self.study_id)
    }
}

/// Whether the live suites were explicitly enabled via `SBFORM_E2E=1`.
pub fn live_suite_enabled() -> bool {
    env::var("SBFORM_E2E").as_deref() == Ok("1")
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
