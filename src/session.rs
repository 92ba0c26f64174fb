//! A WebDriver session pointed at the form under test.
//!
//! Wraps the driver with the handful of operations the suites share:
//! navigation to the fixed form URL, candidate discovery with the
//! enabled/ignored filter applied, and form submission. Element-level
//! interaction stays on the `WebElement` values themselves.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{bail, Context};
use thirtyfour::{By, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver, WebElement};
use tracing::{debug, info};

use crate::config::Target;
use crate::fields::{self, FieldKind};

/// How long the server gets after a submit before the next step. Submits
/// navigate to a server-rendered reply page; there is no DOM event to wait
/// on.
const SUBMIT_SETTLE: Duration = Duration::from_secs(1);

/// A live browser session plus the target it is pointed at.
pub struct FormSession {
    driver: WebDriver,
    target: Target,
    ignored: HashSet<String>,
}

impl FormSession {
    /// Start a browser session against `target`.
    ///
    /// Fails fast when the WebDriver endpoint is down rather than letting
    /// the first navigation time out.
    pub async fn connect(target: Target) -> anyhow::Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if target.headless {
            caps.set_headless().context("configuring headless Chrome")?;
        }

        let driver = WebDriver::new(target.webdriver_url.as_str(), caps)
            .await
            .with_context(|| {
                format!("WebDriver endpoint not reachable at {}", target.webdriver_url)
            })?;

        info!(webdriver = %target.webdriver_url, form = %target.form_url(), "browser session started");

        Ok(FormSession {
            driver,
            target,
            ignored: fields::ignored_names(),
        })
    }

    /// Navigate to the form URL.
    pub async fn open_form(&self) -> anyhow::Result<()> {
        let url = self.target.form_url();
        self.driver
            .goto(url.as_str())
            .await
            .with_context(|| format!("failed to open the form at {url}"))
    }

    /// Navigate to the form URL again. Same fixed URL every time; the
    /// server decides what the page shows from what it last persisted.
    pub async fn reload(&self) -> anyhow::Result<()> {
        self.open_form().await
    }

    /// Every enabled, non-ignored element of `kind`, in document order.
    pub async fn filtered_elements(&self, kind: FieldKind) -> anyhow::Result<Vec<WebElement>> {
        self.filtered(kind.selector(), kind.label()).await
    }

    /// Distinct `name` attributes across the candidates of `kind`.
    /// Unnamed elements are dropped; they cannot be re-found after a
    /// reload.
    pub async fn candidate_names(&self, kind: FieldKind) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::new();
        for element in self.filtered_elements(kind).await? {
            if let Some(name) = element
                .attr("name")
                .await
                .context("reading a name attribute")?
            {
                names.push(name);
            }
        }
        Ok(fields::dedup_names(names))
    }

    /// Enabled, non-ignored members of one named radio group.
    pub async fn radio_group(&self, name: &str) -> anyhow::Result<Vec<WebElement>> {
        let selector = fields::radio_group_selector(name);
        self.filtered(&selector, "radio button").await
    }

    /// Find a single element by its `name` attribute.
    pub async fn find_by_name(&self, name: &str) -> anyhow::Result<WebElement> {
        self.driver
            .find(By::Name(name))
            .await
            .with_context(|| format!("no element named {name:?}"))
    }

    /// Find a single element by CSS selector.
    pub async fn find_css(&self, selector: &str) -> anyhow::Result<WebElement> {
        self.driver
            .find(By::Css(selector))
            .await
            .with_context(|| format!("no element matching {selector:?}"))
    }

    /// Replace an element's current value with `text`.
    pub async fn set_text(&self, element: &WebElement, text: &str) -> anyhow::Result<()> {
        element.clear().await.context("clearing the field")?;
        element.send_keys(text).await.context("typing into the field")?;
        Ok(())
    }

    /// Submit the form containing `element`, then wait out the server
    /// round trip. WebDriver has no element-level submit, so this goes
    /// through the DOM.
    pub async fn submit_enclosing_form(&self, element: &WebElement) -> anyhow::Result<()> {
        let ret = self
            .driver
            .execute(
                r#"const f = arguments[0].form; if (!f) { return false; } f.submit(); return true;"#,
                vec![element.to_json()?],
            )
            .await
            .context("submitting the enclosing form")?;

        if !ret.convert::<bool>().context("reading the submit result")? {
            bail!("element has no enclosing form");
        }

        tokio::time::sleep(SUBMIT_SETTLE).await;
        Ok(())
    }

    /// End the session and close the browser.
    pub async fn quit(self) -> anyhow::Result<()> {
        self.driver
            .quit()
            .await
            .context("closing the browser session")
    }

    async fn filtered(&self, selector: &str, label: &str) -> anyhow::Result<Vec<WebElement>> {
        let all = self
            .driver
            .find_all(By::Css(selector))
            .await
            .with_context(|| format!("querying {selector:?}"))?;

        let mut kept = Vec::new();
        for element in all {
            let enabled = element
                .is_enabled()
                .await
                .context("reading an enabled state")?;
            let name = element
                .attr("name")
                .await
                .context("reading a name attribute")?;
            if fields::is_candidate(enabled, name.as_deref(), &self.ignored) {
                kept.push(element);
            }
        }

        debug!(kind = label, count = kept.len(), "collected candidates");
        Ok(kept)
    }
}
