//! WebDriver session against the portal.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use fantoccini::wd::TimeoutConfiguration;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use super::Portal;
use crate::config::{BrowserSettings, PortalCredentials, PortalUrls};
use crate::report::{HtmlReport, ReportPage};

// ============================================================================
// Constants
// ============================================================================

const PAGE_LOAD_TIMEOUT_SECS: u64 = 60;
const SCRIPT_TIMEOUT_SECS: u64 = 60;

/// How long element lookups wait for the element to appear
const IMPLICIT_WAIT_SECS: u64 = 10;

/// Pause after each login form step for the next step to render
const LOGIN_STEP_DELAY: Duration = Duration::from_secs(2);

/// The callings report is the largest page and renders slowest
const ROSTER_SETTLE_DELAY: Duration = Duration::from_secs(5);

/// Pause after opening an organization page and after expanding it
const ORG_SETTLE_DELAY: Duration = Duration::from_secs(3);

const CHROME_ARGS: [&str; 4] = [
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--window-size=1920x1080",
];

const USERNAME_FIELD_ID: &str = "input28";
const NEXT_BUTTON_XPATH: &str = r#"//input[@value="Next"]"#;
const PASSWORD_FIELD_ID: &str = "input53";
const VERIFY_BUTTON_XPATH: &str = r#"//input[@value="Verify"]"#;
const SELECT_ALL_ORGS_XPATH: &str =
    r#"//a[@ng-click="selectAllOrgs()" and text()="All Organizations"]"#;

/// Capabilities for a Chrome session
pub fn chrome_capabilities(headless: bool) -> Map<String, Value> {
    let mut args: Vec<&str> = Vec::with_capacity(CHROME_ARGS.len() + 1);
    if headless {
        args.push("--headless");
    }
    args.extend(CHROME_ARGS);

    let mut caps = Map::new();
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps
}

fn settle_delay(page: ReportPage) -> Duration {
    match page {
        ReportPage::Roster => ROSTER_SETTLE_DELAY,
        ReportPage::PrimaryOrganization | ReportPage::SundaySchoolOrganization => ORG_SETTLE_DELAY,
    }
}

pub struct BrowserPortal {
    client: Option<Client>,
    urls: PortalUrls,
}

impl BrowserPortal {
    /// Start a new WebDriver session
    pub async fn connect(settings: &BrowserSettings, urls: PortalUrls) -> Result<Self> {
        let session_url = settings.session_url();
        info!(
            url = %session_url,
            target = ?settings.target,
            headless = settings.headless,
            "Starting browser session"
        );

        let mut builder = ClientBuilder::rustls();
        builder.capabilities(chrome_capabilities(settings.headless));
        let client = builder
            .connect(&session_url)
            .await
            .with_context(|| format!("Failed to start WebDriver session at {}", session_url))?;

        let timeouts = TimeoutConfiguration::new(
            Some(Duration::from_secs(SCRIPT_TIMEOUT_SECS)),
            Some(Duration::from_secs(PAGE_LOAD_TIMEOUT_SECS)),
            Some(Duration::from_secs(IMPLICIT_WAIT_SECS)),
        );
        client
            .update_timeouts(timeouts)
            .await
            .context("Failed to set WebDriver timeouts")?;

        Ok(Self {
            client: Some(client),
            urls,
        })
    }

    fn client(&self) -> Result<&Client> {
        self.client
            .as_ref()
            .ok_or_else(|| anyhow!("Browser session already closed"))
    }

    async fn fill(client: &Client, field_id: &str, value: &str, label: &str) -> Result<()> {
        client
            .find(Locator::Id(field_id))
            .await
            .with_context(|| format!("{} field not found", label))?
            .send_keys(value)
            .await
            .with_context(|| format!("Failed to type into {} field", label))?;
        Ok(())
    }

    async fn press(client: &Client, xpath: &str, label: &str) -> Result<()> {
        client
            .find(Locator::XPath(xpath))
            .await
            .with_context(|| format!("{} button not found", label))?
            .click()
            .await
            .with_context(|| format!("Failed to click {}", label))?;
        Ok(())
    }
}

impl Portal for BrowserPortal {
    type Report = HtmlReport;

    async fn login(&mut self, credentials: &PortalCredentials) -> Result<()> {
        let client = self.client()?;

        client
            .goto(&self.urls.login)
            .await
            .context("Failed to open login page")?;
        tokio::time::sleep(LOGIN_STEP_DELAY).await;
        info!("Launched login page");

        Self::fill(client, USERNAME_FIELD_ID, &credentials.username, "Username").await?;
        Self::press(client, NEXT_BUTTON_XPATH, "Next").await?;
        tokio::time::sleep(LOGIN_STEP_DELAY).await;
        info!("Entered username and clicked Next");

        Self::fill(client, PASSWORD_FIELD_ID, &credentials.password, "Password").await?;
        Self::press(client, VERIFY_BUTTON_XPATH, "Verify").await?;
        info!("Submitted password");
        Ok(())
    }

    async fn open_report(&mut self, page: ReportPage) -> Result<HtmlReport> {
        let client = self.client()?;
        let url = page.url(&self.urls);

        client
            .goto(url)
            .await
            .with_context(|| format!("Failed to open {} report", page))?;
        tokio::time::sleep(settle_delay(page)).await;
        info!(report = %page, "Navigated to report");

        if page.expands_all_orgs() {
            Self::press(client, SELECT_ALL_ORGS_XPATH, "All Organizations").await?;
            tokio::time::sleep(ORG_SETTLE_DELAY).await;
            debug!(report = %page, "Expanded all organizations");
        }

        client
            .wait()
            .at_most(Duration::from_secs(IMPLICIT_WAIT_SECS))
            .for_element(Locator::Css(page.ready_selector()))
            .await
            .with_context(|| format!("{} report did not finish rendering", page))?;

        let source = client
            .source()
            .await
            .with_context(|| format!("Failed to read {} page source", page))?;
        debug!(report = %page, bytes = source.len(), "Captured rendered page");
        Ok(HtmlReport::parse(&source))
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(client) = self.client.take() {
            client
                .close()
                .await
                .context("Failed to close browser session")?;
            info!("Browser session closed");
        }
        Ok(())
    }
}
