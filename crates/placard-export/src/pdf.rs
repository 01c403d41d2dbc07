use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chromiumoxide::cdp::browser_protocol::page::{NavigateParams, PrintToPdfParams};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::{Stream, StreamExt};
use tokio::task::JoinHandle;

use crate::error::ExportError;

/// Turns a complete HTML document into PDF bytes.
#[async_trait]
pub trait PdfExporter: Send + Sync {
    async fn export(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}

/// Launch settings for [`ChromeExporter`].
#[derive(Debug, Clone)]
pub struct ChromeOptions {
    /// Chromium binary. `None` lets chromiumoxide search the usual locations.
    pub executable: Option<PathBuf>,

    /// Pass `--no-sandbox`. Needed when running as root inside most containers.
    pub no_sandbox: bool,

    /// Deadline for one whole export, launch through shutdown.
    pub timeout: Duration,

    /// Extra wait after the document reports `readyState == "complete"`.
    pub settle: Duration,

    /// How often `document.readyState` is polled.
    pub ready_poll: Duration,
}

impl Default for ChromeOptions {
    fn default() -> Self {
        Self {
            executable: None,
            no_sandbox: false,
            timeout: Duration::from_secs(30),
            settle: Duration::ZERO,
            ready_poll: Duration::from_millis(50),
        }
    }
}

/// Prints HTML with a fresh headless Chromium per call.
///
/// Nothing is shared between calls: each export gets its own browser
/// process, CDP handler task and throwaway profile directory, and all three
/// are released on every exit path, including timeout and cancellation.
#[derive(Debug, Clone, Default)]
pub struct ChromeExporter {
    options: ChromeOptions,
}

impl ChromeExporter {
    pub fn new(options: ChromeOptions) -> Self {
        Self { options }
    }

    fn browser_config(&self, profile_dir: &Path) -> Result<BrowserConfig, ExportError> {
        let mut builder = BrowserConfig::builder()
            .user_data_dir(profile_dir)
            .request_timeout(self.options.timeout)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage");

        if let Some(path) = &self.options.executable {
            builder = builder.chrome_executable(path);
        }
        if self.options.no_sandbox {
            builder = builder.no_sandbox();
        }

        builder.build().map_err(ExportError::BrowserLaunch)
    }

    async fn run(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let profile = tempfile::Builder::new()
            .prefix("placard-chrome-")
            .tempdir()
            .map_err(|e| ExportError::BrowserLaunch(format!("profile directory: {e}")))?;

        let config = self.browser_config(profile.path())?;

        tracing::debug!(profile = %profile.path().display(), "launching headless browser");
        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| ExportError::BrowserLaunch(e.to_string()))?;

        let _events = AbortOnDrop(tokio::spawn(async move {
            drive_events(&mut handler).await;
        }));

        let result = print_page(&browser, html, &self.options).await;

        // Shut the browser down on every path; a close failure must not
        // replace the print result.
        if let Err(e) = browser.close().await {
            tracing::warn!(error = %e, "failed to close browser");
        }
        if let Err(e) = browser.wait().await {
            tracing::warn!(error = %e, "failed to reap browser process");
        }

        result
    }
}

#[async_trait]
impl PdfExporter for ChromeExporter {
    async fn export(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let timeout = self.options.timeout;
        match tokio::time::timeout(timeout, self.run(html)).await {
            Ok(result) => result,
            Err(_) => Err(ExportError::Timeout(timeout)),
        }
    }
}

async fn print_page(
    browser: &Browser,
    html: &str,
    options: &ChromeOptions,
) -> Result<Vec<u8>, ExportError> {
    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| ExportError::Navigation(e.to_string()))?;

    page.goto(NavigateParams::new(data_url(html)))
        .await
        .map_err(|e| ExportError::Navigation(e.to_string()))?;

    wait_until_ready(&page, options.ready_poll).await?;
    if !options.settle.is_zero() {
        tokio::time::sleep(options.settle).await;
    }

    let params = PrintToPdfParams {
        print_background: Some(true),
        ..Default::default()
    };
    let pdf = page
        .pdf(params)
        .await
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    tracing::debug!(bytes = pdf.len(), "printed page to PDF");

    if let Err(e) = page.close().await {
        tracing::warn!(error = %e, "failed to close page");
    }

    Ok(pdf)
}

async fn wait_until_ready(page: &Page, poll: Duration) -> Result<(), ExportError> {
    loop {
        let state: String = page
            .evaluate("document.readyState")
            .await
            .map_err(|e| ExportError::Navigation(e.to_string()))?
            .into_value()
            .map_err(|e| ExportError::Navigation(e.to_string()))?;

        if state == "complete" {
            return Ok(());
        }
        tokio::time::sleep(poll).await;
    }
}

/// Build a `data:` URL carrying `html` as base64, so `#`, `%` and newlines
/// in the document reach the browser untouched.
pub fn data_url(html: &str) -> String {
    format!("data:text/html;charset=utf-8;base64,{}", STANDARD.encode(html))
}

/// Poll a CDP event stream until it ends.
///
/// A message that fails to decode yields an `Err` but leaves the connection
/// usable, so errors are logged and skipped; stopping early would leave every
/// pending command waiting forever. Returns the number of items polled.
pub async fn drive_events<S, E>(events: &mut S) -> usize
where
    S: Stream<Item = Result<(), E>> + Unpin,
    E: std::fmt::Display,
{
    let mut polled = 0;
    while let Some(event) = events.next().await {
        polled += 1;
        if let Err(e) = event {
            tracing::debug!(error = %e, "cdp handler error");
        }
    }
    polled
}

struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}
