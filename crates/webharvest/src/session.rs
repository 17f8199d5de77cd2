//! Browser session facade.
//!
//! [`Session`] holds the pending configuration (backend, headless flag,
//! extra arguments, WebDriver endpoint); [`Session::open`] turns it into a
//! live [`SessionHandle`]. The option set is derived fresh from the current
//! state on every launch, so toggling headless repeatedly never accumulates
//! duplicate arguments.

use std::path::Path;

use serde_json::Value;
use thirtyfour::{By, WebDriver};
use tracing::{debug, error, info};

use crate::backend::Backend;
use crate::error::{HarvestError, Result};
use crate::persist;
use crate::tables::{self, Table};

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Fixed remote-debugging port argument attached in headless mode, so the
/// page stays inspectable at http://localhost:9222 while no window exists.
const REMOTE_DEBUG_ARG: &str = "--remote-debugging-port=9222";

/// Pending browser-session configuration.
#[derive(Debug, Clone)]
pub struct Session {
    backend: Backend,
    headless: bool,
    extra_args: Vec<String>,
    webdriver_url: String,
}

impl Session {
    /// Create a session for the named browser. Unrecognized names fall back
    /// to Firefox with a warning. Headless by default.
    pub fn new(browser: &str) -> Self {
        Self {
            backend: Backend::from_name(browser),
            headless: true,
            extra_args: Vec::new(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.into(),
        }
    }

    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    pub fn set_headless(&mut self, enabled: bool) {
        self.headless = enabled;
    }

    /// Append a caller-supplied engine argument.
    pub fn add_arg(&mut self, arg: impl Into<String>) {
        self.extra_args.push(arg.into());
    }

    /// Derive the engine argument list from the current state. Pure: the
    /// headless toggle and debug-port argument appear exactly once however
    /// often the flag was flipped.
    pub fn browser_args(&self) -> Vec<String> {
        let mut args = self.extra_args.clone();
        if self.headless {
            args.push(self.backend.headless_arg().to_string());
            args.push(REMOTE_DEBUG_ARG.to_string());
        }
        args
    }

    /// Launch the configured backend through the WebDriver endpoint.
    ///
    /// Launch failures (driver not running, binary missing, port conflict)
    /// propagate to the caller as [`HarvestError::SessionStart`].
    pub async fn open(&self) -> Result<SessionHandle> {
        info!(browser = %self.backend, headless = self.headless, "opening browser session");
        let caps = self.backend.capabilities(&self.browser_args())?;
        let driver = WebDriver::new(&self.webdriver_url, caps)
            .await
            .map_err(|e| HarvestError::SessionStart(e.to_string()))?;
        Ok(SessionHandle { driver })
    }
}

/// A live browser session. One per facade; dropped sessions leave the
/// browser process to the driver, call [`SessionHandle::close`] to quit it.
pub struct SessionHandle {
    driver: WebDriver,
}

impl SessionHandle {
    pub async fn goto(&self, url: &str) -> Result<()> {
        debug!(%url, "navigating");
        self.driver
            .goto(url)
            .await
            .map_err(|e| HarvestError::Navigation {
                url: url.to_string(),
                source: e,
            })
    }

    pub async fn page_source(&self) -> Result<String> {
        Ok(self.driver.source().await?)
    }

    /// Every `<table>` on the current page, in document order.
    pub async fn extract_tables(&self) -> Result<Vec<Table>> {
        let html = self.page_source().await?;
        Ok(tables::extract_tables(&html))
    }

    /// Evaluate a JavaScript expression in-page and decode its value.
    ///
    /// The expression is stringified inside the page and decoded with a
    /// real JSON parser, so string values containing "true" or "null"
    /// survive intact.
    pub async fn eval_json(&self, expression: &str) -> Result<Value> {
        let script = format!("return JSON.stringify({expression});");
        let ret = self
            .driver
            .execute(&script, vec![])
            .await
            .map_err(|e| HarvestError::JsEval(e.to_string()))?;
        match ret.json() {
            Value::String(s) => Ok(serde_json::from_str(s)?),
            // JSON.stringify(undefined) comes back as a null over the wire.
            other => Ok(other.clone()),
        }
    }

    /// Evaluate an in-page variable and write it as pretty JSON at `path`.
    /// Evaluation or write failures are logged and yield `false`.
    pub async fn dump_variable_to_json(&self, expression: &str, path: impl AsRef<Path>) -> bool {
        let value = match self.eval_json(expression).await {
            Ok(v) => v,
            Err(e) => {
                error!(%expression, error = %e, "could not evaluate page variable");
                return false;
            }
        };
        write_json_or_log(&value, path.as_ref())
    }

    /// Decode the JSON body of `<script id=…>` and write it at `path`.
    /// Lookup, decode, or write failures are logged and yield `false`.
    pub async fn dump_script_element_to_json(&self, id: &str, path: impl AsRef<Path>) -> bool {
        let element = match self.driver.find(By::Id(id)).await {
            Ok(el) => el,
            Err(e) => {
                error!(%id, error = %e, "script element not found");
                return false;
            }
        };
        let body = match element.inner_html().await {
            Ok(html) => html,
            Err(e) => {
                error!(%id, error = %e, "could not read script element body");
                return false;
            }
        };
        let value: Value = match serde_json::from_str(body.trim()) {
            Ok(v) => v,
            Err(e) => {
                error!(%id, error = %e, "script element body is not valid JSON");
                return false;
            }
        };
        write_json_or_log(&value, path.as_ref())
    }

    /// Quit the underlying browser session.
    pub async fn close(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}

fn write_json_or_log(value: &Value, path: &Path) -> bool {
    match persist::save_json(value, path) {
        Ok(()) => true,
        Err(e) => {
            error!(path = %path.display(), error = %e, "could not write JSON file");
            false
        }
    }
}
