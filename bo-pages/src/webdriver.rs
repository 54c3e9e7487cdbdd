//! [`Page`] over the W3C WebDriver HTTP protocol
//!
//! One [`WebDriverSession`] owns a browser; each [`WebDriverPage`] is bound
//! to one of its windows and switches to it before issuing commands.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::PageConfig;
use crate::driver::{ClickOptions, Page, WaitState};
use crate::error::{DriverError, DriverResult};

/// Key under which WebDriver serializes element references
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

#[derive(Deserialize)]
struct WireResponse {
    value: Value,
}

#[derive(Deserialize)]
struct WireError {
    error: String,
    #[serde(default)]
    message: String,
}

/// A running browser session
pub struct WebDriverSession {
    client: Client,
    endpoint: String,
    session_id: String,
    selector_timeout: Duration,
    poll_interval: Duration,
    active_window: Mutex<Option<String>>,
}

impl WebDriverSession {
    /// Start a Chrome session on the configured WebDriver endpoint
    pub async fn start(config: &PageConfig) -> DriverResult<Arc<Self>> {
        let client = Client::builder()
            .timeout(config.navigation_timeout() + Duration::from_secs(5))
            .build()?;
        let endpoint = config.webdriver_url.trim_end_matches('/').to_string();

        let response = client
            .post(format!("{endpoint}/session"))
            .json(&capabilities(config.headless))
            .send()
            .await?;
        let value = read_response(response).await?;
        let session_id = value
            .get("sessionId")
            .and_then(Value::as_str)
            .ok_or_else(|| DriverError::Protocol {
                error: "session not created".into(),
                message: format!("missing sessionId in {value}"),
            })?
            .to_string();

        tracing::info!(session_id = %session_id, endpoint = %endpoint, "WebDriver session started");

        Ok(Arc::new(Self {
            client,
            endpoint,
            session_id,
            selector_timeout: config.selector_timeout(),
            poll_interval: config.poll_interval(),
            active_window: Mutex::new(None),
        }))
    }

    /// Page bound to the window that currently has focus
    pub async fn page(self: &Arc<Self>) -> DriverResult<WebDriverPage> {
        let mut focused = self.active_window.lock().await;
        let handle = as_string(self.command(Method::GET, "/window", None).await?)?;
        *focused = Some(handle.clone());
        drop(focused);

        Ok(WebDriverPage {
            session: Arc::clone(self),
            window: handle,
        })
    }

    /// End the session and close the browser
    pub async fn quit(&self) -> DriverResult<()> {
        let url = format!("{}/session/{}", self.endpoint, self.session_id);
        read_response(self.client.delete(url).send().await?).await?;
        tracing::info!(session_id = %self.session_id, "WebDriver session closed");
        Ok(())
    }

    async fn command(&self, method: Method, path: &str, body: Option<Value>) -> DriverResult<Value> {
        let url = format!("{}/session/{}{}", self.endpoint, self.session_id, path);
        let is_post = method == Method::POST;
        let mut req = self.client.request(method, &url);
        // POST commands always carry a JSON object
        if is_post {
            req = req.json(&body.unwrap_or_else(|| json!({})));
        }
        read_response(req.send().await?).await
    }

    async fn window_handles(&self) -> DriverResult<Vec<String>> {
        let value = self.command(Method::GET, "/window/handles", None).await?;
        Ok(serde_json::from_value(value)?)
    }
}

async fn read_response(response: reqwest::Response) -> DriverResult<Value> {
    let status = response.status();
    let body: WireResponse = response.json().await?;
    if status.is_success() {
        return Ok(body.value);
    }
    let err: WireError = serde_json::from_value(body.value)?;
    Err(DriverError::Protocol {
        error: err.error,
        message: err.message,
    })
}

fn as_string(value: Value) -> DriverResult<String> {
    Ok(serde_json::from_value(value)?)
}

fn capabilities(headless: bool) -> Value {
    let mut args = vec!["--window-size=1920,1080"];
    if headless {
        args.push("--headless=new");
    }
    json!({
        "capabilities": {
            "alwaysMatch": {
                "browserName": "chrome",
                "goog:chromeOptions": { "args": args }
            }
        }
    })
}

/// Run `request` with `window` focused
///
/// The focus lock is held until `request` completes, so commands from pages
/// bound to other windows cannot switch focus in between.
async fn on_window<T, S, SF, R, RF>(
    active: &Mutex<Option<String>>,
    window: &str,
    switch: S,
    request: R,
) -> DriverResult<T>
where
    S: FnOnce() -> SF,
    SF: Future<Output = DriverResult<()>>,
    R: FnOnce() -> RF,
    RF: Future<Output = DriverResult<T>>,
{
    let mut focused = active.lock().await;
    if focused.as_deref() != Some(window) {
        switch().await?;
        *focused = Some(window.to_string());
    }
    request().await
}

/// Key codes of the WebDriver key actions for named keys
fn key_value(key: &str) -> String {
    let code = match key {
        "Backspace" => '\u{E003}',
        "Tab" => '\u{E004}',
        "Enter" => '\u{E007}',
        "Shift" => '\u{E008}',
        "Control" => '\u{E009}',
        "Escape" => '\u{E00C}',
        "ArrowLeft" => '\u{E012}',
        "ArrowUp" => '\u{E013}',
        "ArrowRight" => '\u{E014}',
        "ArrowDown" => '\u{E015}',
        "Delete" => '\u{E017}',
        other => return other.to_string(),
    };
    code.to_string()
}

fn key_actions<'a>(keys: impl IntoIterator<Item = &'a str>) -> Value {
    let actions: Vec<Value> = keys
        .into_iter()
        .flat_map(|key| {
            [
                json!({ "type": "keyDown", "value": key }),
                json!({ "type": "keyUp", "value": key }),
            ]
        })
        .collect();
    json!({
        "actions": [{ "type": "key", "id": "keyboard", "actions": actions }]
    })
}

fn click_actions(element_id: &str, click_count: u32) -> Value {
    let mut actions = vec![json!({
        "type": "pointerMove",
        "origin": { ELEMENT_KEY: element_id },
        "x": 0,
        "y": 0
    })];
    for _ in 0..click_count {
        actions.push(json!({ "type": "pointerDown", "button": 0 }));
        actions.push(json!({ "type": "pointerUp", "button": 0 }));
    }
    json!({
        "actions": [{
            "type": "pointer",
            "id": "mouse",
            "parameters": { "pointerType": "mouse" },
            "actions": actions
        }]
    })
}

fn element_ids(value: Value) -> DriverResult<Vec<String>> {
    let refs: Vec<serde_json::Map<String, Value>> = serde_json::from_value(value)?;
    Ok(refs
        .into_iter()
        .filter_map(|mut r| r.remove(ELEMENT_KEY))
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect())
}

/// One browser window of a [`WebDriverSession`]
#[derive(Clone)]
pub struct WebDriverPage {
    session: Arc<WebDriverSession>,
    window: String,
}

impl WebDriverPage {
    pub fn window_handle(&self) -> &str {
        &self.window
    }

    async fn command(&self, method: Method, path: &str, body: Option<Value>) -> DriverResult<Value> {
        let session = &self.session;
        on_window(
            &session.active_window,
            &self.window,
            move || async move {
                session
                    .command(Method::POST, "/window", Some(json!({ "handle": self.window })))
                    .await
                    .map(drop)
            },
            move || session.command(method, path, body),
        )
        .await
    }

    async fn find_all(&self, selector: &str) -> DriverResult<Vec<String>> {
        let value = self
            .command(
                Method::POST,
                "/elements",
                Some(json!({ "using": "css selector", "value": selector })),
            )
            .await?;
        element_ids(value)
    }

    async fn find(&self, selector: &str) -> DriverResult<String> {
        self.find_all(selector)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DriverError::NoSuchElement(selector.to_string()))
    }

    /// Wait up to the selector timeout for a displayed match
    async fn find_visible(&self, selector: &str) -> DriverResult<String> {
        self.wait_for_selector(selector, WaitState::Visible, self.session.selector_timeout)
            .await?;
        self.find(selector).await
    }

    async fn is_displayed(&self, element_id: &str) -> DriverResult<bool> {
        match self
            .command(Method::GET, &format!("/element/{element_id}/displayed"), None)
            .await
        {
            Ok(value) => Ok(value.as_bool().unwrap_or(false)),
            Err(DriverError::Protocol { error, .. }) if error == "stale element reference" => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn any_displayed(&self, selector: &str) -> DriverResult<bool> {
        for id in self.find_all(selector).await? {
            if self.is_displayed(&id).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn is_stale(&self, element_id: &str) -> DriverResult<bool> {
        match self
            .command(Method::GET, &format!("/element/{element_id}/name"), None)
            .await
        {
            Ok(_) => Ok(false),
            Err(DriverError::Protocol { error, .. })
                if error == "stale element reference" || error == "no such element" =>
            {
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    async fn ready_state(&self) -> DriverResult<String> {
        let value = self
            .command(
                Method::POST,
                "/execute/sync",
                Some(json!({ "script": "return document.readyState", "args": [] })),
            )
            .await?;
        as_string(value)
    }

    async fn send_keys(&self, keys: Vec<String>) -> DriverResult<()> {
        let body = key_actions(keys.iter().map(String::as_str));
        self.command(Method::POST, "/actions", Some(body)).await?;
        self.command(Method::DELETE, "/actions", None).await?;
        Ok(())
    }
}

#[async_trait]
impl Page for WebDriverPage {
    async fn goto(&self, url: &str) -> DriverResult<()> {
        tracing::debug!(url = %url, "Navigating");
        self.command(Method::POST, "/url", Some(json!({ "url": url })))
            .await?;
        Ok(())
    }

    async fn click(&self, selector: &str, options: ClickOptions) -> DriverResult<()> {
        let id = self.find_visible(selector).await?;
        if options.click_count <= 1 {
            self.command(Method::POST, &format!("/element/{id}/click"), None)
                .await?;
        } else {
            self.command(Method::POST, "/actions", Some(click_actions(&id, options.click_count)))
                .await?;
            self.command(Method::DELETE, "/actions", None).await?;
        }
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> DriverResult<()> {
        let id = self.find_visible(selector).await?;
        self.command(Method::POST, &format!("/element/{id}/clear"), None)
            .await?;
        if !value.is_empty() {
            self.command(
                Method::POST,
                &format!("/element/{id}/value"),
                Some(json!({ "text": value })),
            )
            .await?;
        }
        Ok(())
    }

    async fn keyboard_press(&self, key: &str) -> DriverResult<()> {
        self.send_keys(vec![key_value(key)]).await
    }

    async fn keyboard_type(&self, text: &str) -> DriverResult<()> {
        self.send_keys(text.chars().map(String::from).collect()).await
    }

    async fn wait_for_selector(
        &self,
        selector: &str,
        state: WaitState,
        timeout: Duration,
    ) -> DriverResult<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let resolved = match state {
                WaitState::Attached => !self.find_all(selector).await?.is_empty(),
                WaitState::Detached => self.find_all(selector).await?.is_empty(),
                WaitState::Visible => self.any_displayed(selector).await?,
                WaitState::Hidden => !self.any_displayed(selector).await?,
            };
            if resolved {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(DriverError::timeout(format!("{selector} ({state:?})"), timeout));
            }
            tokio::time::sleep(self.session.poll_interval).await;
        }
    }

    async fn text_content(&self, selector: &str) -> DriverResult<Option<String>> {
        let Some(id) = self.find_all(selector).await?.into_iter().next() else {
            return Ok(None);
        };
        let value = self
            .command(
                Method::POST,
                "/execute/sync",
                Some(json!({
                    "script": "return arguments[0].textContent",
                    "args": [{ ELEMENT_KEY: id }]
                })),
            )
            .await?;
        Ok(value.as_str().map(str::to_string))
    }

    async fn is_checked(&self, selector: &str) -> DriverResult<bool> {
        let id = self.find(selector).await?;
        let value = self
            .command(Method::GET, &format!("/element/{id}/property/checked"), None)
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn current_url(&self) -> DriverResult<String> {
        as_string(self.command(Method::GET, "/url", None).await?)
    }

    async fn title(&self) -> DriverResult<String> {
        as_string(self.command(Method::GET, "/title", None).await?)
    }

    async fn click_and_wait_for_navigation(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> DriverResult<()> {
        let previous_document = self.find("html").await?;
        self.click(selector, ClickOptions::default()).await?;

        // The old <html> goes stale once the next document replaces it
        let deadline = Instant::now() + timeout;
        while !self.is_stale(&previous_document).await? {
            if Instant::now() >= deadline {
                return Err(DriverError::timeout(
                    format!("navigation after clicking {selector}"),
                    timeout,
                ));
            }
            tokio::time::sleep(self.session.poll_interval).await;
        }

        while self.ready_state().await? != "complete" {
            if Instant::now() >= deadline {
                return Err(DriverError::timeout("document.readyState == complete", timeout));
            }
            tokio::time::sleep(self.session.poll_interval).await;
        }

        tracing::debug!(selector = %selector, "Navigation finished");
        Ok(())
    }

    async fn click_and_open_new_tab(&self, selector: &str) -> DriverResult<Box<dyn Page>> {
        let before = self.session.window_handles().await?;
        self.click(selector, ClickOptions::default()).await?;

        let deadline = Instant::now() + self.session.selector_timeout;
        loop {
            let handles = self.session.window_handles().await?;
            if let Some(handle) = handles.into_iter().find(|h| !before.contains(h)) {
                tracing::debug!(window = %handle, "New tab opened");
                return Ok(Box::new(WebDriverPage {
                    session: Arc::clone(&self.session),
                    window: handle,
                }));
            }
            if Instant::now() >= deadline {
                return Err(DriverError::NoNewWindow(selector.to_string()));
            }
            tokio::time::sleep(self.session.poll_interval).await;
        }
    }
}
