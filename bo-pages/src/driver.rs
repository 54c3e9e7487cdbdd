//! Browser tab abstraction used by every page object

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DriverResult;

/// Element state a wait resolves on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitState {
    /// Present in the DOM
    Attached,
    /// Present and rendered
    #[default]
    Visible,
    /// Absent or not rendered
    Hidden,
    /// Absent from the DOM
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOptions {
    /// 3 selects the whole content of an editable area
    pub click_count: u32,
}

impl ClickOptions {
    pub fn triple() -> Self {
        Self { click_count: 3 }
    }
}

impl Default for ClickOptions {
    fn default() -> Self {
        Self { click_count: 1 }
    }
}

/// One browser tab
///
/// Methods take `&self` so independent steps can be awaited concurrently on
/// the same tab.
#[async_trait]
pub trait Page: Send + Sync {
    async fn goto(&self, url: &str) -> DriverResult<()>;

    async fn click(&self, selector: &str, options: ClickOptions) -> DriverResult<()>;

    /// Replace the value of an input
    async fn fill(&self, selector: &str, value: &str) -> DriverResult<()>;

    /// Press a single named key (`Backspace`, `Enter`, ...) on the focused element
    async fn keyboard_press(&self, key: &str) -> DriverResult<()>;

    /// Type text into the focused element
    async fn keyboard_type(&self, text: &str) -> DriverResult<()>;

    async fn wait_for_selector(
        &self,
        selector: &str,
        state: WaitState,
        timeout: Duration,
    ) -> DriverResult<()>;

    /// Raw `textContent` of the first match, `None` when nothing matches
    async fn text_content(&self, selector: &str) -> DriverResult<Option<String>>;

    async fn is_checked(&self, selector: &str) -> DriverResult<bool>;

    async fn current_url(&self) -> DriverResult<String>;

    async fn title(&self) -> DriverResult<String>;

    /// Click and wait until the current document is replaced and fully loaded
    async fn click_and_wait_for_navigation(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> DriverResult<()>;

    /// Click an element that opens a new tab and return that tab
    async fn click_and_open_new_tab(&self, selector: &str) -> DriverResult<Box<dyn Page>>;
}
