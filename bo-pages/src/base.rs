//! Helpers shared by every back-office page object

use std::fmt::Display;
use std::time::Duration;

use crate::config::PageConfig;
use crate::driver::{ClickOptions, Page, WaitState};
use crate::error::DriverResult;

pub const ALERT_SUCCESS_BLOCK_PARAGRAPH: &str = "div.alert.alert-success p.alert-text";

/// Common interactions, composed into each page object
#[derive(Debug, Clone, Copy)]
pub struct BasePage {
    selector_timeout: Duration,
    navigation_timeout: Duration,
}

impl BasePage {
    pub fn new(selector_timeout: Duration, navigation_timeout: Duration) -> Self {
        Self {
            selector_timeout,
            navigation_timeout,
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.selector_timeout(), config.navigation_timeout())
    }

    pub fn selector_timeout(&self) -> Duration {
        self.selector_timeout
    }

    /// Open `url` in `page`
    pub async fn go_to(&self, page: &dyn Page, url: &str) -> DriverResult<()> {
        tracing::debug!(url = %url, "Opening back-office page");
        page.goto(url).await
    }

    pub async fn wait_for_selector_and_click(
        &self,
        page: &dyn Page,
        selector: &str,
    ) -> DriverResult<()> {
        self.wait_for_visible_selector(page, selector).await?;
        page.click(selector, ClickOptions::default()).await
    }

    pub async fn wait_for_visible_selector(
        &self,
        page: &dyn Page,
        selector: &str,
    ) -> DriverResult<()> {
        page.wait_for_selector(selector, WaitState::Visible, self.selector_timeout)
            .await
    }

    /// Clear the input, then fill it with the value's string form
    pub async fn set_value(
        &self,
        page: &dyn Page,
        selector: &str,
        value: impl Display,
    ) -> DriverResult<()> {
        let value = value.to_string();
        self.wait_for_visible_selector(page, selector).await?;
        page.fill(selector, "").await?;
        page.fill(selector, &value).await
    }

    /// Click the checkbox only when its state differs from `checked`
    pub async fn set_checked(
        &self,
        page: &dyn Page,
        selector: &str,
        checked: bool,
    ) -> DriverResult<()> {
        self.wait_for_visible_selector(page, selector).await?;
        if page.is_checked(selector).await? != checked {
            page.click(selector, ClickOptions::default()).await?;
        }
        Ok(())
    }

    pub async fn click_and_wait_for_navigation(
        &self,
        page: &dyn Page,
        selector: &str,
    ) -> DriverResult<()> {
        self.wait_for_visible_selector(page, selector).await?;
        page.click_and_wait_for_navigation(selector, self.navigation_timeout)
            .await
    }

    /// Trimmed text content, empty when the element has none
    pub async fn get_text_content(&self, page: &dyn Page, selector: &str) -> DriverResult<String> {
        page.wait_for_selector(selector, WaitState::Attached, self.selector_timeout)
            .await?;
        let text = page.text_content(selector).await?.unwrap_or_default();
        Ok(text.trim().to_string())
    }

    /// Click a `target="_blank"` link and wait for `new_page_selector` in the new tab
    pub async fn open_link_with_target_blank(
        &self,
        page: &dyn Page,
        selector: &str,
        new_page_selector: &str,
    ) -> DriverResult<Box<dyn Page>> {
        self.wait_for_visible_selector(page, selector).await?;
        let new_page = page.click_and_open_new_tab(selector).await?;
        new_page
            .wait_for_selector(new_page_selector, WaitState::Visible, self.navigation_timeout)
            .await?;
        Ok(new_page)
    }

    pub async fn get_page_title(&self, page: &dyn Page) -> DriverResult<String> {
        page.title().await
    }

    pub async fn get_alert_success_block_paragraph_content(
        &self,
        page: &dyn Page,
    ) -> DriverResult<String> {
        self.get_text_content(page, ALERT_SUCCESS_BLOCK_PARAGRAPH).await
    }
}

impl Default for BasePage {
    fn default() -> Self {
        Self::new(Duration::from_secs(10), Duration::from_secs(30))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DriverError;
    use crate::testing::{Action, ScriptedPage};

    #[tokio::test]
    async fn test_go_to_opens_url() {
        let page = ScriptedPage::new();

        BasePage::default()
            .go_to(&page, "http://shop.test/admin/index.php")
            .await
            .unwrap();

        assert_eq!(
            page.actions(),
            vec![Action::Goto("http://shop.test/admin/index.php".into())]
        );
        assert_eq!(page.current_url().await.unwrap(), "http://shop.test/admin/index.php");
    }

    #[tokio::test]
    async fn test_set_value_clears_then_fills_stringified_number() {
        let page = ScriptedPage::new();

        BasePage::default().set_value(&page, "#qty", 25).await.unwrap();

        assert_eq!(
            page.actions(),
            vec![
                Action::wait("#qty", WaitState::Visible),
                Action::fill("#qty", ""),
                Action::fill("#qty", "25"),
            ]
        );
    }

    #[tokio::test]
    async fn test_set_checked_clicks_only_when_state_differs() {
        let page = ScriptedPage::new().with_checked("#active", true);
        let base = BasePage::default();

        base.set_checked(&page, "#active", true).await.unwrap();
        assert!(!page.actions().iter().any(|a| matches!(a, Action::Click { .. })));

        base.set_checked(&page, "#active", false).await.unwrap();
        assert_eq!(page.actions().last(), Some(&Action::click("#active", 1)));
        assert!(!page.is_checked("#active").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_text_content_is_trimmed() {
        let page = ScriptedPage::new().with_text(ALERT_SUCCESS_BLOCK_PARAGRAPH, "\n  Successful update.  \n");

        let text = BasePage::default()
            .get_alert_success_block_paragraph_content(&page)
            .await
            .unwrap();

        assert_eq!(text, "Successful update.");
    }

    #[tokio::test]
    async fn test_missing_selector_times_out() {
        let page = ScriptedPage::new().with_missing("#nope");

        let err = BasePage::default()
            .wait_for_selector_and_click(&page, "#nope")
            .await
            .unwrap_err();

        assert!(matches!(err, DriverError::Timeout { .. }));
        assert!(!page.actions().iter().any(|a| matches!(a, Action::Click { .. })));
    }
}
