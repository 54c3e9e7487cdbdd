use crate::base::BasePage;
use crate::config::PageConfig;
use crate::driver::Page;
use crate::error::DriverResult;

/// Catalog > Products list
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductsPage {
    base: BasePage,
}

impl ProductsPage {
    pub const PAGE_TITLE: &'static str = "Products";
    pub const URL_PATH: &'static str = "index.php/sell/catalog/products-v2/";

    pub fn new(base: BasePage) -> Self {
        Self { base }
    }

    /// Open the products list of the configured back-office
    pub async fn go_to(&self, page: &dyn Page, config: &PageConfig) -> DriverResult<()> {
        self.base.go_to(page, &config.bo_page_url(Self::URL_PATH)).await
    }

    /// Success message shown after an action on the list
    pub async fn get_alert_success_block_paragraph_content(
        &self,
        page: &dyn Page,
    ) -> DriverResult<String> {
        self.base.get_alert_success_block_paragraph_content(page).await
    }

    pub async fn get_page_title(&self, page: &dyn Page) -> DriverResult<String> {
        self.base.get_page_title(page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::ALERT_SUCCESS_BLOCK_PARAGRAPH;
    use crate::testing::{Action, ScriptedPage};

    fn config() -> PageConfig {
        PageConfig {
            bo_url: "http://shop.test/admin-dev/".into(),
            webdriver_url: "http://127.0.0.1:9515".into(),
            headless: true,
            selector_timeout_ms: 10_000,
            navigation_timeout_ms: 30_000,
            poll_interval_ms: 100,
        }
    }

    #[tokio::test]
    async fn test_go_to_opens_products_list_under_bo_url() {
        let page = ScriptedPage::new();

        ProductsPage::default().go_to(&page, &config()).await.unwrap();

        assert_eq!(
            page.actions(),
            vec![Action::Goto(
                "http://shop.test/admin-dev/index.php/sell/catalog/products-v2/".into()
            )]
        );
    }

    #[tokio::test]
    async fn test_page_title_matches_products_title() {
        let page = ScriptedPage::new().with_title("Products");

        let title = ProductsPage::default().get_page_title(&page).await.unwrap();

        assert_eq!(title, ProductsPage::PAGE_TITLE);
    }

    #[tokio::test]
    async fn test_success_alert_text() {
        let page = ScriptedPage::new()
            .with_text(ALERT_SUCCESS_BLOCK_PARAGRAPH, " Successful deletion. ");

        let text = ProductsPage::default()
            .get_alert_success_block_paragraph_content(&page)
            .await
            .unwrap();

        assert_eq!(text, "Successful deletion.");
    }
}
