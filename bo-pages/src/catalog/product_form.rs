//! Catalog > Products > product edit form
//!
//! The form is split into tabs (description, details, stock, pricing) under a
//! header holding the name and the active switch, with save, preview and
//! delete actions in the footer.

use crate::base::BasePage;
use crate::catalog::ProductsPage;
use crate::driver::{ClickOptions, Page};
use crate::error::DriverResult;
use crate::product_data::ProductData;

// Header
pub const PRODUCT_NAME_INPUT: &str = "#product_header_name_1";
pub const PRODUCT_ACTIVE_SWITCH: &str = "#product_header_active_1";

// Description tab
pub const DESCRIPTION_TAB_LINK: &str = "#product_description-tab-nav";
pub const PRODUCT_SUMMARY: &str = "#product_description_description_short";
pub const PRODUCT_DESCRIPTION: &str = "#product_description_description";

// Details tab
pub const DETAILS_TAB_LINK: &str = "#product_specifications-tab-nav";
pub const PRODUCT_REFERENCE_INPUT: &str = "#product_specifications_references_reference";

// Stock tab
pub const STOCK_TAB_LINK: &str = "#product_stock-tab-nav";
pub const PRODUCT_QUANTITY_INPUT: &str = "#product_stock_quantities_delta_quantity_delta";
pub const PRODUCT_MINIMUM_QUANTITY_INPUT: &str = "#product_stock_quantities_minimal_quantity";

// Pricing tab
pub const PRICING_TAB_LINK: &str = "#product_pricing-tab-nav";
pub const RETAIL_PRICE_INPUT: &str = "#product_pricing_retail_price_price_tax_excluded";
pub const TAX_RULE_SPAN: &str = "#select2-product_pricing_retail_price_tax_rules_group_id-container";
pub const TAX_RULE_LIST: &str = "ul#select2-product_pricing_retail_price_tax_rules_group_id-results";

// Footer
pub const PREVIEW_PRODUCT_BUTTON: &str = "#product_footer_preview";
pub const SAVE_PRODUCT_BUTTON: &str = "#product_footer_save";
pub const DELETE_PRODUCT_BUTTON: &str = "#product_footer_delete";
pub const DELETE_PRODUCT_FOOTER_MODAL: &str = "#delete-product-footer-modal";

/// Body text of the front-office redirect notice shown in debug mode
pub const DEBUG_PAGE_MOVED: &str = "[Debug] This page has moved";

/// Tax rule entry in the opened select2 list
pub fn tax_rule_select(tax_rule_id: u32) -> String {
    format!("{TAX_RULE_LIST} li[id*='-{tax_rule_id}']")
}

pub fn delete_product_submit_button() -> String {
    format!("{DELETE_PRODUCT_FOOTER_MODAL} button.btn-confirm-submit")
}

/// Product create/edit form
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFormPage {
    base: BasePage,
    products: ProductsPage,
}

impl ProductFormPage {
    pub const PAGE_TITLE: &'static str = "Products";

    pub fn new(base: BasePage) -> Self {
        Self {
            base,
            products: ProductsPage::new(base),
        }
    }

    /// Replace the content of a TinyMCE editor
    pub async fn set_value_on_tinymce_input(
        &self,
        page: &dyn Page,
        selector: &str,
        value: &str,
    ) -> DriverResult<()> {
        // Triple click selects everything in the edit area
        page.click(&format!("{selector} .mce-edit-area"), ClickOptions::triple())
            .await?;
        page.keyboard_press("Backspace").await?;
        page.keyboard_type(value).await
    }

    pub async fn set_product_description(
        &self,
        page: &dyn Page,
        data: &ProductData,
    ) -> DriverResult<()> {
        tracing::debug!("Filling product description tab");
        self.base
            .wait_for_selector_and_click(page, DESCRIPTION_TAB_LINK)
            .await?;
        self.set_value_on_tinymce_input(page, PRODUCT_SUMMARY, &data.summary)
            .await?;
        self.set_value_on_tinymce_input(page, PRODUCT_DESCRIPTION, &data.description)
            .await
    }

    pub async fn set_product_details(&self, page: &dyn Page, data: &ProductData) -> DriverResult<()> {
        tracing::debug!("Filling product details tab");
        self.base
            .wait_for_selector_and_click(page, DETAILS_TAB_LINK)
            .await?;
        self.base
            .set_value(page, PRODUCT_REFERENCE_INPUT, &data.reference)
            .await
    }

    pub async fn set_product_stock(&self, page: &dyn Page, data: &ProductData) -> DriverResult<()> {
        tracing::debug!("Filling product stock tab");
        self.base
            .wait_for_selector_and_click(page, STOCK_TAB_LINK)
            .await?;
        self.base
            .set_value(page, PRODUCT_QUANTITY_INPUT, data.quantity)
            .await?;
        self.base
            .set_value(page, PRODUCT_MINIMUM_QUANTITY_INPUT, data.minimum_quantity)
            .await
    }

    pub async fn set_product_pricing(&self, page: &dyn Page, data: &ProductData) -> DriverResult<()> {
        tracing::debug!(tax_rule_id = data.tax_rule_id, "Filling product pricing tab");
        self.base
            .wait_for_selector_and_click(page, PRICING_TAB_LINK)
            .await?;
        self.base
            .set_value(page, RETAIL_PRICE_INPUT, data.price)
            .await?;

        // Open the dropdown while watching for its result list
        futures::try_join!(
            self.base.wait_for_selector_and_click(page, TAX_RULE_SPAN),
            self.base.wait_for_visible_selector(page, TAX_RULE_LIST),
        )?;
        self.base
            .wait_for_selector_and_click(page, &tax_rule_select(data.tax_rule_id))
            .await
    }

    /// Save and return the success message
    pub async fn save_product(&self, page: &dyn Page) -> DriverResult<String> {
        self.base
            .click_and_wait_for_navigation(page, SAVE_PRODUCT_BUTTON)
            .await?;
        self.base.get_alert_success_block_paragraph_content(page).await
    }

    pub async fn get_save_button_name(&self, page: &dyn Page) -> DriverResult<String> {
        self.base.get_text_content(page, SAVE_PRODUCT_BUTTON).await
    }

    /// Fill every tab, set the active switch and save
    pub async fn set_product(&self, page: &dyn Page, data: &ProductData) -> DriverResult<String> {
        tracing::debug!(name = %data.name, reference = %data.reference, "Creating product");
        self.base
            .set_value(page, PRODUCT_NAME_INPUT, &data.name)
            .await?;
        self.set_product_description(page, data).await?;
        self.set_product_details(page, data).await?;
        self.set_product_stock(page, data).await?;
        self.set_product_pricing(page, data).await?;
        self.base
            .set_checked(page, PRODUCT_ACTIVE_SWITCH, data.status)
            .await?;

        self.save_product(page).await
    }

    /// Open the front-office preview in a new tab and return that tab
    pub async fn preview_product(&self, page: &dyn Page) -> DriverResult<Box<dyn Page>> {
        let new_page = self
            .base
            .open_link_with_target_blank(page, PREVIEW_PRODUCT_BUTTON, "body a")
            .await?;

        let body = self.base.get_text_content(new_page.as_ref(), "body").await?;
        if body.contains(DEBUG_PAGE_MOVED) {
            tracing::debug!("Following debug redirect notice");
            self.base
                .click_and_wait_for_navigation(new_page.as_ref(), "a")
                .await?;
        }

        Ok(new_page)
    }

    /// Delete through the footer modal; returns the products list success message
    pub async fn delete_product(&self, page: &dyn Page) -> DriverResult<String> {
        self.base
            .wait_for_selector_and_click(page, DELETE_PRODUCT_BUTTON)
            .await?;
        self.base
            .wait_for_visible_selector(page, DELETE_PRODUCT_FOOTER_MODAL)
            .await?;
        self.base
            .click_and_wait_for_navigation(page, &delete_product_submit_button())
            .await?;

        self.products.get_alert_success_block_paragraph_content(page).await
    }
}
