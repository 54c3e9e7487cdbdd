//! Back-office page objects
//!
//! Selectors and interactions of the back-office screens, written against the
//! [`Page`] trait so they run on a real browser ([`WebDriverPage`]) or on the
//! scripted driver in [`testing`].
//!
//! ```ignore
//! let config = PageConfig::from_env();
//! let session = WebDriverSession::start(&config).await?;
//! let page = session.page().await?;
//! ProductsPage::default().go_to(&page, &config).await?;
//!
//! let form = ProductFormPage::new(BasePage::from_config(&config));
//! let message = form.set_product(&page, &ProductData::default()).await?;
//! session.quit().await?;
//! ```

pub mod base;
pub mod catalog;
pub mod config;
pub mod driver;
pub mod error;
pub mod product_data;
pub mod webdriver;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use base::BasePage;
pub use catalog::{ProductFormPage, ProductsPage};
pub use config::PageConfig;
pub use driver::{ClickOptions, Page, WaitState};
pub use error::{DriverError, DriverResult};
pub use product_data::{ProductData, ProductDataBuilder};
pub use webdriver::{WebDriverPage, WebDriverSession};
