//! Product values typed into the product form

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Values for a new product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub reference: String,
    pub quantity: i64,
    pub minimum_quantity: u32,
    /// Retail price, tax excluded
    pub price: f64,
    pub tax_rule_id: u32,
    /// Product enabled after save
    pub status: bool,
}

impl ProductData {
    pub fn builder() -> ProductDataBuilder {
        ProductDataBuilder::default()
    }
}

impl Default for ProductData {
    fn default() -> Self {
        let reference = random_reference();
        Self {
            name: format!("Product {reference}"),
            summary: "Short summary of the product".into(),
            description: "Full description of the product".into(),
            reference,
            quantity: 100,
            minimum_quantity: 1,
            price: 20.0,
            tax_rule_id: 1,
            status: true,
        }
    }
}

/// Builder over [`ProductData::default`]
#[derive(Debug, Clone, Default)]
pub struct ProductDataBuilder {
    data: ProductData,
}

impl ProductDataBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.data.name = name.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.data.summary = summary.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.data.description = description.into();
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.data.reference = reference.into();
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.data.quantity = quantity;
        self
    }

    pub fn minimum_quantity(mut self, minimum_quantity: u32) -> Self {
        self.data.minimum_quantity = minimum_quantity;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.data.price = price;
        self
    }

    pub fn tax_rule_id(mut self, tax_rule_id: u32) -> Self {
        self.data.tax_rule_id = tax_rule_id;
        self
    }

    pub fn status(mut self, status: bool) -> Self {
        self.data.status = status;
        self
    }

    pub fn build(self) -> ProductData {
        self.data
    }
}

/// 7 upper-case alphanumeric characters
fn random_reference() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect()
}
