//! In-memory product store backing uniqueness checks.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::AggregateId;

use crate::product::{Product, ProductDraft, ProductId};
use crate::rules::{RuleSet, TitleLookup, Violations};

/// Synchronous, single-owner product store.
///
/// Holds accepted products keyed by id and serves as the [`TitleLookup`]
/// snapshot for uniqueness validation. Staleness, races against concurrent
/// inserts, and transactional isolation are a real storage layer's concern,
/// not this structure's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    rules: RuleSet,
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            products: BTreeMap::new(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate `draft` against this catalog's rule set and stored titles,
    /// without inserting anything.
    pub fn check(&self, draft: &ProductDraft) -> Violations {
        self.rules.validate(draft, self)
    }

    /// Validate and store `draft`.
    ///
    /// Returns the id of the stored product, or the violation report when any
    /// rule fails; nothing is stored in that case.
    pub fn add(
        &mut self,
        draft: &ProductDraft,
        now: DateTime<Utc>,
    ) -> Result<ProductId, Violations> {
        let report = self.rules.validate(draft, &*self);
        if !report.is_empty() {
            return Err(report);
        }
        // A clean report guarantees a parseable price.
        let price = draft.price_value().unwrap_or(Decimal::ZERO);
        let id = ProductId::new(AggregateId::new());
        self.products.insert(id, Product::from_draft(id, draft, price, now));
        Ok(id)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Stored products in id order (v7 ids are time-ordered).
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Titles of stored products, the uniqueness snapshot.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.products.values().map(Product::title)
    }
}

impl TitleLookup for Catalog {
    fn is_taken(&self, title: &str) -> bool {
        self.products.values().any(|product| product.title() == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Field;

    fn ruby_draft() -> ProductDraft {
        ProductDraft {
            title: "Programming Ruby 1.9".to_string(),
            description: "Ruby is the fastest growing and most exciting dynamic language".to_string(),
            price: "49.50".to_string(),
            image_url: "ruby.png".to_string(),
        }
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn add_stores_a_valid_draft() {
        let mut catalog = Catalog::new();
        let id = catalog.add(&ruby_draft(), test_time()).unwrap();

        assert_eq!(catalog.len(), 1);
        let stored = catalog.get(id).unwrap();
        assert_eq!(stored.title(), "Programming Ruby 1.9");
        assert_eq!(stored.price(), Decimal::new(4950, 2));
        assert_eq!(stored.image_url(), "ruby.png");
    }

    #[test]
    fn add_rejects_an_invalid_draft_without_storing() {
        let mut catalog = Catalog::new();
        let report = catalog.add(&ProductDraft::default(), test_time()).unwrap_err();

        assert!(report.has(&Field::Title));
        assert!(report.has(&Field::Description));
        assert!(report.has(&Field::Price));
        assert!(report.has(&Field::ImageUrl));
        assert!(catalog.is_empty());
    }

    #[test]
    fn add_rejects_a_duplicate_title() {
        let mut catalog = Catalog::new();
        catalog.add(&ruby_draft(), test_time()).unwrap();

        let mut duplicate = ruby_draft();
        duplicate.description = "yyy".to_string();
        let report = catalog.add(&duplicate, test_time()).unwrap_err();

        assert_eq!(report.field(&Field::Title), ["has already been taken"]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn check_validates_without_inserting() {
        let mut catalog = Catalog::new();
        catalog.add(&ruby_draft(), test_time()).unwrap();

        let report = catalog.check(&ruby_draft());
        assert_eq!(report.field(&Field::Title), ["has already been taken"]);
        assert_eq!(catalog.len(), 1);

        let mut fresh = ruby_draft();
        fresh.title = "Agile Web Development".to_string();
        assert!(catalog.check(&fresh).is_empty());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn catalog_serves_as_a_title_lookup() {
        let mut catalog = Catalog::new();
        catalog.add(&ruby_draft(), test_time()).unwrap();

        assert!(catalog.is_taken("Programming Ruby 1.9"));
        assert!(!catalog.is_taken("programming ruby 1.9"));
        assert_eq!(catalog.titles().collect::<Vec<_>>(), ["Programming Ruby 1.9"]);
    }

    #[test]
    fn custom_rules_apply_on_add() {
        let rules = RuleSet::new(3, Decimal::new(1, 2)).unwrap();
        let mut catalog = Catalog::with_rules(rules);

        let draft = ProductDraft {
            title: "Oak".to_string(),
            description: "a small sapling".to_string(),
            price: "12".to_string(),
            image_url: "oak.jpg".to_string(),
        };
        assert!(catalog.add(&draft, test_time()).is_ok());
    }
}
