//! Validation rule set for product candidates.
//!
//! Every anticipated bad input (missing fields, out-of-range prices, malformed
//! image references, duplicate titles) becomes a message in the returned
//! report, never an error. Rules are evaluated independently per field and all
//! violated rules for a field accumulate, in rule-definition order.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

use crate::product::{Field, ProductDraft};

/// Violation report keyed by product field.
pub type Violations = storefront_core::Violations<Field>;

/// Accepted image references: a name whose final extension is gif/jpg/png
/// (any case), optionally behind an http(s) URL and path prefix. Nothing may
/// follow the extension, so `logo.png/x` and `logo.png.bak` are rejected.
static IMAGE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(gif|jpg|png)$").unwrap());

const BLANK: &str = "can't be blank";
const NOT_A_NUMBER: &str = "is not a number";
const TAKEN: &str = "has already been taken";
const BAD_IMAGE_REF: &str = "must be a URL for GIF, JPG or PNG image";

/// Injected uniqueness capability: which titles are already persisted.
///
/// The rule set never performs IO; the caller hands it a snapshot (a set of
/// titles) or a live collaborator such as [`Catalog`](crate::Catalog).
/// Matching is case-sensitive and exact.
pub trait TitleLookup {
    fn is_taken(&self, title: &str) -> bool;
}

impl TitleLookup for HashSet<String> {
    fn is_taken(&self, title: &str) -> bool {
        self.contains(title)
    }
}

impl TitleLookup for BTreeSet<String> {
    fn is_taken(&self, title: &str) -> bool {
        self.contains(title)
    }
}

impl TitleLookup for [&str] {
    fn is_taken(&self, title: &str) -> bool {
        self.iter().any(|taken| *taken == title)
    }
}

/// Statically declared validation configuration for product candidates.
///
/// Thresholds are data, not hardcoded literals: callers tune them through
/// [`RuleSet::new`] without touching the rules themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    min_title_length: usize,
    min_price: Decimal,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_title_length: 10,
            // one cent
            min_price: Decimal::new(1, 2),
        }
    }
}

impl RuleSet {
    /// Build a rule set with explicit thresholds.
    ///
    /// Nonsensical configuration is a programming error, rejected up front:
    /// the minimum title length must be at least 1 and the minimum price
    /// positive.
    pub fn new(min_title_length: usize, min_price: Decimal) -> DomainResult<Self> {
        if min_title_length == 0 {
            return Err(DomainError::invariant(
                "minimum title length must be at least 1",
            ));
        }
        if min_price <= Decimal::ZERO {
            return Err(DomainError::invariant("minimum price must be positive"));
        }
        Ok(Self {
            min_title_length,
            min_price,
        })
    }

    pub fn min_title_length(&self) -> usize {
        self.min_title_length
    }

    pub fn min_price(&self) -> Decimal {
        self.min_price
    }

    /// Evaluate every rule against `draft`.
    ///
    /// Pure: no IO, no mutation, never fails. An empty report means the draft
    /// is valid. Validity is computed fresh on each call.
    pub fn validate<L>(&self, draft: &ProductDraft, existing: &L) -> Violations
    where
        L: TitleLookup + ?Sized,
    {
        let mut report = Violations::new();
        self.check_title(draft, existing, &mut report);
        self.check_description(draft, &mut report);
        self.check_price(draft, &mut report);
        self.check_image_url(draft, &mut report);
        report
    }

    fn check_title<L>(&self, draft: &ProductDraft, existing: &L, report: &mut Violations)
    where
        L: TitleLookup + ?Sized,
    {
        if draft.title.trim().is_empty() {
            report.add(Field::Title, BLANK);
        }
        // Length counts characters of the raw value, so a blank title also
        // fails the length rule.
        if draft.title.chars().count() < self.min_title_length {
            report.add(
                Field::Title,
                format!("must have at least {} characters", self.min_title_length),
            );
        }
        if existing.is_taken(&draft.title) {
            report.add(Field::Title, TAKEN);
        }
    }

    fn check_description(&self, draft: &ProductDraft, report: &mut Violations) {
        if draft.description.trim().is_empty() {
            report.add(Field::Description, BLANK);
        }
    }

    fn check_price(&self, draft: &ProductDraft, report: &mut Violations) {
        let raw = draft.price.trim();
        if raw.is_empty() {
            report.add(Field::Price, BLANK);
            return;
        }
        match raw.parse::<Decimal>() {
            Err(_) => report.add(Field::Price, NOT_A_NUMBER),
            Ok(price) if price < self.min_price => report.add(
                Field::Price,
                format!("must be greater than or equal to {}", self.min_price),
            ),
            Ok(_) => {}
        }
    }

    fn check_image_url(&self, draft: &ProductDraft, report: &mut Violations) {
        let raw = draft.image_url.trim();
        if raw.is_empty() {
            report.add(Field::ImageUrl, BLANK);
            return;
        }
        if !IMAGE_REF.is_match(raw) {
            report.add(Field::ImageUrl, BAD_IMAGE_REF);
        }
    }
}
