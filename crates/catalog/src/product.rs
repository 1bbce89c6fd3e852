use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{AggregateId, Entity, ValueObject};

/// Product identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Fields of a product candidate, in rule-definition order.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    Price,
    ImageUrl,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Price => "price",
            Field::ImageUrl => "image_url",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate product record, prior to any persistence.
///
/// All four fields arrive as raw text the way an input surface hands them
/// over; a blank (empty or whitespace-only) field counts as absent. Drafts
/// carry no identity and are compared by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl ProductDraft {
    /// Parsed price: `None` when the field is blank or not a number.
    pub fn price_value(&self) -> Option<Decimal> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse().ok()
    }
}

impl ValueObject for ProductDraft {}

/// Stored product record: a draft that passed every rule, with identity and
/// an exact decimal price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    description: String,
    price: Decimal,
    image_url: String,
    created_at: DateTime<Utc>,
}

impl Product {
    pub(crate) fn from_draft(
        id: ProductId,
        draft: &ProductDraft,
        price: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            price,
            image_url: draft.image_url.clone(),
            created_at,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
