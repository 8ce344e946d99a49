//! Frontend Models
//!
//! Data structures matching the storefront backend's JSON payloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Cart line identifier as issued by the backend.
///
/// The backend sends integers, the DOM carries strings; both are accepted and
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => ItemId(n.to_string()),
            Raw::Text(s) => ItemId(s),
        })
    }
}

/// One line of the cart (matches `/api/cart` items)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

/// Snapshot returned by `GET /api/cart`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Server-side total; informational, the summary is always recomputed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl Cart {
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_items(&self.items)
    }
}

/// Totals derived client-side from the cart lines
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartSummary {
    pub total: f64,
    pub count: u64,
}

impl CartSummary {
    pub fn from_items(items: &[CartItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            total: acc.total + item.subtotal,
            count: acc.count + u64::from(item.quantity),
        })
    }

    pub fn total_display(&self) -> String {
        format_money(self.total)
    }

    pub fn count_display(&self) -> String {
        self.count.to_string()
    }
}

/// Two decimal places, no currency sign. Exact half-cent ties round away
/// from zero, matching the amounts the server-rendered pages show.
pub fn format_money(amount: f64) -> String {
    let cents = amount * 100.0;
    // Only multiples of 1/8 can sit exactly on a half cent
    if (amount * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5 {
        return format!("{:.2}", cents.round() / 100.0);
    }
    format!("{:.2}", amount)
}

/// Response of `DELETE /api/cart/remove/{id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoveResponse {
    #[serde(default)]
    pub success: bool,
    /// Quantity left on the line after one unit was removed
    #[serde(default)]
    pub remaining: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `POST /create-checkout-session`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the page should do after a checkout session request
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Redirect(String),
    Failed(String),
}

impl CheckoutResponse {
    pub fn outcome(self) -> CheckoutOutcome {
        match (self.url, self.error) {
            (Some(url), _) if !url.is_empty() => CheckoutOutcome::Redirect(url),
            (_, Some(error)) => CheckoutOutcome::Failed(error),
            _ => CheckoutOutcome::Failed("unknown error".to_string()),
        }
    }
}

impl CheckoutOutcome {
    /// Text for the blocking alert shown on failure
    pub fn alert_message(&self) -> Option<String> {
        match self {
            CheckoutOutcome::Redirect(_) => None,
            CheckoutOutcome::Failed(error) => Some(format!("Checkout failed: {}", error)),
        }
    }
}
