//! Direct order data models.

use crate::error::{PesapalError, Result};
use crate::models::Params;
use serde::{Deserialize, Serialize};

/// A single line of an order, rendered as a `LineItem` XML element
///
/// All values are free-form strings; nothing here checks that quantities or
/// costs are numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineItem {
    pub unique_id: String,
    pub particulars: String,
    pub quantity: String,
    pub unit_cost: String,
    pub sub_total: String,
}

impl LineItem {
    pub fn new(
        unique_id: impl Into<String>,
        particulars: impl Into<String>,
        quantity: impl Into<String>,
        unit_cost: impl Into<String>,
        sub_total: impl Into<String>,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            particulars: particulars.into(),
            quantity: quantity.into(),
            unit_cost: unit_cost.into(),
            sub_total: sub_total.into(),
        }
    }

    /// XML attribute name/value pairs, sorted by name
    pub fn attributes(&self) -> [(&'static str, &str); 5] {
        [
            ("Particulars", &self.particulars),
            ("Quantity", &self.quantity),
            ("SubTotal", &self.sub_total),
            ("UniqueId", &self.unique_id),
            ("UnitCost", &self.unit_cost),
        ]
    }
}

/// Typed form of the order fields accepted by `PostPesapalDirectOrderV4`
///
/// Unset optional fields are left out of [`DirectOrder::fields`] so the
/// gateway defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectOrder {
    pub amount: String,
    pub description: String,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    pub reference: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip)]
    pub line_items: Vec<LineItem>,
}

impl DirectOrder {
    pub fn new(
        amount: impl Into<String>,
        description: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            reference: reference.into(),
            ..Self::default()
        }
    }

    pub fn order_type(mut self, order_type: impl Into<String>) -> Self {
        self.order_type = Some(order_type.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn payer_name(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    /// Render the order fields into the string mapping the gateway expects
    pub fn fields(&self) -> Result<Params> {
        let value =
            serde_json::to_value(self).map_err(|e| PesapalError::Serialization(e.to_string()))?;

        let serde_json::Value::Object(map) = value else {
            return Err(PesapalError::Serialization(
                "order did not serialize to an object".to_string(),
            ));
        };

        map.into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => Ok((key, s)),
                other => Err(PesapalError::Serialization(format!(
                    "order field {key} is not a string: {other}"
                ))),
            })
            .collect()
    }
}
