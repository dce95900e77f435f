//! Client-side checks for the write forms.
//!
//! Each form holds the raw text as typed and turns it into a request
//! payload, or a [`FormError`] before any request is made.

use thiserror::Error;

use crate::models::numeric::parse_number;
use crate::validation::files::FileValidationError;
use crate::models::{MetalType, PriceUpdate, ProductDraft, ReferralConfig, RefundRequest, SchemeDraft};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Scheme name is required")]
    SchemeNameRequired,

    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error(transparent)]
    File(#[from] FileValidationError),
}

fn number(field: &'static str, text: &str) -> Result<f64, FormError> {
    parse_number(text).ok_or(FormError::NotANumber { field })
}

fn positive(field: &'static str, text: &str) -> Result<f64, FormError> {
    let value = number(field, text)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FormError::NotPositive { field })
    }
}

/// Blank means zero.
fn non_negative_or_zero(field: &'static str, text: &str) -> Result<f64, FormError> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    let value = number(field, text)?;
    if value < 0.0 {
        return Err(FormError::Negative { field });
    }
    Ok(value)
}

/// Blank means "not given".
fn optional_number(field: &'static str, text: &str) -> Result<Option<f64>, FormError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    number(field, text).map(Some)
}

fn optional_text(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Refund entry: order id, amount and reason are all required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundForm {
    pub order_id: String,
    pub amount: String,
    pub reason: String,
}

impl RefundForm {
    pub fn validate(&self) -> Result<(String, RefundRequest), FormError> {
        let order_id = self.order_id.trim();
        let reason = self.reason.trim();
        if order_id.is_empty() || self.amount.trim().is_empty() || reason.is_empty() {
            return Err(FormError::MissingFields);
        }
        let amount = positive("Amount", &self.amount)?;
        Ok((
            order_id.to_string(),
            RefundRequest {
                amount,
                reason: reason.to_string(),
            },
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceForm {
    pub metal_type: MetalType,
    pub buy_price: String,
    pub sell_price: String,
}

impl PriceForm {
    pub fn validate(&self) -> Result<PriceUpdate, FormError> {
        if self.buy_price.trim().is_empty() {
            return Err(FormError::Required { field: "Buy price" });
        }
        if self.sell_price.trim().is_empty() {
            return Err(FormError::Required { field: "Sell price" });
        }
        Ok(PriceUpdate {
            metal_type: self.metal_type,
            buy_price: positive("Buy price", &self.buy_price)?,
            sell_price: positive("Sell price", &self.sell_price)?,
        })
    }
}

/// Referral bonus settings for one metal. Blank amounts are sent as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralForm {
    pub metal_type: MetalType,
    pub referrer_bonus: String,
    pub referee_bonus: String,
    pub min_investment: String,
}

impl ReferralForm {
    /// Pre-fills the form from the current configuration.
    pub fn from_config(config: &ReferralConfig) -> Self {
        Self {
            metal_type: config.metal_type,
            referrer_bonus: config.referrer_bonus.to_string(),
            referee_bonus: config.referee_bonus.to_string(),
            min_investment: config.min_investment.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ReferralConfig, FormError> {
        Ok(ReferralConfig {
            metal_type: self.metal_type,
            referrer_bonus: non_negative_or_zero("Referrer bonus", &self.referrer_bonus)?,
            referee_bonus: non_negative_or_zero("Referee bonus", &self.referee_bonus)?,
            min_investment: non_negative_or_zero("Minimum investment", &self.min_investment)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeForm {
    pub name: String,
    pub description: String,
    pub terms_and_conditions: String,
    pub is_active: bool,
}

impl Default for SchemeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            terms_and_conditions: String::new(),
            is_active: true,
        }
    }
}

impl SchemeForm {
    pub fn validate(&self) -> Result<SchemeDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::SchemeNameRequired);
        }
        Ok(SchemeDraft {
            name: name.to_string(),
            description: Some(self.description.trim().to_string()),
            terms_and_conditions: Some(self.terms_and_conditions.trim().to_string()),
            is_active: Some(self.is_active),
        })
    }
}

/// Product fields as typed in the console. Blank numbers are left to the
/// backend defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub sku: String,
    pub metal_type: MetalType,
    pub purity: String,
    pub weight: String,
    pub stock: String,
    pub making_charge: String,
    pub wastage_percentage: String,
    pub gst: String,
    pub discount_percentage: String,
}

impl ProductForm {
    pub fn validate(&self) -> Result<ProductDraft, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Required { field: "Name" });
        }
        if self.category.trim().is_empty() {
            return Err(FormError::Required { field: "Category" });
        }
        let stock = match optional_number("Stock", &self.stock)? {
            Some(stock) if stock.fract() != 0.0 => {
                return Err(FormError::NotANumber { field: "Stock" })
            }
            stock => stock.map(|stock| stock as i64),
        };
        let draft = ProductDraft {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            sku: optional_text(&self.sku),
            metal_type: Some(self.metal_type),
            purity: optional_text(&self.purity),
            weight: optional_number("Weight", &self.weight)?,
            stock,
            making_charge: optional_number("Making charge", &self.making_charge)?,
            wastage_percentage: optional_number("Wastage percentage", &self.wastage_percentage)?,
            gst: optional_number("GST", &self.gst)?,
            discount_percentage: optional_number(
                "Discount percentage",
                &self.discount_percentage,
            )?,
            ..ProductDraft::default()
        };
        validate_product(&draft)?;
        Ok(draft)
    }
}

/// Checks a product draft before it is uploaded.
pub fn validate_product(draft: &ProductDraft) -> Result<(), FormError> {
    if draft.name.trim().is_empty() {
        return Err(FormError::Required { field: "Name" });
    }
    if draft.category.trim().is_empty() {
        return Err(FormError::Required { field: "Category" });
    }
    if let Some(weight) = draft.weight {
        if weight <= 0.0 {
            return Err(FormError::NotPositive { field: "Weight" });
        }
    }
    let weights = [
        ("Gross weight", draft.gross_weight),
        ("Net weight", draft.net_weight),
        ("Stone weight", draft.stone_weight),
        ("Making charge", draft.making_charge),
    ];
    for (field, value) in weights {
        if value.is_some_and(|v| v < 0.0) {
            return Err(FormError::Negative { field });
        }
    }
    if draft.stock.is_some_and(|stock| stock < 0) {
        return Err(FormError::Negative { field: "Stock" });
    }
    let percentages = [
        ("Wastage percentage", draft.wastage_percentage),
        ("GST", draft.gst),
        ("Discount percentage", draft.discount_percentage),
    ];
    for (field, value) in percentages {
        if value.is_some_and(|v| !(0.0..=100.0).contains(&v)) {
            return Err(FormError::OutOfRange {
                field,
                min: 0.0,
                max: 100.0,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_requires_every_field() {
        let form = RefundForm {
            order_id: "ORD123".to_string(),
            amount: String::new(),
            reason: "damaged".to_string(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingFields));
        assert_eq!(
            FormError::MissingFields.to_string(),
            "Please fill in all fields"
        );

        let blank_reason = RefundForm {
            order_id: "ORD123".to_string(),
            amount: "500".to_string(),
            reason: "   ".to_string(),
        };
        assert_eq!(blank_reason.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn refund_parses_amount() {
        let form = RefundForm {
            order_id: " ORD123 ".to_string(),
            amount: "500".to_string(),
            reason: "damaged".to_string(),
        };
        let (order_id, request) = form.validate().unwrap();
        assert_eq!(order_id, "ORD123");
        assert_eq!(request.amount, 500.0);
        assert_eq!(request.reason, "damaged");

        let zero = RefundForm {
            amount: "0".to_string(),
            ..form.clone()
        };
        assert_eq!(zero.validate(), Err(FormError::NotPositive { field: "Amount" }));

        let text = RefundForm {
            amount: "five".to_string(),
            ..form
        };
        assert_eq!(text.validate(), Err(FormError::NotANumber { field: "Amount" }));
    }

    #[test]
    fn price_form_needs_positive_prices() {
        let form = PriceForm {
            metal_type: MetalType::Silver,
            buy_price: "95.5".to_string(),
            sell_price: "92".to_string(),
        };
        let update = form.validate().unwrap();
        assert_eq!(update.metal_type, MetalType::Silver);
        assert_eq!(update.sell_price, 92.0);

        let missing = PriceForm {
            sell_price: String::new(),
            ..form
        };
        assert_eq!(
            missing.validate(),
            Err(FormError::Required { field: "Sell price" })
        );
    }

    #[test]
    fn referral_blank_amounts_are_zero() {
        let form = ReferralForm {
            metal_type: MetalType::Gold,
            referrer_bonus: "100".to_string(),
            referee_bonus: String::new(),
            min_investment: "1000".to_string(),
        };
        let config = form.validate().unwrap();
        assert_eq!(config.referee_bonus, 0.0);
        assert_eq!(config.min_investment, 1000.0);

        let negative = ReferralForm {
            referrer_bonus: "-5".to_string(),
            ..ReferralForm::default()
        };
        assert_eq!(
            negative.validate(),
            Err(FormError::Negative {
                field: "Referrer bonus"
            })
        );
    }

    #[test]
    fn scheme_name_is_required() {
        let form = SchemeForm {
            name: "  ".to_string(),
            ..SchemeForm::default()
        };
        assert_eq!(form.validate(), Err(FormError::SchemeNameRequired));
        assert_eq!(
            FormError::SchemeNameRequired.to_string(),
            "Scheme name is required"
        );

        let ok = SchemeForm {
            name: " Gold SIP ".to_string(),
            ..SchemeForm::default()
        };
        let draft = ok.validate().unwrap();
        assert_eq!(draft.name, "Gold SIP");
        assert_eq!(draft.is_active, Some(true));
    }

    #[test]
    fn product_percentages_are_bounded() {
        let mut draft = ProductDraft {
            name: "Coin".to_string(),
            category: "coins".to_string(),
            weight: Some(10.0),
            ..ProductDraft::default()
        };
        assert!(validate_product(&draft).is_ok());

        draft.gst = Some(130.0);
        assert!(matches!(
            validate_product(&draft),
            Err(FormError::OutOfRange { field: "GST", .. })
        ));

        draft.gst = Some(3.0);
        draft.weight = Some(0.0);
        assert_eq!(
            validate_product(&draft),
            Err(FormError::NotPositive { field: "Weight" })
        );
    }

    #[test]
    fn product_form_leaves_blanks_to_backend() {
        let form = ProductForm {
            name: " Lakshmi Coin ".to_string(),
            category: "coins".to_string(),
            metal_type: MetalType::Silver,
            weight: "10".to_string(),
            stock: "4".to_string(),
            ..ProductForm::default()
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "Lakshmi Coin");
        assert_eq!(draft.metal_type, Some(MetalType::Silver));
        assert_eq!(draft.weight, Some(10.0));
        assert_eq!(draft.stock, Some(4));
        assert_eq!(draft.sku, None);
        assert_eq!(draft.gst, None);

        let fractional = ProductForm {
            stock: "1.5".to_string(),
            ..form.clone()
        };
        assert_eq!(
            fractional.validate(),
            Err(FormError::NotANumber { field: "Stock" })
        );

        let unnamed = ProductForm {
            name: String::new(),
            ..form
        };
        assert_eq!(unnamed.validate(), Err(FormError::Required { field: "Name" }));
    }
}
