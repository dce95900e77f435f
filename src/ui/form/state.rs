use crate::models::{MetalType, Product, ReferralConfig, Scheme};
use crate::ui::mvi::UiState;

/// Which write a form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormKind {
    Refund,
    PriceUpdate,
    Referral(MetalType),
    SchemeCreate,
    SchemeEdit { id: String },
    ProductCreate,
    ProductEdit { id: String },
}

impl FormKind {
    pub fn title(&self) -> String {
        match self {
            FormKind::Refund => "Initiate Refund".to_string(),
            FormKind::PriceUpdate => "Update Price".to_string(),
            FormKind::Referral(metal) => format!("{} Referral Configuration", metal.label()),
            FormKind::SchemeCreate => "Create New Scheme".to_string(),
            FormKind::SchemeEdit { .. } => "Update Scheme".to_string(),
            FormKind::ProductCreate => "Create Product".to_string(),
            FormKind::ProductEdit { .. } => "Edit Product".to_string(),
        }
    }

    /// Inline forms live on their page and reopen empty after a success.
    pub fn is_inline(&self) -> bool {
        matches!(self, FormKind::Refund | FormKind::PriceUpdate)
    }

    pub fn blank_fields(&self) -> Vec<FormField> {
        match self {
            FormKind::Refund => vec![
                FormField::text("Order ID", ""),
                FormField::text("Amount (₹)", ""),
                FormField::text("Reason", ""),
            ],
            FormKind::PriceUpdate => vec![
                FormField::choice("Metal", METALS, MetalType::Gold.as_str()),
                FormField::text("Buy price (₹/g)", ""),
                FormField::text("Sell price (₹/g)", ""),
            ],
            FormKind::Referral(_) => vec![
                FormField::text("Referrer bonus (₹)", ""),
                FormField::text("Referee bonus (₹)", ""),
                FormField::text("Minimum investment (₹)", ""),
            ],
            FormKind::SchemeCreate | FormKind::SchemeEdit { .. } => vec![
                FormField::text("Name", ""),
                FormField::text("Description", ""),
                FormField::text("Terms & conditions", ""),
                FormField::toggle("Active", true),
            ],
            FormKind::ProductCreate | FormKind::ProductEdit { .. } => vec![
                FormField::text("Name", ""),
                FormField::text("Category", ""),
                FormField::text("SKU", ""),
                FormField::choice("Metal", METALS, MetalType::Gold.as_str()),
                FormField::text("Purity", "999"),
                FormField::text("Weight (g)", ""),
                FormField::text("Stock", ""),
                FormField::text("Making charge (₹)", ""),
                FormField::text("Wastage (%)", ""),
                FormField::text("GST (%)", ""),
                FormField::text("Discount (%)", ""),
                FormField::text(PHOTOS_LABEL, ""),
                FormField::text("Certificate file", ""),
            ],
        }
    }
}

/// Photo paths are typed comma-separated.
const PHOTOS_LABEL: &str = "Photos (a.jpg,b.png)";

pub const METALS: &[&str] = &["gold", "silver"];

/// Referral form pre-filled from the saved configuration.
pub fn referral_fields(config: &ReferralConfig) -> Vec<FormField> {
    vec![
        FormField::text("Referrer bonus (₹)", &config.referrer_bonus.to_string()),
        FormField::text("Referee bonus (₹)", &config.referee_bonus.to_string()),
        FormField::text("Minimum investment (₹)", &config.min_investment.to_string()),
    ]
}

pub fn scheme_fields(scheme: &Scheme) -> Vec<FormField> {
    vec![
        FormField::text("Name", &scheme.name),
        FormField::text("Description", scheme.description.as_deref().unwrap_or_default()),
        FormField::text(
            "Terms & conditions",
            scheme.terms_and_conditions.as_deref().unwrap_or_default(),
        ),
        FormField::toggle("Active", scheme.is_active),
    ]
}

/// Product form pre-filled for an edit. File fields start empty: only new
/// uploads are sent.
pub fn product_fields(product: &Product) -> Vec<FormField> {
    let shown = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
    let metal = product.metal_type.unwrap_or_default();
    vec![
        FormField::text("Name", &product.name),
        FormField::text("Category", product.category.as_deref().unwrap_or_default()),
        FormField::text("SKU", product.sku.as_deref().unwrap_or_default()),
        FormField::choice("Metal", METALS, metal.as_str()),
        FormField::text("Purity", product.purity.as_deref().unwrap_or("999")),
        FormField::text("Weight (g)", &shown(product.weight)),
        FormField::text(
            "Stock",
            &product.stock.map(|stock| stock.to_string()).unwrap_or_default(),
        ),
        FormField::text("Making charge (₹)", &shown(product.making_charge)),
        FormField::text("Wastage (%)", &shown(product.wastage_percentage)),
        FormField::text("GST (%)", &shown(product.gst)),
        FormField::text("Discount (%)", &shown(product.discount_percentage)),
        FormField::text(PHOTOS_LABEL, ""),
        FormField::text("Certificate file", ""),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    Toggle,
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub input: FieldInput,
}

impl FormField {
    pub fn text(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            input: FieldInput::Text,
        }
    }

    pub fn toggle(label: &'static str, on: bool) -> Self {
        Self {
            label,
            value: on.to_string(),
            input: FieldInput::Toggle,
        }
    }

    pub fn choice(label: &'static str, options: &'static [&'static str], value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            input: FieldInput::Choice(options),
        }
    }

    pub fn is_on(&self) -> bool {
        self.value == "true"
    }

    /// Flips a toggle or advances a choice; text is untouched.
    pub(crate) fn cycle(&mut self) {
        match self.input {
            FieldInput::Text => {}
            FieldInput::Toggle => self.value = (!self.is_on()).to_string(),
            FieldInput::Choice(options) => {
                let current = options.iter().position(|option| *option == self.value);
                let next = current.map_or(0, |index| (index + 1) % options.len());
                if let Some(option) = options.get(next) {
                    self.value = (*option).to_string();
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormDialogState {
    #[default]
    Closed,
    Open {
        kind: FormKind,
        fields: Vec<FormField>,
        focused: usize,
        /// Last validation or request failure.
        error: Option<String>,
    },
    Submitting {
        kind: FormKind,
        fields: Vec<FormField>,
        focused: usize,
    },
}

impl UiState for FormDialogState {}

impl FormDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn kind(&self) -> Option<&FormKind> {
        match self {
            Self::Closed => None,
            Self::Open { kind, .. } | Self::Submitting { kind, .. } => Some(kind),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        match self {
            Self::Closed => &[],
            Self::Open { fields, .. } | Self::Submitting { fields, .. } => fields,
        }
    }

    pub fn focused(&self) -> usize {
        match self {
            Self::Closed => 0,
            Self::Open { focused, .. } | Self::Submitting { focused, .. } => *focused,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
