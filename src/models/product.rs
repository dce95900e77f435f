use serde::{Deserialize, Serialize};

use super::metal::MetalType;
use super::numeric;

wire_enum! {
    pub enum ProductStatus {
        Active => "active",
        Inactive => "inactive",
        OutOfStock => "out_of_stock",
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Active
    }
}

/// Product as shown in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub metal_type: Option<MetalType>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub weight: Option<f64>,
    pub purity: Option<String>,
    pub stock: Option<i64>,
    pub status: ProductStatus,
    pub photos: Vec<String>,
    pub certificate: Option<String>,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
    pub stone_weight: Option<f64>,
    pub making_charge: Option<f64>,
    pub wastage_percentage: Option<f64>,
    pub gst: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub discount_type: Option<String>,
    pub price: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Product {
    /// Case-insensitive match against name, SKU and category.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            Some(self.name.as_str()),
            self.sku.as_deref(),
            self.category.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawProduct::deserialize(deserializer).map(Product::from)
    }
}

/// Product as the backend sends it, under either naming generation.
#[derive(Debug, Deserialize)]
struct RawProduct {
    #[serde(deserialize_with = "numeric::id_string")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    sku: Option<String>,
    #[serde(default, alias = "productCode")]
    product_code: Option<String>,
    #[serde(default, alias = "metalType")]
    metal_type: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, alias = "subCategory")]
    sub_category: Option<String>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    weight: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    grams: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_string")]
    purity: Option<String>,
    #[serde(
        default,
        alias = "metalPurity",
        deserialize_with = "numeric::lenient_string"
    )]
    metal_purity: Option<String>,
    #[serde(default, deserialize_with = "numeric::lenient_i64")]
    stock: Option<i64>,
    #[serde(default, deserialize_with = "numeric::lenient_i64")]
    quantity: Option<i64>,
    #[serde(default)]
    status: Option<ProductStatus>,
    #[serde(default)]
    photos: Option<Vec<String>>,
    #[serde(default, alias = "photoUrls")]
    photo_urls: Option<Vec<String>>,
    #[serde(default)]
    certificate: Option<String>,
    #[serde(default, alias = "certificateUrl")]
    certificate_url: Option<String>,
    #[serde(
        default,
        alias = "grossWeight",
        deserialize_with = "numeric::lenient_f64"
    )]
    gross_weight: Option<f64>,
    #[serde(default, alias = "netWeight", deserialize_with = "numeric::lenient_f64")]
    net_weight: Option<f64>,
    #[serde(
        default,
        alias = "stoneWeight",
        deserialize_with = "numeric::lenient_f64"
    )]
    stone_weight: Option<f64>,
    #[serde(
        default,
        alias = "makingCharge",
        deserialize_with = "numeric::lenient_f64"
    )]
    making_charge: Option<f64>,
    #[serde(
        default,
        alias = "wastagePercentage",
        deserialize_with = "numeric::lenient_f64"
    )]
    wastage_percentage: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    gst: Option<f64>,
    #[serde(
        default,
        alias = "discountPercentage",
        deserialize_with = "numeric::lenient_f64"
    )]
    discount_percentage: Option<f64>,
    #[serde(default, alias = "discountType")]
    discount_type: Option<String>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    price: Option<f64>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<String>,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Product {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            sku: raw.sku.or(raw.product_code),
            metal_type: raw.metal_type.and_then(|metal| metal.parse().ok()),
            category: raw.category,
            sub_category: raw.sub_category,
            weight: raw.weight.or(raw.grams),
            purity: raw.purity.or(raw.metal_purity),
            stock: raw.stock.or(raw.quantity),
            status: raw.status.unwrap_or_default(),
            photos: raw.photos.or(raw.photo_urls).unwrap_or_default(),
            certificate: raw.certificate.or(raw.certificate_url),
            gross_weight: raw.gross_weight,
            net_weight: raw.net_weight,
            stone_weight: raw.stone_weight,
            making_charge: raw.making_charge,
            wastage_percentage: raw.wastage_percentage,
            gst: raw.gst,
            discount_percentage: raw.discount_percentage,
            discount_type: raw.discount_type,
            price: raw.price,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Editable product fields submitted as multipart form data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub sku: Option<String>,
    pub metal_type: Option<MetalType>,
    pub purity: Option<String>,
    pub weight: Option<f64>,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
    pub stone_weight: Option<f64>,
    pub stock: Option<i64>,
    pub wastage_percentage: Option<f64>,
    pub making_charge: Option<f64>,
    pub gst: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub discount_type: Option<String>,
}

impl ProductDraft {
    /// Text fields of the multipart body, with the backend's defaults filled in.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let number = |value: Option<f64>| value.unwrap_or(0.0).to_string();
        let weight = self.weight.unwrap_or(0.0);

        vec![
            ("name", self.name.clone()),
            ("grams", weight.to_string()),
            ("category", self.category.clone()),
            ("product_code", self.sku.clone().unwrap_or_default()),
            (
                "metal_purity",
                self.purity.clone().unwrap_or_else(|| "999".to_string()),
            ),
            (
                "metal_type",
                self.metal_type.unwrap_or_default().as_str().to_string(),
            ),
            (
                "gross_weight",
                self.gross_weight.unwrap_or(weight).to_string(),
            ),
            ("net_weight", self.net_weight.unwrap_or(weight).to_string()),
            ("stone_weight", number(self.stone_weight)),
            ("quantity", self.stock.unwrap_or(0).to_string()),
            ("wastage_percentage", number(self.wastage_percentage)),
            ("making_charge", number(self.making_charge)),
            ("gst", number(self.gst)),
            ("discount_percentage", number(self.discount_percentage)),
            (
                "discount_type",
                self.discount_type
                    .clone()
                    .unwrap_or_else(|| "overall".to_string()),
            ),
        ]
    }
}

/// Product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "numeric::id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "active", alias = "is_active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}
