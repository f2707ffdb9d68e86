use uuid::Uuid;

use crate::domain::errors::ValidationError;
use crate::domain::shared::slug::slugify;

/// A catalog product. Prices are integer cents to keep money exact.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
    pub category_id: Option<String>,
    pub sku: String,
    pub name: String,
    pub slug: String,
    pub price_cents: i64,
    pub stock: i32,
    pub description: Option<String>,
}

pub struct NewProductProps {
    pub category_id: Option<String>,
    pub sku: String,
    pub name: String,
    pub price_cents: i64,
    pub stock: i32,
    pub description: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ValidationError> {
        if props.name.trim().is_empty() {
            return Err(ValidationError::ProductNameEmpty);
        }
        if props.sku.trim().is_empty() {
            return Err(ValidationError::ProductSkuEmpty);
        }
        if props.price_cents < 0 {
            return Err(ValidationError::ProductPriceNegative);
        }
        if props.stock < 0 {
            return Err(ValidationError::ProductStockNegative);
        }

        let slug = slugify(&props.name);
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            category_id: props.category_id,
            sku: props.sku,
            name: props.name,
            slug,
            price_cents: props.price_cents,
            stock: props.stock,
            description: props.description,
        })
    }
}
