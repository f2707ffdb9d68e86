use uuid::Uuid;

use crate::domain::errors::ValidationError;
use crate::domain::shared::slug::slugify;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::CategoryNameEmpty);
        }

        let slug = slugify(&name);
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            slug,
        })
    }
}
