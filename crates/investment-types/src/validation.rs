//! Record-level invariant checks.

use crate::models::{InvestmentCategory, PropertyInvestment};

/// Validation error type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("Denormalized {field} id {found} does not match {expected}")]
    StaleRelation {
        field: &'static str,
        expected: String,
        found: String,
    },

    #[error("Inconsistent ROI: {0}")]
    InconsistentRoi(String),
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

impl InvestmentCategory {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.id, "id")?;
        require(&self.name, "name")
    }
}

impl PropertyInvestment {
    /// Check required references, the amount, and that joined snapshots
    /// carrying an id point at the same records as the foreign keys.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.id, "id")?;
        require(&self.property_id, "property_id")?;
        require(&self.category_id, "category_id")?;

        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ValidationError::InvalidAmount(self.amount));
        }

        if let Some(category) = &self.category {
            if !category.id.is_empty() && category.id != self.category_id {
                return Err(ValidationError::StaleRelation {
                    field: "category",
                    expected: self.category_id.clone(),
                    found: category.id.clone(),
                });
            }
        }
        if let Some(property) = &self.property {
            if !property.id.is_empty() && property.id != self.property_id {
                return Err(ValidationError::StaleRelation {
                    field: "property",
                    expected: self.property_id.clone(),
                    found: property.id.clone(),
                });
            }
        }

        Ok(())
    }
}
