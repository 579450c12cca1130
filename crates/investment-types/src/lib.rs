//! Property investment tracking records.
//!
//! Categories, individual investments and the computed ROI summary per
//! property. Persistence and querying live elsewhere; this crate only owns
//! the shapes and their invariants.

pub mod models;
pub mod roi;
pub mod validation;

pub use models::{CategorySummary, InvestmentCategory, PropertyInvestment, PropertySummary};
pub use roi::PropertyRoi;
pub use validation::ValidationError;
