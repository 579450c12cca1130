//! Per-property return on investment summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

const EPSILON: f64 = 1e-6;

/// Computed, read-only ROI aggregate for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRoi {
    pub property_id: String,
    pub total_investment: f64,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_revenue: f64,
    pub roi_percentage: f64,
    /// Months until the investment is recovered; `None` when it never is.
    #[serde(default)]
    pub payback_months: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_even_date: Option<NaiveDate>,
    pub is_profitable: bool,
    pub investment_recovered_percentage: f64,
}

impl PropertyRoi {
    /// Build a summary from raw totals over `months_observed` months.
    ///
    /// `break_even_date` is left empty; date projection belongs to the
    /// caller.
    pub fn from_totals(
        property_id: impl Into<String>,
        total_investment: f64,
        total_revenue: f64,
        total_expenses: f64,
        months_observed: u32,
    ) -> Self {
        let net_revenue = total_revenue - total_expenses;

        let (roi_percentage, investment_recovered_percentage) = if total_investment > 0.0 {
            let ratio = net_revenue / total_investment * 100.0;
            (ratio, ratio.clamp(0.0, 100.0))
        } else {
            (0.0, 0.0)
        };

        let monthly_net = if months_observed > 0 {
            net_revenue / f64::from(months_observed)
        } else {
            0.0
        };
        let payback_months = if monthly_net > 0.0 && total_investment > 0.0 {
            Some(total_investment / monthly_net)
        } else {
            None
        };

        let property_id = property_id.into();
        tracing::debug!(
            property_id = %property_id,
            net_revenue,
            roi_percentage,
            payback_months = ?payback_months,
            "Computed property ROI"
        );

        Self {
            property_id,
            total_investment,
            total_revenue,
            total_expenses,
            net_revenue,
            roi_percentage,
            payback_months,
            break_even_date: None,
            is_profitable: net_revenue > 0.0,
            investment_recovered_percentage,
        }
    }

    /// Verify the relations an external producer must uphold.
    pub fn check_consistency(&self) -> Result<(), ValidationError> {
        let expected_net = self.total_revenue - self.total_expenses;
        if (self.net_revenue - expected_net).abs() > EPSILON {
            return Err(ValidationError::InconsistentRoi(format!(
                "net_revenue {} != total_revenue - total_expenses {}",
                self.net_revenue, expected_net
            )));
        }

        if self.is_profitable != (self.net_revenue > 0.0) {
            return Err(ValidationError::InconsistentRoi(format!(
                "is_profitable {} with net_revenue {}",
                self.is_profitable, self.net_revenue
            )));
        }

        let expected_roi = if self.total_investment > 0.0 {
            self.net_revenue / self.total_investment * 100.0
        } else {
            0.0
        };
        if (self.roi_percentage - expected_roi).abs() > EPSILON {
            return Err(ValidationError::InconsistentRoi(format!(
                "roi_percentage {} != {}",
                self.roi_percentage, expected_roi
            )));
        }

        Ok(())
    }
}
