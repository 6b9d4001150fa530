//! ROI worked example
//!
//! The ROI section walks through four steps: quantify the monthly risk, value
//! preserved by the service, the service cost, and the resulting net gain.
//! All figures derive from [`RoiInputs`]; the defaults reproduce the €100M
//! illustration used in the pitch.

#![warn(clippy::all, rust_2018_idioms)]

/// Inputs of the worked example. Rates are fractions (0.03 == 3%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiInputs {
    pub annual_revenue: f64,
    pub rupture_rate: f64,
    /// Estimated monthly cost of the risk, taken as given
    pub monthly_risk_cost: f64,
    pub resolution_rate: f64,
    pub operational_savings: f64,
    pub monthly_fixed_fee: f64,
    pub incentive_rate: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            annual_revenue: 100_000_000.0,
            rupture_rate: 0.03,
            monthly_risk_cost: 129_000.0,
            resolution_rate: 0.90,
            operational_savings: 4_000.0,
            monthly_fixed_fee: 3_000.0,
            incentive_rate: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiBreakdown {
    pub monthly_revenue: f64,
    pub strategic_rupture_value: f64,
    pub monthly_risk_cost: f64,
    pub commercial_value_preserved: f64,
    pub operational_savings: f64,
    pub total_value_preserved: f64,
    pub fixed_fee: f64,
    pub incentive_fee: f64,
    pub total_monthly_cost: f64,
    pub net_monthly_value: f64,
    /// Percentage; `None` when the service cost is zero
    pub roi_percent: Option<f64>,
}

impl RoiBreakdown {
    pub fn compute(inputs: &RoiInputs) -> Self {
        let monthly_revenue = inputs.annual_revenue / 12.0;
        let strategic_rupture_value = monthly_revenue * inputs.rupture_rate;
        let commercial_value_preserved = strategic_rupture_value * inputs.resolution_rate;
        let total_value_preserved = commercial_value_preserved + inputs.operational_savings;

        // The incentive is charged on the managed rupture revenue
        let incentive_fee = strategic_rupture_value * inputs.incentive_rate;
        let total_monthly_cost = inputs.monthly_fixed_fee + incentive_fee;
        let net_monthly_value = total_value_preserved - total_monthly_cost;

        let roi_percent = if total_monthly_cost > 0.0 {
            Some(net_monthly_value / total_monthly_cost * 100.0)
        } else {
            None
        };

        Self {
            monthly_revenue,
            strategic_rupture_value,
            monthly_risk_cost: inputs.monthly_risk_cost,
            commercial_value_preserved,
            operational_savings: inputs.operational_savings,
            total_value_preserved,
            fixed_fee: inputs.monthly_fixed_fee,
            incentive_fee,
            total_monthly_cost,
            net_monthly_value,
            roi_percent,
        }
    }
}

/// Whole euros with thousands separators, e.g. `€8,333,333`
pub fn format_euros(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-€{}", grouped)
    } else {
        format!("€{}", grouped)
    }
}

/// Rate as a whole percentage, e.g. `0.03` -> `3%`
pub fn format_rate(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}
