//! ROI worked example figures

#[cfg(test)]
mod tests {
    use offerdeck::app::roi::{format_euros, RoiBreakdown, RoiInputs};
    use pretty_assertions::assert_eq;

    fn approx(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} ± {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    #[test]
    fn test_defaults_reproduce_worked_example() {
        let roi = RoiBreakdown::compute(&RoiInputs::default());

        approx(roi.monthly_revenue, 8_333_333.33, 0.01);
        approx(roi.strategic_rupture_value, 250_000.0, 0.01);
        approx(roi.commercial_value_preserved, 225_000.0, 0.01);
        approx(roi.total_value_preserved, 229_000.0, 0.01);
        approx(roi.incentive_fee, 12_500.0, 0.01);
        approx(roi.total_monthly_cost, 15_500.0, 0.01);
        approx(roi.net_monthly_value, 213_500.0, 0.01);
        approx(roi.roi_percent.unwrap(), 1377.4, 0.1);
    }

    #[test]
    fn test_worked_example_formatting() {
        let roi = RoiBreakdown::compute(&RoiInputs::default());
        assert_eq!(format_euros(roi.monthly_revenue), "€8,333,333");
        assert_eq!(format_euros(roi.monthly_risk_cost), "€129,000");
        assert_eq!(format_euros(roi.total_monthly_cost), "€15,500");
        assert_eq!(format_euros(roi.net_monthly_value), "€213,500");
    }

    #[test]
    fn test_free_service_has_no_roi_percentage() {
        let inputs = RoiInputs {
            monthly_fixed_fee: 0.0,
            incentive_rate: 0.0,
            ..RoiInputs::default()
        };
        assert_eq!(RoiBreakdown::compute(&inputs).roi_percent, None);
    }
}
