use super::amortization::{loan_summary, schedule};
use super::types::{MortgageInputs, MortgageResult};

/// Down payment as a percent of `price`; zero when there is no price.
pub fn down_payment_percent(down_payment: f64, price: f64) -> f64 {
    if price > 0.0 {
        down_payment / price * 100.0
    } else {
        0.0
    }
}

pub fn estimated_closing_costs(purchase_price: f64) -> f64 {
    (purchase_price * 0.03).max(8_000.0)
}

pub fn monthly_escrow(annual_property_tax: f64, annual_insurance: f64) -> f64 {
    annual_property_tax / 12.0 + annual_insurance / 12.0
}

pub fn calculate_mortgage(inputs: &MortgageInputs) -> MortgageResult {
    let loan_amount = inputs.home_price - inputs.down_payment;
    let months = inputs.term_years * 12;
    let summary = loan_summary(loan_amount, inputs.interest_rate, months);

    let monthly_property_tax = inputs.annual_property_tax / 12.0;
    let monthly_insurance = inputs.annual_insurance / 12.0;
    let total_monthly_payment = summary.monthly_payment
        + monthly_property_tax
        + monthly_insurance
        + inputs.monthly_pmi
        + inputs.monthly_hoa
        + inputs.monthly_other;

    MortgageResult {
        loan_amount,
        down_payment_percent: down_payment_percent(inputs.down_payment, inputs.home_price),
        principal_and_interest: summary.monthly_payment,
        monthly_property_tax,
        monthly_insurance,
        monthly_pmi: inputs.monthly_pmi,
        monthly_hoa: inputs.monthly_hoa,
        monthly_other: inputs.monthly_other,
        total_monthly_payment,
        total_interest: summary.total_interest,
        schedule: schedule(loan_amount, inputs.interest_rate, months),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn total_payment_is_principal_and_interest_plus_overheads() {
        let inputs = MortgageInputs {
            monthly_pmi: 75.0,
            monthly_hoa: 50.0,
            monthly_other: 25.0,
            ..MortgageInputs::default()
        };
        let result = calculate_mortgage(&inputs);

        assert_approx(result.loan_amount, 240_000.0);
        assert_approx(result.down_payment_percent, 20.0);
        assert_approx(result.monthly_property_tax, 200.0);
        assert_approx(result.monthly_insurance, 100.0);
        assert_approx(
            result.total_monthly_payment,
            result.principal_and_interest + 200.0 + 100.0 + 75.0 + 50.0 + 25.0,
        );
        assert_eq!(result.schedule.len(), 30);
    }

    #[test]
    fn down_payment_percent_of_price() {
        assert_approx(down_payment_percent(50_000.0, 400_000.0), 12.5);
        assert_approx(down_payment_percent(50_000.0, 0.0), 0.0);
    }

    #[test]
    fn closing_costs_have_a_floor() {
        assert_approx(estimated_closing_costs(100_000.0), 8_000.0);
        assert_approx(estimated_closing_costs(500_000.0), 15_000.0);
    }
}
