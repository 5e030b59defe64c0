use super::amortization::monthly_payment;
use super::mortgage::monthly_escrow;
use super::types::{BuydownInputs, BuydownResult, BuydownYear};

pub fn calculate_buydown(inputs: &BuydownInputs) -> BuydownResult {
    let months = inputs.term_years * 12;
    let escrow = monthly_escrow(inputs.annual_property_tax, inputs.annual_insurance);
    let payment_at = |rate: f64| monthly_payment(inputs.loan_amount, rate, months) + escrow;

    let base_monthly_payment = payment_at(inputs.base_rate);
    let reductions = inputs.plan.reductions();
    let mut schedule = Vec::with_capacity(reductions.len() + 1);
    let mut total_cost = 0.0;

    for (year, reduction) in (1u32..).zip(reductions) {
        let rate = (inputs.base_rate - reduction).max(0.0);
        let payment = payment_at(rate);
        let monthly_savings = base_monthly_payment - payment;
        total_cost += monthly_savings * 12.0;
        schedule.push(BuydownYear {
            year,
            rate,
            monthly_payment: payment,
            monthly_savings,
        });
    }
    schedule.push(BuydownYear {
        year: reductions.len() as u32 + 1,
        rate: inputs.base_rate,
        monthly_payment: base_monthly_payment,
        monthly_savings: 0.0,
    });

    BuydownResult {
        base_monthly_payment,
        schedule,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BuydownPlan;
    use proptest::prelude::{prop_assert, prop_oneof, proptest, Just};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn two_one_plan_steps_rate_down_two_then_one() {
        let result = calculate_buydown(&BuydownInputs::default());
        let rates: Vec<f64> = result.schedule.iter().map(|row| row.rate).collect();
        assert_eq!(rates, vec![5.5, 6.5, 7.5]);
        assert_eq!(result.schedule.last().map(|row| row.year), Some(3));
        assert_approx(result.schedule[2].monthly_savings, 0.0);
        assert!(result.schedule[0].monthly_savings > result.schedule[1].monthly_savings);
    }

    #[test]
    fn reduced_rate_never_goes_negative() {
        let result = calculate_buydown(&BuydownInputs {
            base_rate: 2.0,
            plan: BuydownPlan::ThreeTwoOne,
            ..BuydownInputs::default()
        });
        assert_approx(result.schedule[0].rate, 0.0);
        assert!(result.schedule[0].monthly_payment.is_finite());
        assert_eq!(result.schedule.len(), 4);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_total_cost_is_sum_of_annualised_savings(
            loan in 50_000u32..1_500_000,
            rate_bp in 300u32..1_200,
            plan in prop_oneof![
                Just(BuydownPlan::OneZero),
                Just(BuydownPlan::TwoOne),
                Just(BuydownPlan::ThreeTwoOne)
            ]
        ) {
            let inputs = BuydownInputs {
                loan_amount: loan as f64,
                base_rate: rate_bp as f64 / 100.0,
                plan,
                ..BuydownInputs::default()
            };
            let result = calculate_buydown(&inputs);
            let summed: f64 = result.schedule.iter().map(|row| row.monthly_savings * 12.0).sum();
            prop_assert!((summed - result.total_cost).abs() < 1e-6);
            prop_assert!(result.total_cost > 0.0);
            prop_assert!(result.schedule.len() == plan.reductions().len() + 1);
        }
    }
}
