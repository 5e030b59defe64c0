use super::amortization::max_principal;
use super::types::{AffordabilityInputs, AffordabilityResult};

pub const FRONT_END_RATIO: f64 = 0.28;
pub const BACK_END_RATIO: f64 = 0.36;

pub fn calculate_affordability(inputs: &AffordabilityInputs) -> AffordabilityResult {
    let total_monthly_debts = inputs.monthly_debts
        + inputs.credit_card_payments
        + inputs.car_payments
        + inputs.student_loans
        + inputs.other_debts;
    let monthly_income = inputs.annual_income / 12.0;

    let front_end_limit = monthly_income * FRONT_END_RATIO;
    let back_end_limit = monthly_income * BACK_END_RATIO - total_monthly_debts;
    let max_monthly_payment = front_end_limit.min(back_end_limit);

    let principal_and_interest_budget = max_monthly_payment
        - inputs.annual_property_tax / 12.0
        - inputs.annual_insurance / 12.0
        - inputs.monthly_hoa;
    let loan_amount = max_principal(
        principal_and_interest_budget,
        inputs.interest_rate,
        inputs.term_years * 12,
    );

    let down_fraction = inputs.down_payment_percent / 100.0;
    let max_home_price = if down_fraction < 1.0 {
        loan_amount / (1.0 - down_fraction)
    } else {
        loan_amount
    };

    AffordabilityResult {
        total_monthly_debts,
        front_end_limit,
        back_end_limit,
        max_monthly_payment,
        principal_and_interest_budget,
        loan_amount,
        down_payment: max_home_price * down_fraction,
        max_home_price,
    }
}
