use super::amortization::{monthly_payment, monthly_rate};
use super::types::{InterestOnlyInputs, InterestOnlyResult};

pub fn calculate_interest_only(inputs: &InterestOnlyInputs) -> InterestOnlyResult {
    let loan_amount = inputs.home_price - inputs.down_payment;
    let interest_only_months = inputs.interest_only_years.min(inputs.term_years) * 12;
    let amortizing_months = inputs.term_years * 12 - interest_only_months;

    let interest_only_payment = loan_amount * monthly_rate(inputs.interest_rate);
    let amortizing_payment = monthly_payment(loan_amount, inputs.interest_rate, amortizing_months);

    let interest_only_total_interest = interest_only_payment * interest_only_months as f64;
    let amortizing_total_interest = if amortizing_months > 0 {
        amortizing_payment * amortizing_months as f64 - loan_amount
    } else {
        0.0
    };
    let monthly_expenses = inputs.annual_property_tax / 12.0
        + inputs.annual_insurance / 12.0
        + inputs.monthly_pmi
        + inputs.monthly_hoa;

    InterestOnlyResult {
        loan_amount,
        interest_only_payment,
        amortizing_payment,
        payment_increase: amortizing_payment - interest_only_payment,
        monthly_expenses,
        interest_only_monthly_total: interest_only_payment + monthly_expenses,
        amortizing_monthly_total: amortizing_payment + monthly_expenses,
        interest_only_total_interest,
        amortizing_total_interest,
        total_interest: interest_only_total_interest + amortizing_total_interest,
        total_principal: loan_amount,
    }
}
