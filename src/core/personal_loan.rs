use super::amortization::{monthly_payment, monthly_rate};
use super::types::{PersonalLoanInputs, PersonalLoanResult};

pub fn calculate_personal_loan(inputs: &PersonalLoanInputs) -> PersonalLoanResult {
    let fees = inputs.origination_fee_percent / 100.0 * inputs.loan_amount + inputs.other_fees;
    let financed_amount = inputs.loan_amount + fees;
    let monthly_payment = monthly_payment(financed_amount, inputs.interest_rate, inputs.term_months);
    let total_payment = monthly_payment * inputs.term_months as f64;

    // Effective annual rate plus fees as a share of the amount received.
    let i = monthly_rate(inputs.interest_rate);
    let fee_share = if inputs.loan_amount > 0.0 {
        fees / inputs.loan_amount
    } else {
        0.0
    };
    let apr = ((1.0 + i).powi(12) - 1.0 + fee_share) * 100.0;

    PersonalLoanResult {
        fees,
        financed_amount,
        monthly_payment,
        total_payment,
        total_interest: total_payment - inputs.loan_amount,
        apr,
    }
}
