use super::amortization::loan_summary;
use super::types::{RefinanceInputs, RefinanceResult};

pub fn calculate_refinance(inputs: &RefinanceInputs) -> RefinanceResult {
    let current_loan = loan_summary(
        inputs.current_balance,
        inputs.current_rate,
        inputs.remaining_term_years * 12,
    );
    let new_loan = loan_summary(
        inputs.new_loan_amount,
        inputs.new_rate,
        inputs.new_term_years * 12,
    );

    let monthly_savings = current_loan.monthly_payment - new_loan.monthly_payment;
    let net_closing_costs = inputs.closing_costs
        - inputs.escrow_refund
        - current_loan.monthly_payment * inputs.skipped_payments as f64;

    RefinanceResult {
        current_loan,
        new_loan,
        monthly_savings,
        lifetime_savings: current_loan.total_payments - new_loan.total_payments,
        net_closing_costs,
        break_even_months: break_even_months(net_closing_costs, monthly_savings),
    }
}

/// Months of savings needed to recover `net_costs`. `None` when the payment
/// does not go down, since the costs are then never recovered.
pub fn break_even_months(net_costs: f64, monthly_savings: f64) -> Option<u32> {
    if !(monthly_savings > 0.0) {
        return None;
    }
    if net_costs <= 0.0 {
        return Some(0);
    }
    let months = (net_costs / monthly_savings).ceil();
    (months <= u32::MAX as f64).then_some(months as u32)
}
