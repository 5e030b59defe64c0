use super::amortization::{is_paid_off, monthly_payment, monthly_rate};
use super::types::{ExtraPaymentFrequency, ExtraPaymentsInputs, ExtraPaymentsResult};

/// Extra principal per month implied by the chosen frequency.
pub fn extra_monthly_amount(
    frequency: ExtraPaymentFrequency,
    extra_payment: f64,
    regular_payment: f64,
) -> f64 {
    match frequency {
        ExtraPaymentFrequency::Monthly => extra_payment,
        // Half payments every two weeks add up to one extra payment a year.
        ExtraPaymentFrequency::Biweekly => regular_payment / 2.0 * 26.0 / 12.0 - regular_payment,
        ExtraPaymentFrequency::Annual => extra_payment / 12.0,
    }
}

fn months_to_payoff(principal: f64, annual_rate_pct: f64, payment: f64, max_months: u32) -> (u32, f64) {
    let i = monthly_rate(annual_rate_pct);
    let mut balance = principal;
    let mut months = 0;
    let mut interest_paid = 0.0;
    while !is_paid_off(balance) && months < max_months {
        let interest = balance * i;
        interest_paid += interest;
        balance = (balance + interest - payment).max(0.0);
        months += 1;
    }
    (months, interest_paid)
}

pub fn calculate_extra_payments(inputs: &ExtraPaymentsInputs) -> ExtraPaymentsResult {
    let term_months = inputs.term_years * 12;
    let regular_payment = monthly_payment(inputs.loan_amount, inputs.interest_rate, term_months);
    let extra = extra_monthly_amount(inputs.frequency, inputs.extra_payment, regular_payment);

    let (regular_months, regular_total_interest) =
        months_to_payoff(inputs.loan_amount, inputs.interest_rate, regular_payment, term_months);
    let (months, total_interest) = months_to_payoff(
        inputs.loan_amount,
        inputs.interest_rate,
        regular_payment + extra.max(0.0),
        term_months,
    );

    ExtraPaymentsResult {
        regular_payment,
        extra_monthly_amount: extra,
        regular_months,
        regular_total_interest,
        months_to_payoff: months,
        total_interest,
        interest_saved: regular_total_interest - total_interest,
        months_saved: regular_months.saturating_sub(months),
    }
}
