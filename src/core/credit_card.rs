use super::amortization::{monthly_payment, monthly_rate};
use super::types::{CardPayoff, CreditCard, CreditCardInputs, CreditCardResult};

pub const MAX_PAYOFF_MONTHS: u32 = 360;
const MIN_PAYMENT_BALANCE_SHARE: f64 = 0.02;

/// Pays `card` down with the larger of its fixed minimum and 2% of the
/// balance until it is cleared or the 360 month cap is hit.
pub fn simulate_card_payoff(card: &CreditCard) -> CardPayoff {
    let i = monthly_rate(card.rate);
    let mut balance = card.balance;
    let mut months = 0;
    let mut total_interest = 0.0;

    while balance > 0.0 && months < MAX_PAYOFF_MONTHS {
        let payment = card.min_payment.max(balance * MIN_PAYMENT_BALANCE_SHARE);
        let interest = balance * i;
        total_interest += interest;
        balance -= payment - interest;
        months += 1;
    }

    CardPayoff {
        months,
        total_interest,
        paid_off: balance <= 0.0,
    }
}

pub fn calculate_credit_card(inputs: &CreditCardInputs) -> CreditCardResult {
    let total_balance: f64 = inputs.cards.iter().map(|card| card.balance).sum();
    let loan_amount = total_balance * (1.0 + inputs.origination_fee_percent / 100.0);
    let new_monthly_payment = monthly_payment(loan_amount, inputs.loan_rate, inputs.loan_term_months);
    // Origination fee counts as a borrowing cost.
    let new_total_interest = new_monthly_payment * inputs.loan_term_months as f64 - total_balance;

    let cards: Vec<CardPayoff> = inputs.cards.iter().map(simulate_card_payoff).collect();
    let current_payoff_months = cards.iter().map(|payoff| payoff.months).max().unwrap_or(0);
    let current_total_interest: f64 = cards.iter().map(|payoff| payoff.total_interest).sum();
    let current_monthly_payment: f64 = inputs.cards.iter().map(|card| card.min_payment).sum();

    CreditCardResult {
        total_balance,
        loan_amount,
        current_monthly_payment,
        current_total_interest,
        current_payoff_months,
        new_monthly_payment,
        new_total_interest,
        new_payoff_months: inputs.loan_term_months,
        monthly_savings: current_monthly_payment - new_monthly_payment,
        interest_savings: current_total_interest - new_total_interest,
        months_saved: current_payoff_months as i64 - inputs.loan_term_months as i64,
        cards,
    }
}
