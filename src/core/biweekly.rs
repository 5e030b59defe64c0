use super::amortization::{is_paid_off, monthly_payment, monthly_rate};
use super::types::{BiweeklyInputs, BiweeklyResult, BiweeklyYear};

const PERIODS_PER_YEAR: u32 = 26;

struct Ledger {
    balance: f64,
    rate: f64,
    payment: f64,
    periods: u32,
    payoff_period: Option<u32>,
    interest: f64,
}

impl Ledger {
    fn new(balance: f64, rate: f64, payment: f64) -> Self {
        Self {
            balance,
            rate,
            payment,
            periods: 0,
            payoff_period: is_paid_off(balance).then_some(0),
            interest: 0.0,
        }
    }

    fn pay(&mut self, count: u32) {
        for _ in 0..count {
            if self.payoff_period.is_some() {
                return;
            }
            let interest = self.balance * self.rate;
            self.interest += interest;
            self.balance = (self.balance + interest - self.payment).max(0.0);
            self.periods += 1;
            if is_paid_off(self.balance) {
                self.balance = 0.0;
                self.payoff_period = Some(self.periods);
            }
        }
    }
}

pub fn calculate_biweekly(inputs: &BiweeklyInputs) -> BiweeklyResult {
    let term_months = inputs.term_years * 12;
    let monthly_pi = monthly_payment(inputs.loan_amount, inputs.interest_rate, term_months);
    let biweekly_pi = monthly_pi / 2.0;
    let i = monthly_rate(inputs.interest_rate);

    let mut monthly = Ledger::new(inputs.loan_amount, i, monthly_pi);
    let mut biweekly = Ledger::new(inputs.loan_amount, i / 2.0, biweekly_pi);

    let mut balances = Vec::with_capacity(inputs.term_years as usize + 1);
    balances.push(BiweeklyYear {
        year: 0,
        monthly_balance: monthly.balance,
        biweekly_balance: biweekly.balance,
    });
    for year in 1..=inputs.term_years {
        monthly.pay(12);
        biweekly.pay(PERIODS_PER_YEAR);
        balances.push(BiweeklyYear {
            year,
            monthly_balance: monthly.balance,
            biweekly_balance: biweekly.balance,
        });
    }

    // Residual rounding on the last monthly payment still counts as paid off.
    let monthly_payoff_months = monthly.payoff_period.unwrap_or(term_months);
    let biweekly_payoff_months = biweekly
        .payoff_period
        .map(|periods| (periods as f64 * 12.0 / PERIODS_PER_YEAR as f64).ceil() as u32)
        .unwrap_or(term_months);

    BiweeklyResult {
        monthly_principal_and_interest: monthly_pi,
        biweekly_principal_and_interest: biweekly_pi,
        monthly_payment: monthly_pi + inputs.annual_property_tax / 12.0 + inputs.annual_insurance / 12.0,
        biweekly_payment: biweekly_pi
            + inputs.annual_property_tax / PERIODS_PER_YEAR as f64
            + inputs.annual_insurance / PERIODS_PER_YEAR as f64,
        monthly_total_interest: monthly.interest,
        biweekly_total_interest: biweekly.interest,
        interest_saved: monthly.interest - biweekly.interest,
        monthly_payoff_months,
        biweekly_payoff_months,
        balances,
    }
}
