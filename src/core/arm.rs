use super::amortization::{amortize_months, monthly_payment};
use super::types::{ArmInputs, ArmResult, ArmYear};

/// Rate for a year after the fixed period: the fully indexed rate, capped by
/// the lifetime ceiling, then limited to one periodic adjustment from `prior`.
pub fn adjusted_rate(inputs: &ArmInputs, prior: f64) -> f64 {
    let fully_indexed = inputs.index_rate + inputs.margin;
    let target = fully_indexed.min(inputs.initial_rate + inputs.lifetime_cap);
    let cap = inputs.adjustment_cap.max(0.0);
    target.clamp(prior - cap, prior + cap).max(0.0)
}

pub fn calculate_arm(inputs: &ArmInputs) -> ArmResult {
    let loan_amount = inputs.home_price - inputs.down_payment;
    let mut balance = loan_amount;
    let mut rate = inputs.initial_rate;
    let mut total_interest = 0.0;
    let mut schedule = Vec::with_capacity(inputs.term_years as usize);

    for year in 1..=inputs.term_years {
        if year > inputs.initial_period_years {
            rate = adjusted_rate(inputs, rate);
        }
        let remaining_months = (inputs.term_years - year + 1) * 12;
        let payment = monthly_payment(balance, rate, remaining_months);
        schedule.push(ArmYear {
            year,
            rate,
            monthly_payment: payment,
            annual_payment: payment * 12.0,
            balance,
        });

        let (next_balance, interest) = amortize_months(balance, rate, payment, 12);
        total_interest += interest;
        balance = next_balance;
    }

    let initial_monthly_payment = schedule.first().map_or(0.0, |row| row.monthly_payment);
    let (max_rate, max_monthly_payment) = schedule.iter().fold(
        (inputs.initial_rate, initial_monthly_payment),
        |(max_rate, max_payment), row| (max_rate.max(row.rate), max_payment.max(row.monthly_payment)),
    );

    ArmResult {
        loan_amount,
        initial_monthly_payment,
        max_rate,
        max_monthly_payment,
        total_interest,
        schedule,
    }
}
