use super::types::{AmortizationRow, LoanSummary};

const BALANCE_EPS: f64 = 0.005;

pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Level payment that retires `principal` over `months` at `annual_rate_pct`.
///
/// A zero rate falls back to straight-line repayment instead of dividing by
/// `(1+i)^n - 1 = 0`.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let n = months as f64;
    let i = monthly_rate(annual_rate_pct);
    if i.abs() <= 1e-12 {
        return principal / n;
    }
    let growth = (1.0 + i).powf(n);
    principal * i * growth / (growth - 1.0)
}

/// Largest principal a fixed `payment` can retire over `months`.
pub fn max_principal(payment: f64, annual_rate_pct: f64, months: u32) -> f64 {
    if months == 0 || payment <= 0.0 {
        return 0.0;
    }
    let n = months as f64;
    let i = monthly_rate(annual_rate_pct);
    if i.abs() <= 1e-12 {
        return payment * n;
    }
    let growth = (1.0 + i).powf(n);
    payment * (growth - 1.0) / (i * growth)
}

pub fn loan_summary(principal: f64, annual_rate_pct: f64, months: u32) -> LoanSummary {
    let monthly_payment = monthly_payment(principal, annual_rate_pct, months);
    let total_payments = monthly_payment * months as f64;
    LoanSummary {
        monthly_payment,
        total_payments,
        total_interest: total_payments - principal,
    }
}

/// Applies `months` payments to `balance`. Returns the new balance and the
/// interest charged. The last payment is trimmed so the balance stops at zero.
pub fn amortize_months(balance: f64, annual_rate_pct: f64, payment: f64, months: u32) -> (f64, f64) {
    let i = monthly_rate(annual_rate_pct);
    let mut balance = balance.max(0.0);
    let mut interest_paid = 0.0;
    for _ in 0..months {
        if balance <= BALANCE_EPS {
            balance = 0.0;
            break;
        }
        let interest = balance * i;
        interest_paid += interest;
        balance = (balance + interest - payment).max(0.0);
    }
    (balance, interest_paid)
}

pub fn schedule(principal: f64, annual_rate_pct: f64, months: u32) -> Vec<AmortizationRow> {
    let payment = monthly_payment(principal, annual_rate_pct, months);
    let years = months.div_ceil(12);
    let mut rows = Vec::with_capacity(years as usize);
    let mut balance = principal.max(0.0);
    for year in 1..=years {
        let months_this_year = (months - (year - 1) * 12).min(12);
        let start = balance;
        let (end, interest_paid) = amortize_months(start, annual_rate_pct, payment, months_this_year);
        // Rounding residue on the final payment.
        balance = if year == years && end < 1.0 { 0.0 } else { end };
        rows.push(AmortizationRow {
            year,
            interest_paid,
            principal_paid: start - balance,
            balance,
        });
    }
    rows
}

pub fn is_paid_off(balance: f64) -> bool {
    balance <= BALANCE_EPS
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn standard_thirty_year_payment_matches_reference() {
        let payment = monthly_payment(300_000.0, 7.5, 360);
        assert_approx_tol(payment, 2_097.64, 0.01);
        assert_eq!(payment.round(), 2_098.0);

        let summary = loan_summary(300_000.0, 7.5, 360);
        assert_approx_tol(summary.total_interest, 455_151.67, 1.0);
        assert_approx_tol(summary.total_payments - 300_000.0, summary.total_interest, 1e-6);

        // Pages quote totals from the payment rounded to whole dollars.
        let displayed_total_interest = payment.round() * 360.0 - 300_000.0;
        assert_eq!(displayed_total_interest, 455_280.0);
        assert!(displayed_total_interest - summary.total_interest < 360.0 * 0.5);
    }

    #[test]
    fn zero_rate_falls_back_to_straight_line() {
        assert_approx_tol(monthly_payment(36_000.0, 0.0, 360), 100.0, 1e-9);
        assert_approx_tol(max_principal(100.0, 0.0, 360), 36_000.0, 1e-9);
        assert!(monthly_payment(36_000.0, 0.0, 360).is_finite());
    }

    #[test]
    fn zero_term_pays_nothing() {
        assert_eq!(monthly_payment(100_000.0, 6.0, 0), 0.0);
        assert_eq!(max_principal(1_000.0, 6.0, 0), 0.0);
    }

    #[test]
    fn max_principal_inverts_monthly_payment() {
        let payment = monthly_payment(250_000.0, 6.25, 360);
        assert_approx_tol(max_principal(payment, 6.25, 360), 250_000.0, 1e-4);
    }

    #[test]
    fn schedule_has_one_row_per_year_and_ends_at_zero() {
        let rows = schedule(200_000.0, 6.0, 180);
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0].year, 1);
        assert_eq!(rows.last().map(|r| r.balance), Some(0.0));
        let principal: f64 = rows.iter().map(|r| r.principal_paid).sum();
        assert_approx_tol(principal, 200_000.0, 1e-6);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_payment_retires_the_loan(
            principal in 1_000u32..2_000_000,
            rate_bp in 1u32..2_000,
            years in 1u32..41
        ) {
            let principal = principal as f64;
            let rate = rate_bp as f64 / 100.0;
            let months = years * 12;
            let summary = loan_summary(principal, rate, months);

            prop_assert!((summary.monthly_payment * months as f64 - principal - summary.total_interest).abs() < 1e-6);

            let (balance, interest) = amortize_months(principal, rate, summary.monthly_payment, months);
            prop_assert!(balance < 0.01 * principal.max(1.0) / 1_000.0 + 0.01);
            prop_assert!((interest - summary.total_interest).abs() < 1.0 + summary.total_interest * 1e-6);
        }
    }
}
