use super::amortization::{amortize_months, loan_summary};
use super::mortgage::monthly_escrow;
use super::types::{EquityYear, TermComparisonInputs, TermComparisonResult, TermOption};

const HORIZON_YEARS: u32 = 30;

fn term_option(loan_amount: f64, rate: f64, term_years: u32, escrow: f64) -> TermOption {
    let summary = loan_summary(loan_amount, rate, term_years * 12);
    TermOption {
        term_years,
        rate,
        principal_and_interest: summary.monthly_payment,
        monthly_payment: summary.monthly_payment + escrow,
        total_payments: summary.total_payments,
        total_interest: summary.total_interest,
    }
}

pub fn calculate_term_comparison(inputs: &TermComparisonInputs) -> TermComparisonResult {
    let escrow = monthly_escrow(inputs.annual_property_tax, inputs.annual_insurance);
    let fifteen_year = term_option(inputs.loan_amount, inputs.rate_15, 15, escrow);
    let thirty_year = term_option(inputs.loan_amount, inputs.rate_30, 30, escrow);

    let mut balance_15 = inputs.loan_amount;
    let mut balance_30 = inputs.loan_amount;
    let mut equity = Vec::with_capacity(HORIZON_YEARS as usize + 1);
    equity.push(EquityYear {
        year: 0,
        equity_15: 0.0,
        equity_30: 0.0,
    });
    for year in 1..=HORIZON_YEARS {
        balance_15 = amortize_months(
            balance_15,
            inputs.rate_15,
            fifteen_year.principal_and_interest,
            12,
        )
        .0;
        balance_30 = amortize_months(
            balance_30,
            inputs.rate_30,
            thirty_year.principal_and_interest,
            12,
        )
        .0;
        equity.push(EquityYear {
            year,
            equity_15: inputs.loan_amount - balance_15,
            equity_30: inputs.loan_amount - balance_30,
        });
    }

    TermComparisonResult {
        monthly_difference: fifteen_year.monthly_payment - thirty_year.monthly_payment,
        interest_difference: thirty_year.total_interest - fifteen_year.total_interest,
        fifteen_year,
        thirty_year,
        equity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_term_costs_more_monthly_and_less_overall() {
        let result = calculate_term_comparison(&TermComparisonInputs::default());
        assert!(result.monthly_difference > 0.0);
        assert!(result.interest_difference > 0.0);
        assert_eq!(result.fifteen_year.term_years, 15);
        assert_eq!(result.thirty_year.term_years, 30);
    }

    #[test]
    fn fifteen_year_loan_is_fully_owned_at_year_fifteen() {
        let result = calculate_term_comparison(&TermComparisonInputs::default());
        assert_eq!(result.equity.len(), 31);
        assert!((result.equity[15].equity_15 - 300_000.0).abs() < 0.01);
        assert!((result.equity[30].equity_15 - 300_000.0).abs() < 0.01);
        assert!(result.equity[15].equity_30 < result.equity[15].equity_15);
        assert!((result.equity[30].equity_30 - 300_000.0).abs() < 0.01);
    }
}
