use super::amortization::monthly_payment;
use super::mortgage::{down_payment_percent, estimated_closing_costs, monthly_escrow};
use super::types::{
    ConventionalInputs, ConventionalResult, DpaInputs, DpaResult, FhaInputs, FhaResult, VaInputs,
    VaResult,
};

const FHA_MIN_DOWN: f64 = 0.035;
const FHA_UFMIP_RATE: f64 = 0.0175;
const CONVENTIONAL_FIRST_TIME_MIN_DOWN: f64 = 0.03;
const CONVENTIONAL_MIN_DOWN: f64 = 0.05;
const PMI_FREE_DOWN_PERCENT: f64 = 20.0;
const DPA_TERM_MONTHS: u32 = 120;

pub fn calculate_fha(inputs: &FhaInputs) -> FhaResult {
    let down_payment = inputs
        .down_payment
        .unwrap_or(inputs.purchase_price * FHA_MIN_DOWN);
    let base_loan_amount = inputs.purchase_price - down_payment;
    let ufmip = base_loan_amount * FHA_UFMIP_RATE;
    let total_loan_amount = base_loan_amount + ufmip;

    let principal_and_interest =
        monthly_payment(total_loan_amount, inputs.interest_rate, inputs.term_years * 12);
    let total_monthly_payment = principal_and_interest
        + monthly_escrow(inputs.annual_property_tax, inputs.annual_insurance)
        + inputs.monthly_mi;
    let closing_costs = inputs
        .closing_costs
        .unwrap_or_else(|| estimated_closing_costs(inputs.purchase_price));

    FhaResult {
        down_payment,
        base_loan_amount,
        ufmip,
        total_loan_amount,
        principal_and_interest,
        total_monthly_payment,
        closing_costs,
        total_cash_required: down_payment + closing_costs,
    }
}

pub fn va_funding_fee_percent(down_payment_percent: f64, first_use: bool, exempt: bool) -> f64 {
    if exempt {
        return 0.0;
    }
    match (first_use, down_payment_percent) {
        (true, pct) if pct < 5.0 => 2.3,
        (false, pct) if pct < 5.0 => 3.6,
        (_, pct) if pct < 10.0 => 1.65,
        _ => 1.4,
    }
}

pub fn calculate_va(inputs: &VaInputs) -> VaResult {
    let down_pct = down_payment_percent(inputs.down_payment, inputs.purchase_price);
    let funding_fee_percent =
        va_funding_fee_percent(down_pct, inputs.first_use, inputs.funding_fee_exempt);
    let base_loan_amount = inputs.purchase_price - inputs.down_payment;
    let funding_fee = base_loan_amount * funding_fee_percent / 100.0;
    let total_loan_amount = base_loan_amount + funding_fee;

    let principal_and_interest =
        monthly_payment(total_loan_amount, inputs.interest_rate, inputs.term_years * 12);
    let closing_costs = inputs
        .closing_costs
        .unwrap_or_else(|| estimated_closing_costs(inputs.purchase_price));

    VaResult {
        base_loan_amount,
        funding_fee_percent,
        funding_fee,
        total_loan_amount,
        principal_and_interest,
        total_monthly_payment: principal_and_interest
            + monthly_escrow(inputs.annual_property_tax, inputs.annual_insurance),
        closing_costs,
        total_cash_required: inputs.down_payment + closing_costs,
    }
}

pub fn calculate_conventional(inputs: &ConventionalInputs) -> ConventionalResult {
    let min_down = if inputs.first_time_buyer {
        CONVENTIONAL_FIRST_TIME_MIN_DOWN
    } else {
        CONVENTIONAL_MIN_DOWN
    };
    let down_payment = inputs
        .down_payment
        .unwrap_or(inputs.purchase_price * min_down);
    let loan_amount = inputs.purchase_price - down_payment;
    let down_payment_percent = down_payment_percent(down_payment, inputs.purchase_price);

    let principal_and_interest =
        monthly_payment(loan_amount, inputs.interest_rate, inputs.term_years * 12);
    let closing_costs = inputs
        .closing_costs
        .unwrap_or_else(|| estimated_closing_costs(inputs.purchase_price));

    ConventionalResult {
        down_payment,
        down_payment_percent,
        loan_amount,
        mortgage_insurance_required: down_payment_percent < PMI_FREE_DOWN_PERCENT,
        principal_and_interest,
        total_monthly_payment: principal_and_interest
            + monthly_escrow(inputs.annual_property_tax, inputs.annual_insurance)
            + inputs.monthly_mi,
        closing_costs,
        total_cash_required: down_payment + closing_costs,
    }
}

pub fn calculate_dpa(inputs: &DpaInputs) -> DpaResult {
    let first_mortgage_amount =
        inputs.purchase_price - inputs.down_payment - inputs.assistance_amount;
    let first_mortgage_payment = monthly_payment(
        first_mortgage_amount,
        inputs.interest_rate,
        inputs.term_years * 12,
    );
    let assistance_payment = if inputs.assistance_forgivable {
        0.0
    } else {
        monthly_payment(
            inputs.assistance_amount,
            inputs.assistance_rate,
            DPA_TERM_MONTHS,
        )
    };
    let closing_costs = inputs
        .closing_costs
        .unwrap_or_else(|| estimated_closing_costs(inputs.purchase_price));

    DpaResult {
        first_mortgage_amount,
        first_mortgage_payment,
        assistance_payment,
        assistance_term_months: if inputs.assistance_forgivable {
            0
        } else {
            DPA_TERM_MONTHS
        },
        forgiveness_years: inputs
            .assistance_forgivable
            .then_some(inputs.forgiveness_years),
        total_monthly_payment: first_mortgage_payment
            + assistance_payment
            + monthly_escrow(inputs.annual_property_tax, inputs.annual_insurance)
            + inputs.monthly_mi,
        closing_costs,
        total_cash_required: inputs.down_payment + closing_costs,
    }
}
