mod affordability;
mod amortization;
mod arm;
mod biweekly;
mod buydown;
mod calculator;
mod credit_card;
mod extra_payments;
mod format;
mod interest_only;
mod mortgage;
mod personal_loan;
mod programs;
mod property_tax;
mod refinance;
mod rent_vs_buy;
mod term_comparison;
mod types;

pub use affordability::{BACK_END_RATIO, FRONT_END_RATIO, calculate_affordability};
pub use amortization::{
    amortize_months, is_paid_off, loan_summary, max_principal, monthly_payment, monthly_rate,
    schedule,
};
pub use arm::{adjusted_rate, calculate_arm};
pub use biweekly::calculate_biweekly;
pub use buydown::calculate_buydown;
pub use calculator::Calculator;
pub use credit_card::{MAX_PAYOFF_MONTHS, calculate_credit_card, simulate_card_payoff};
pub use extra_payments::{calculate_extra_payments, extra_monthly_amount};
pub use format::{format_currency, format_months, format_percent, render_summary};
pub use interest_only::calculate_interest_only;
pub use mortgage::{
    calculate_mortgage, down_payment_percent, estimated_closing_costs, monthly_escrow,
};
pub use personal_loan::calculate_personal_loan;
pub use programs::{
    calculate_conventional, calculate_dpa, calculate_fha, calculate_va, va_funding_fee_percent,
};
pub use property_tax::{
    GEORGIA_COUNTY_MILL_RATES, STATE_DEFAULTS, StateTaxDefaults, calculate_property_tax,
    county_mill_rate, state_defaults,
};
pub use refinance::{break_even_months, calculate_refinance};
pub use rent_vs_buy::calculate_rent_vs_buy;
pub use term_comparison::calculate_term_comparison;
pub use types::{
    AffordabilityInputs, AffordabilityResult, AmortizationRow, ArmInputs, ArmResult, ArmYear,
    BiweeklyInputs, BiweeklyResult, BiweeklyYear, BuydownInputs, BuydownPlan, BuydownResult,
    BuydownYear, CardPayoff, ConventionalInputs, ConventionalResult, CreditCard,
    CreditCardInputs, CreditCardResult, DpaInputs, DpaResult, EquityYear, ExtraPaymentFrequency,
    ExtraPaymentsInputs, ExtraPaymentsResult, FhaInputs, FhaResult, InterestOnlyInputs,
    InterestOnlyResult, LoanSummary, MortgageInputs, MortgageResult, NetWorthYear,
    PersonalLoanInputs, PersonalLoanResult, PropertyTaxInputs, PropertyTaxResult,
    RefinanceInputs, RefinanceResult, RentVsBuyInputs, RentVsBuyResult, TermComparisonInputs,
    TermComparisonResult, TermOption, UsState, VaInputs, VaResult,
};
