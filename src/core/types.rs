use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub total_payments: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub year: u32,
    pub interest_paid: f64,
    pub principal_paid: f64,
    pub balance: f64,
}

// Mortgage (PITI)

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MortgageInputs {
    pub home_price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub monthly_pmi: f64,
    pub monthly_hoa: f64,
    pub monthly_other: f64,
}

impl Default for MortgageInputs {
    fn default() -> Self {
        Self {
            home_price: 300_000.0,
            down_payment: 60_000.0,
            interest_rate: 7.5,
            term_years: 30,
            annual_property_tax: 2_400.0,
            annual_insurance: 1_200.0,
            monthly_pmi: 0.0,
            monthly_hoa: 0.0,
            monthly_other: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageResult {
    pub loan_amount: f64,
    pub down_payment_percent: f64,
    pub principal_and_interest: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_pmi: f64,
    pub monthly_hoa: f64,
    pub monthly_other: f64,
    pub total_monthly_payment: f64,
    pub total_interest: f64,
    pub schedule: Vec<AmortizationRow>,
}

// Loan programs

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FhaInputs {
    pub purchase_price: f64,
    /// Defaults to the 3.5% FHA minimum when absent.
    pub down_payment: Option<f64>,
    pub interest_rate: f64,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub monthly_mi: f64,
    pub closing_costs: Option<f64>,
}

impl Default for FhaInputs {
    fn default() -> Self {
        Self {
            purchase_price: 300_000.0,
            down_payment: None,
            interest_rate: 7.5,
            term_years: 30,
            annual_property_tax: 3_000.0,
            annual_insurance: 1_200.0,
            monthly_mi: 0.0,
            closing_costs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FhaResult {
    pub down_payment: f64,
    pub base_loan_amount: f64,
    pub ufmip: f64,
    pub total_loan_amount: f64,
    pub principal_and_interest: f64,
    pub total_monthly_payment: f64,
    pub closing_costs: f64,
    pub total_cash_required: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaInputs {
    pub purchase_price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub first_use: bool,
    pub funding_fee_exempt: bool,
    pub closing_costs: Option<f64>,
}

impl Default for VaInputs {
    fn default() -> Self {
        Self {
            purchase_price: 300_000.0,
            down_payment: 0.0,
            interest_rate: 7.5,
            term_years: 30,
            annual_property_tax: 3_000.0,
            annual_insurance: 1_200.0,
            first_use: true,
            funding_fee_exempt: false,
            closing_costs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaResult {
    pub base_loan_amount: f64,
    pub funding_fee_percent: f64,
    pub funding_fee: f64,
    pub total_loan_amount: f64,
    pub principal_and_interest: f64,
    pub total_monthly_payment: f64,
    pub closing_costs: f64,
    pub total_cash_required: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConventionalInputs {
    pub purchase_price: f64,
    pub first_time_buyer: bool,
    /// Defaults to the program minimum (3% first-time, 5% otherwise).
    pub down_payment: Option<f64>,
    pub interest_rate: f64,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub monthly_mi: f64,
    pub closing_costs: Option<f64>,
}

impl Default for ConventionalInputs {
    fn default() -> Self {
        Self {
            purchase_price: 300_000.0,
            first_time_buyer: false,
            down_payment: None,
            interest_rate: 7.5,
            term_years: 30,
            annual_property_tax: 3_000.0,
            annual_insurance: 1_200.0,
            monthly_mi: 0.0,
            closing_costs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConventionalResult {
    pub down_payment: f64,
    pub down_payment_percent: f64,
    pub loan_amount: f64,
    pub mortgage_insurance_required: bool,
    pub principal_and_interest: f64,
    pub total_monthly_payment: f64,
    pub closing_costs: f64,
    pub total_cash_required: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DpaInputs {
    pub purchase_price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub monthly_mi: f64,
    pub assistance_amount: f64,
    pub assistance_forgivable: bool,
    pub assistance_rate: f64,
    pub forgiveness_years: u32,
    pub closing_costs: Option<f64>,
}

impl Default for DpaInputs {
    fn default() -> Self {
        Self {
            purchase_price: 300_000.0,
            down_payment: 9_000.0,
            interest_rate: 7.5,
            term_years: 30,
            annual_property_tax: 3_000.0,
            annual_insurance: 1_200.0,
            monthly_mi: 150.0,
            assistance_amount: 6_000.0,
            assistance_forgivable: false,
            assistance_rate: 9.5,
            forgiveness_years: 5,
            closing_costs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DpaResult {
    pub first_mortgage_amount: f64,
    pub first_mortgage_payment: f64,
    pub assistance_payment: f64,
    pub assistance_term_months: u32,
    pub forgiveness_years: Option<u32>,
    pub total_monthly_payment: f64,
    pub closing_costs: f64,
    pub total_cash_required: f64,
}

// Adjustable rate

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArmInputs {
    pub home_price: f64,
    pub down_payment: f64,
    pub initial_rate: f64,
    pub initial_period_years: u32,
    pub adjustment_cap: f64,
    pub lifetime_cap: f64,
    pub margin: f64,
    pub index_rate: f64,
    pub term_years: u32,
}

impl Default for ArmInputs {
    fn default() -> Self {
        Self {
            home_price: 300_000.0,
            down_payment: 60_000.0,
            initial_rate: 5.5,
            initial_period_years: 5,
            adjustment_cap: 2.0,
            lifetime_cap: 5.0,
            margin: 2.75,
            index_rate: 4.5,
            term_years: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmYear {
    pub year: u32,
    pub rate: f64,
    pub monthly_payment: f64,
    pub annual_payment: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmResult {
    pub loan_amount: f64,
    pub initial_monthly_payment: f64,
    pub max_rate: f64,
    pub max_monthly_payment: f64,
    pub total_interest: f64,
    pub schedule: Vec<ArmYear>,
}

// Buydown

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuydownPlan {
    #[serde(rename = "1-0", alias = "oneZero")]
    OneZero,
    #[serde(rename = "2-1", alias = "twoOne")]
    TwoOne,
    #[serde(rename = "3-2-1", alias = "threeTwoOne")]
    ThreeTwoOne,
}

impl BuydownPlan {
    /// Rate reduction in percentage points for each bought-down year.
    pub fn reductions(self) -> &'static [f64] {
        match self {
            BuydownPlan::OneZero => &[1.0],
            BuydownPlan::TwoOne => &[2.0, 1.0],
            BuydownPlan::ThreeTwoOne => &[3.0, 2.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuydownInputs {
    pub loan_amount: f64,
    pub base_rate: f64,
    pub plan: BuydownPlan,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
}

impl Default for BuydownInputs {
    fn default() -> Self {
        Self {
            loan_amount: 300_000.0,
            base_rate: 7.5,
            plan: BuydownPlan::TwoOne,
            term_years: 30,
            annual_property_tax: 3_000.0,
            annual_insurance: 1_200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuydownYear {
    pub year: u32,
    pub rate: f64,
    pub monthly_payment: f64,
    pub monthly_savings: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuydownResult {
    pub base_monthly_payment: f64,
    pub schedule: Vec<BuydownYear>,
    pub total_cost: f64,
}

// Affordability

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffordabilityInputs {
    pub annual_income: f64,
    pub monthly_debts: f64,
    pub credit_card_payments: f64,
    pub car_payments: f64,
    pub student_loans: f64,
    pub other_debts: f64,
    pub interest_rate: f64,
    pub down_payment_percent: f64,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub monthly_hoa: f64,
}

impl Default for AffordabilityInputs {
    fn default() -> Self {
        Self {
            annual_income: 100_000.0,
            monthly_debts: 500.0,
            credit_card_payments: 200.0,
            car_payments: 300.0,
            student_loans: 200.0,
            other_debts: 0.0,
            interest_rate: 7.5,
            down_payment_percent: 20.0,
            term_years: 30,
            annual_property_tax: 2_400.0,
            annual_insurance: 1_200.0,
            monthly_hoa: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityResult {
    pub total_monthly_debts: f64,
    pub front_end_limit: f64,
    pub back_end_limit: f64,
    pub max_monthly_payment: f64,
    pub principal_and_interest_budget: f64,
    pub loan_amount: f64,
    pub down_payment: f64,
    pub max_home_price: f64,
}

// Refinance

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefinanceInputs {
    pub current_balance: f64,
    pub current_rate: f64,
    pub remaining_term_years: u32,
    pub new_loan_amount: f64,
    pub new_rate: f64,
    pub new_term_years: u32,
    pub closing_costs: f64,
    pub escrow_refund: f64,
    pub skipped_payments: u32,
}

impl Default for RefinanceInputs {
    fn default() -> Self {
        Self {
            current_balance: 300_000.0,
            current_rate: 7.5,
            remaining_term_years: 25,
            new_loan_amount: 300_000.0,
            new_rate: 6.5,
            new_term_years: 30,
            closing_costs: 5_000.0,
            escrow_refund: 2_000.0,
            skipped_payments: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceResult {
    pub current_loan: LoanSummary,
    pub new_loan: LoanSummary,
    pub monthly_savings: f64,
    pub lifetime_savings: f64,
    pub net_closing_costs: f64,
    /// `None` when the new payment is not lower, so the costs are never recovered.
    pub break_even_months: Option<u32>,
}

// Rent vs buy

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RentVsBuyInputs {
    pub home_price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub annual_maintenance: f64,
    pub monthly_hoa: f64,
    pub appreciation_rate: f64,
    pub monthly_rent: f64,
    pub rent_increase_rate: f64,
    pub annual_renters_insurance: f64,
    pub investment_return: f64,
    pub inflation_rate: f64,
    pub years: u32,
}

impl Default for RentVsBuyInputs {
    fn default() -> Self {
        Self {
            home_price: 300_000.0,
            down_payment: 60_000.0,
            interest_rate: 7.5,
            term_years: 30,
            annual_property_tax: 3_000.0,
            annual_insurance: 1_200.0,
            annual_maintenance: 3_000.0,
            monthly_hoa: 0.0,
            appreciation_rate: 4.0,
            monthly_rent: 2_000.0,
            rent_increase_rate: 3.0,
            annual_renters_insurance: 200.0,
            investment_return: 7.0,
            inflation_rate: 2.5,
            years: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthYear {
    pub year: u32,
    pub home_value: f64,
    pub mortgage_balance: f64,
    pub monthly_rent: f64,
    pub buying_net_worth: f64,
    pub renting_net_worth: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentVsBuyResult {
    pub loan_amount: f64,
    pub monthly_mortgage: f64,
    pub monthly_buying_cost: f64,
    pub years: Vec<NetWorthYear>,
    pub crossover_year: Option<u32>,
    pub final_advantage_buying: f64,
    pub real_final_buying_net_worth: f64,
    pub real_final_renting_net_worth: f64,
}

// Credit card consolidation

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditCard {
    pub balance: f64,
    pub rate: f64,
    pub min_payment: f64,
}

impl Default for CreditCard {
    fn default() -> Self {
        Self {
            balance: 5_000.0,
            rate: 19.99,
            min_payment: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditCardInputs {
    pub cards: Vec<CreditCard>,
    pub loan_rate: f64,
    pub loan_term_months: u32,
    pub origination_fee_percent: f64,
}

impl Default for CreditCardInputs {
    fn default() -> Self {
        Self {
            cards: vec![CreditCard::default()],
            loan_rate: 8.99,
            loan_term_months: 36,
            origination_fee_percent: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayoff {
    pub months: u32,
    pub total_interest: f64,
    pub paid_off: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardResult {
    pub total_balance: f64,
    pub loan_amount: f64,
    pub current_monthly_payment: f64,
    pub current_total_interest: f64,
    pub current_payoff_months: u32,
    pub new_monthly_payment: f64,
    pub new_total_interest: f64,
    pub new_payoff_months: u32,
    pub monthly_savings: f64,
    pub interest_savings: f64,
    pub months_saved: i64,
    pub cards: Vec<CardPayoff>,
}

// Property tax

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UsState {
    Ca,
    Ga,
    Tx,
    Fl,
    Ny,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyTaxInputs {
    pub property_value: f64,
    pub state: UsState,
    pub county: Option<String>,
    /// Overrides the state default when present.
    pub assessment_ratio: Option<f64>,
    pub mill_rate: Option<f64>,
    pub exemptions: f64,
}

impl Default for PropertyTaxInputs {
    fn default() -> Self {
        Self {
            property_value: 300_000.0,
            state: UsState::Ca,
            county: None,
            assessment_ratio: None,
            mill_rate: None,
            exemptions: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTaxResult {
    pub assessment_ratio: f64,
    pub mill_rate: f64,
    pub assessed_value: f64,
    pub annual_tax: f64,
    pub monthly_tax: f64,
    pub effective_rate: f64,
}

// Personal loan

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalLoanInputs {
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub term_months: u32,
    pub origination_fee_percent: f64,
    pub other_fees: f64,
}

impl Default for PersonalLoanInputs {
    fn default() -> Self {
        Self {
            loan_amount: 10_000.0,
            interest_rate: 12.99,
            term_months: 36,
            origination_fee_percent: 2.0,
            other_fees: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalLoanResult {
    pub fees: f64,
    pub financed_amount: f64,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub apr: f64,
}

// Extra payments

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtraPaymentFrequency {
    Monthly,
    #[serde(alias = "bi-weekly")]
    Biweekly,
    Annual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtraPaymentsInputs {
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub frequency: ExtraPaymentFrequency,
    pub extra_payment: f64,
}

impl Default for ExtraPaymentsInputs {
    fn default() -> Self {
        Self {
            loan_amount: 300_000.0,
            interest_rate: 7.5,
            term_years: 30,
            frequency: ExtraPaymentFrequency::Monthly,
            extra_payment: 200.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentsResult {
    pub regular_payment: f64,
    pub extra_monthly_amount: f64,
    pub regular_months: u32,
    pub regular_total_interest: f64,
    pub months_to_payoff: u32,
    pub total_interest: f64,
    pub interest_saved: f64,
    pub months_saved: u32,
}

// Bi-weekly

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BiweeklyInputs {
    pub loan_amount: f64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
}

impl Default for BiweeklyInputs {
    fn default() -> Self {
        Self {
            loan_amount: 300_000.0,
            interest_rate: 7.5,
            term_years: 30,
            annual_property_tax: 3_000.0,
            annual_insurance: 1_200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiweeklyYear {
    pub year: u32,
    pub monthly_balance: f64,
    pub biweekly_balance: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiweeklyResult {
    pub monthly_principal_and_interest: f64,
    pub biweekly_principal_and_interest: f64,
    pub monthly_payment: f64,
    pub biweekly_payment: f64,
    pub monthly_total_interest: f64,
    pub biweekly_total_interest: f64,
    pub interest_saved: f64,
    pub monthly_payoff_months: u32,
    pub biweekly_payoff_months: u32,
    pub balances: Vec<BiweeklyYear>,
}

// 15 vs 30 year

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TermComparisonInputs {
    pub loan_amount: f64,
    pub rate_15: f64,
    pub rate_30: f64,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
}

impl Default for TermComparisonInputs {
    fn default() -> Self {
        Self {
            loan_amount: 300_000.0,
            rate_15: 6.5,
            rate_30: 7.0,
            annual_property_tax: 3_000.0,
            annual_insurance: 1_200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermOption {
    pub term_years: u32,
    pub rate: f64,
    pub principal_and_interest: f64,
    pub monthly_payment: f64,
    pub total_payments: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityYear {
    pub year: u32,
    pub equity_15: f64,
    pub equity_30: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermComparisonResult {
    pub fifteen_year: TermOption,
    pub thirty_year: TermOption,
    pub monthly_difference: f64,
    pub interest_difference: f64,
    pub equity: Vec<EquityYear>,
}

// Interest only

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterestOnlyInputs {
    pub home_price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub interest_only_years: u32,
    pub term_years: u32,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub monthly_pmi: f64,
    pub monthly_hoa: f64,
}

impl Default for InterestOnlyInputs {
    fn default() -> Self {
        Self {
            home_price: 300_000.0,
            down_payment: 60_000.0,
            interest_rate: 7.5,
            interest_only_years: 10,
            term_years: 30,
            annual_property_tax: 2_400.0,
            annual_insurance: 1_200.0,
            monthly_pmi: 0.0,
            monthly_hoa: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestOnlyResult {
    pub loan_amount: f64,
    pub interest_only_payment: f64,
    pub amortizing_payment: f64,
    pub payment_increase: f64,
    pub monthly_expenses: f64,
    pub interest_only_monthly_total: f64,
    pub amortizing_monthly_total: f64,
    pub interest_only_total_interest: f64,
    pub amortizing_total_interest: f64,
    pub total_interest: f64,
    pub total_principal: f64,
}
