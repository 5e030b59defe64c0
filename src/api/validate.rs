use crate::core::{
    AffordabilityInputs, ArmInputs, BiweeklyInputs, BuydownInputs, ConventionalInputs,
    CreditCardInputs, DpaInputs, ExtraPaymentsInputs, FhaInputs, InterestOnlyInputs,
    MortgageInputs, PersonalLoanInputs, PropertyTaxInputs, RefinanceInputs, RentVsBuyInputs,
    TermComparisonInputs, VaInputs,
};
use crate::error::CalcError;

const MAX_TERM_YEARS: u32 = 50;
const MAX_TERM_MONTHS: u32 = MAX_TERM_YEARS * 12;

/// Range checks applied to a payload after it has been merged over the page
/// defaults. Core formulas assume these hold.
pub(crate) trait Validate {
    fn validate(&self) -> Result<(), CalcError>;
}

fn amount(field: &str, value: f64) -> Result<(), CalcError> {
    if !value.is_finite() {
        return Err(CalcError::invalid(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(format!("{field} must be >= 0")));
    }
    Ok(())
}

fn optional_amount(field: &str, value: Option<f64>) -> Result<(), CalcError> {
    value.map_or(Ok(()), |value| amount(field, value))
}

fn rate(field: &str, value: f64) -> Result<(), CalcError> {
    amount(field, value)?;
    if value > 100.0 {
        return Err(CalcError::invalid(format!("{field} must be between 0 and 100")));
    }
    Ok(())
}

/// Signed growth rates (appreciation, returns) may be negative.
fn growth_rate(field: &str, value: f64) -> Result<(), CalcError> {
    if !value.is_finite() || !(-100.0..=100.0).contains(&value) {
        return Err(CalcError::invalid(format!(
            "{field} must be between -100 and 100"
        )));
    }
    Ok(())
}

fn term(field: &str, value: u32, max: u32) -> Result<(), CalcError> {
    if value == 0 || value > max {
        return Err(CalcError::invalid(format!("{field} must be between 1 and {max}")));
    }
    Ok(())
}

fn not_above(field: &str, value: f64, limit_field: &str, limit: f64) -> Result<(), CalcError> {
    if value > limit {
        return Err(CalcError::invalid(format!(
            "{field} must be <= {limit_field}"
        )));
    }
    Ok(())
}

fn purchase(
    price: f64,
    down_payment: Option<f64>,
    interest_rate: f64,
    term_years: u32,
    annual_property_tax: f64,
    annual_insurance: f64,
) -> Result<(), CalcError> {
    amount("purchasePrice", price)?;
    optional_amount("downPayment", down_payment)?;
    if let Some(down_payment) = down_payment {
        not_above("downPayment", down_payment, "purchasePrice", price)?;
    }
    rate("interestRate", interest_rate)?;
    term("termYears", term_years, MAX_TERM_YEARS)?;
    amount("annualPropertyTax", annual_property_tax)?;
    amount("annualInsurance", annual_insurance)
}

impl Validate for MortgageInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("homePrice", self.home_price)?;
        amount("downPayment", self.down_payment)?;
        not_above("downPayment", self.down_payment, "homePrice", self.home_price)?;
        rate("interestRate", self.interest_rate)?;
        term("termYears", self.term_years, MAX_TERM_YEARS)?;
        amount("annualPropertyTax", self.annual_property_tax)?;
        amount("annualInsurance", self.annual_insurance)?;
        amount("monthlyPmi", self.monthly_pmi)?;
        amount("monthlyHoa", self.monthly_hoa)?;
        amount("monthlyOther", self.monthly_other)
    }
}

impl Validate for FhaInputs {
    fn validate(&self) -> Result<(), CalcError> {
        purchase(
            self.purchase_price,
            self.down_payment,
            self.interest_rate,
            self.term_years,
            self.annual_property_tax,
            self.annual_insurance,
        )?;
        amount("monthlyMi", self.monthly_mi)?;
        optional_amount("closingCosts", self.closing_costs)
    }
}

impl Validate for VaInputs {
    fn validate(&self) -> Result<(), CalcError> {
        purchase(
            self.purchase_price,
            Some(self.down_payment),
            self.interest_rate,
            self.term_years,
            self.annual_property_tax,
            self.annual_insurance,
        )?;
        optional_amount("closingCosts", self.closing_costs)
    }
}

impl Validate for ConventionalInputs {
    fn validate(&self) -> Result<(), CalcError> {
        purchase(
            self.purchase_price,
            self.down_payment,
            self.interest_rate,
            self.term_years,
            self.annual_property_tax,
            self.annual_insurance,
        )?;
        amount("monthlyMi", self.monthly_mi)?;
        optional_amount("closingCosts", self.closing_costs)
    }
}

impl Validate for DpaInputs {
    fn validate(&self) -> Result<(), CalcError> {
        purchase(
            self.purchase_price,
            Some(self.down_payment),
            self.interest_rate,
            self.term_years,
            self.annual_property_tax,
            self.annual_insurance,
        )?;
        amount("monthlyMi", self.monthly_mi)?;
        amount("assistanceAmount", self.assistance_amount)?;
        not_above(
            "downPayment + assistanceAmount",
            self.down_payment + self.assistance_amount,
            "purchasePrice",
            self.purchase_price,
        )?;
        rate("assistanceRate", self.assistance_rate)?;
        if self.assistance_forgivable {
            term("forgivenessYears", self.forgiveness_years, MAX_TERM_YEARS)?;
        }
        optional_amount("closingCosts", self.closing_costs)
    }
}

impl Validate for ArmInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("homePrice", self.home_price)?;
        amount("downPayment", self.down_payment)?;
        not_above("downPayment", self.down_payment, "homePrice", self.home_price)?;
        rate("initialRate", self.initial_rate)?;
        term("termYears", self.term_years, MAX_TERM_YEARS)?;
        term("initialPeriodYears", self.initial_period_years, self.term_years)?;
        rate("adjustmentCap", self.adjustment_cap)?;
        rate("lifetimeCap", self.lifetime_cap)?;
        rate("margin", self.margin)?;
        rate("indexRate", self.index_rate)
    }
}

impl Validate for BuydownInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("loanAmount", self.loan_amount)?;
        rate("baseRate", self.base_rate)?;
        term("termYears", self.term_years, MAX_TERM_YEARS)?;
        amount("annualPropertyTax", self.annual_property_tax)?;
        amount("annualInsurance", self.annual_insurance)
    }
}

impl Validate for AffordabilityInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("annualIncome", self.annual_income)?;
        amount("monthlyDebts", self.monthly_debts)?;
        amount("creditCardPayments", self.credit_card_payments)?;
        amount("carPayments", self.car_payments)?;
        amount("studentLoans", self.student_loans)?;
        amount("otherDebts", self.other_debts)?;
        rate("interestRate", self.interest_rate)?;
        // 100% down leaves nothing to finance and divides by zero.
        if !self.down_payment_percent.is_finite()
            || !(0.0..100.0).contains(&self.down_payment_percent)
        {
            return Err(CalcError::invalid(
                "downPaymentPercent must be >= 0 and < 100",
            ));
        }
        term("termYears", self.term_years, MAX_TERM_YEARS)?;
        amount("annualPropertyTax", self.annual_property_tax)?;
        amount("annualInsurance", self.annual_insurance)?;
        amount("monthlyHoa", self.monthly_hoa)
    }
}

impl Validate for RefinanceInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("currentBalance", self.current_balance)?;
        rate("currentRate", self.current_rate)?;
        term("remainingTermYears", self.remaining_term_years, MAX_TERM_YEARS)?;
        amount("newLoanAmount", self.new_loan_amount)?;
        rate("newRate", self.new_rate)?;
        term("newTermYears", self.new_term_years, MAX_TERM_YEARS)?;
        amount("closingCosts", self.closing_costs)?;
        amount("escrowRefund", self.escrow_refund)?;
        if self.skipped_payments > 3 {
            return Err(CalcError::invalid("skippedPayments must be between 0 and 3"));
        }
        Ok(())
    }
}

impl Validate for RentVsBuyInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("homePrice", self.home_price)?;
        amount("downPayment", self.down_payment)?;
        not_above("downPayment", self.down_payment, "homePrice", self.home_price)?;
        rate("interestRate", self.interest_rate)?;
        term("termYears", self.term_years, MAX_TERM_YEARS)?;
        amount("annualPropertyTax", self.annual_property_tax)?;
        amount("annualInsurance", self.annual_insurance)?;
        amount("annualMaintenance", self.annual_maintenance)?;
        amount("monthlyHoa", self.monthly_hoa)?;
        growth_rate("appreciationRate", self.appreciation_rate)?;
        amount("monthlyRent", self.monthly_rent)?;
        growth_rate("rentIncreaseRate", self.rent_increase_rate)?;
        amount("annualRentersInsurance", self.annual_renters_insurance)?;
        growth_rate("investmentReturn", self.investment_return)?;
        growth_rate("inflationRate", self.inflation_rate)?;
        // Real values divide by (1 + inflation)^years.
        if self.inflation_rate <= -100.0 {
            return Err(CalcError::invalid("inflationRate must be > -100"));
        }
        term("years", self.years, MAX_TERM_YEARS)
    }
}

impl Validate for CreditCardInputs {
    fn validate(&self) -> Result<(), CalcError> {
        if self.cards.is_empty() {
            return Err(CalcError::invalid("cards must contain at least one card"));
        }
        for (idx, card) in self.cards.iter().enumerate() {
            amount(&format!("cards[{idx}].balance"), card.balance)?;
            rate(&format!("cards[{idx}].rate"), card.rate)?;
            amount(&format!("cards[{idx}].minPayment"), card.min_payment)?;
        }
        rate("loanRate", self.loan_rate)?;
        term("loanTermMonths", self.loan_term_months, MAX_TERM_MONTHS)?;
        rate("originationFeePercent", self.origination_fee_percent)
    }
}

impl Validate for PropertyTaxInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("propertyValue", self.property_value)?;
        if let Some(ratio) = self.assessment_ratio {
            rate("assessmentRatio", ratio)?;
        }
        optional_amount("millRate", self.mill_rate)?;
        amount("exemptions", self.exemptions)
    }
}

impl Validate for PersonalLoanInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("loanAmount", self.loan_amount)?;
        rate("interestRate", self.interest_rate)?;
        term("termMonths", self.term_months, MAX_TERM_MONTHS)?;
        rate("originationFeePercent", self.origination_fee_percent)?;
        amount("otherFees", self.other_fees)
    }
}

impl Validate for ExtraPaymentsInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("loanAmount", self.loan_amount)?;
        rate("interestRate", self.interest_rate)?;
        term("termYears", self.term_years, MAX_TERM_YEARS)?;
        amount("extraPayment", self.extra_payment)
    }
}

impl Validate for BiweeklyInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("loanAmount", self.loan_amount)?;
        rate("interestRate", self.interest_rate)?;
        term("termYears", self.term_years, MAX_TERM_YEARS)?;
        amount("annualPropertyTax", self.annual_property_tax)?;
        amount("annualInsurance", self.annual_insurance)
    }
}

impl Validate for TermComparisonInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("loanAmount", self.loan_amount)?;
        rate("rate15", self.rate_15)?;
        rate("rate30", self.rate_30)?;
        amount("annualPropertyTax", self.annual_property_tax)?;
        amount("annualInsurance", self.annual_insurance)
    }
}

impl Validate for InterestOnlyInputs {
    fn validate(&self) -> Result<(), CalcError> {
        amount("homePrice", self.home_price)?;
        amount("downPayment", self.down_payment)?;
        not_above("downPayment", self.down_payment, "homePrice", self.home_price)?;
        rate("interestRate", self.interest_rate)?;
        term("termYears", self.term_years, MAX_TERM_YEARS)?;
        if self.interest_only_years > self.term_years {
            return Err(CalcError::invalid("interestOnlyYears must be <= termYears"));
        }
        amount("annualPropertyTax", self.annual_property_tax)?;
        amount("annualInsurance", self.annual_insurance)?;
        amount("monthlyPmi", self.monthly_pmi)?;
        amount("monthlyHoa", self.monthly_hoa)
    }
}
