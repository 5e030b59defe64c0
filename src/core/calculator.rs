use serde::{Deserialize, Serialize};

/// Every calculator page the site offers, keyed by its URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Calculator {
    #[serde(rename = "mortgage")]
    Mortgage,
    #[serde(rename = "refinance")]
    Refinance,
    #[serde(rename = "extra-payments")]
    ExtraPayments,
    #[serde(rename = "interest-only")]
    InterestOnly,
    #[serde(rename = "affordability")]
    Affordability,
    #[serde(rename = "arm")]
    Arm,
    #[serde(rename = "rent-vs-buy")]
    RentVsBuy,
    #[serde(rename = "personal-loan")]
    PersonalLoan,
    #[serde(rename = "credit-card-refinance")]
    CreditCardRefinance,
    #[serde(rename = "15-vs-30")]
    TermComparison,
    #[serde(rename = "biweekly")]
    Biweekly,
    #[serde(rename = "buydown")]
    Buydown,
    #[serde(rename = "property-tax")]
    PropertyTax,
    #[serde(rename = "fha")]
    Fha,
    #[serde(rename = "va")]
    Va,
    #[serde(rename = "conventional")]
    Conventional,
    #[serde(rename = "dpa")]
    Dpa,
}

impl Calculator {
    pub const ALL: [Calculator; 17] = [
        Calculator::Mortgage,
        Calculator::Refinance,
        Calculator::ExtraPayments,
        Calculator::InterestOnly,
        Calculator::Affordability,
        Calculator::Arm,
        Calculator::RentVsBuy,
        Calculator::PersonalLoan,
        Calculator::CreditCardRefinance,
        Calculator::TermComparison,
        Calculator::Biweekly,
        Calculator::Buydown,
        Calculator::PropertyTax,
        Calculator::Fha,
        Calculator::Va,
        Calculator::Conventional,
        Calculator::Dpa,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Calculator::Mortgage => "mortgage",
            Calculator::Refinance => "refinance",
            Calculator::ExtraPayments => "extra-payments",
            Calculator::InterestOnly => "interest-only",
            Calculator::Affordability => "affordability",
            Calculator::Arm => "arm",
            Calculator::RentVsBuy => "rent-vs-buy",
            Calculator::PersonalLoan => "personal-loan",
            Calculator::CreditCardRefinance => "credit-card-refinance",
            Calculator::TermComparison => "15-vs-30",
            Calculator::Biweekly => "biweekly",
            Calculator::Buydown => "buydown",
            Calculator::PropertyTax => "property-tax",
            Calculator::Fha => "fha",
            Calculator::Va => "va",
            Calculator::Conventional => "conventional",
            Calculator::Dpa => "dpa",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Calculator::Mortgage => "Mortgage Calculator",
            Calculator::Refinance => "Refinance Calculator",
            Calculator::ExtraPayments => "Extra Payments Calculator",
            Calculator::InterestOnly => "Interest-Only Mortgage Calculator",
            Calculator::Affordability => "Home Affordability Calculator",
            Calculator::Arm => "Adjustable-Rate Mortgage Calculator",
            Calculator::RentVsBuy => "Rent vs. Buy Calculator",
            Calculator::PersonalLoan => "Personal Loan Calculator",
            Calculator::CreditCardRefinance => "Credit Card Refinance Calculator",
            Calculator::TermComparison => "15 vs. 30 Year Mortgage Comparison",
            Calculator::Biweekly => "Bi-Weekly Payment Calculator",
            Calculator::Buydown => "Mortgage Buydown Calculator",
            Calculator::PropertyTax => "Property Tax Calculator",
            Calculator::Fha => "FHA Loan Calculator",
            Calculator::Va => "VA Loan Calculator",
            Calculator::Conventional => "Conventional Loan Calculator",
            Calculator::Dpa => "Down Payment Assistance Calculator",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Calculator> {
        let slug = slug.trim().trim_matches('/');
        Calculator::ALL
            .into_iter()
            .find(|calculator| calculator.slug().eq_ignore_ascii_case(slug))
    }
}
