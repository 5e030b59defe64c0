//! The site's page table: every navigable path and what it renders.

use serde::Serialize;

use crate::core::Calculator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "calculator", rename_all = "camelCase")]
pub enum PageKind {
    Home,
    About,
    Blog,
    BlogPost(Calculator),
    Calculator(Calculator),
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRoute {
    pub path: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub kind: PageKind,
}

const fn page(path: &'static str, title: &'static str, kind: PageKind) -> PageRoute {
    PageRoute { path, title, kind }
}

const fn post(path: &'static str, title: &'static str, calculator: Calculator) -> PageRoute {
    page(path, title, PageKind::BlogPost(calculator))
}

pub const ROUTES: [PageRoute; 38] = [
    page("/", "Good Loan Calculators", PageKind::Home),
    page("/about", "About Good Loan Calculators", PageKind::About),
    page("/blog", "Blog", PageKind::Blog),
    post(
        "/blog/mortgage-calculator",
        "How to Use Our Mortgage Calculator",
        Calculator::Mortgage,
    ),
    post(
        "/blog/affordability-calculator",
        "Understanding Home Affordability",
        Calculator::Affordability,
    ),
    post(
        "/blog/refinance-calculator",
        "Should You Refinance Your Mortgage?",
        Calculator::Refinance,
    ),
    post(
        "/blog/arm-calculator",
        "Understanding Adjustable Rate Mortgages",
        Calculator::Arm,
    ),
    post(
        "/blog/rent-vs-buy",
        "Renting vs. Buying: Making the Right Choice",
        Calculator::RentVsBuy,
    ),
    post(
        "/blog/biweekly-payments",
        "The Power of Bi-Weekly Mortgage Payments",
        Calculator::Biweekly,
    ),
    post(
        "/blog/buydown-calculator",
        "Understanding Temporary Mortgage Rate Buydowns",
        Calculator::Buydown,
    ),
    post(
        "/blog/property-tax",
        "How Property Taxes Work",
        Calculator::PropertyTax,
    ),
    post(
        "/blog/15-vs-30",
        "15-Year vs. 30-Year Mortgage: Which Is Right for You?",
        Calculator::TermComparison,
    ),
    post(
        "/blog/interest-only",
        "How Interest-Only Mortgages Work",
        Calculator::InterestOnly,
    ),
    post(
        "/blog/extra-payments",
        "Paying Off Your Mortgage Early with Extra Payments",
        Calculator::ExtraPayments,
    ),
    post(
        "/blog/personal-loan",
        "Understanding Personal Loans",
        Calculator::PersonalLoan,
    ),
    post(
        "/blog/credit-card-refinance",
        "Consolidating Credit Card Debt",
        Calculator::CreditCardRefinance,
    ),
    post("/blog/fha-loans", "Understanding FHA Loans", Calculator::Fha),
    post("/blog/va-loans", "Understanding VA Loans", Calculator::Va),
    post(
        "/blog/conventional-loans",
        "Understanding Conventional Loans",
        Calculator::Conventional,
    ),
    post(
        "/blog/down-payment-assistance",
        "Understanding Down Payment Assistance Programs",
        Calculator::Dpa,
    ),
    calculator_page("/mortgage", Calculator::Mortgage),
    calculator_page("/refinance", Calculator::Refinance),
    calculator_page("/extra-payments", Calculator::ExtraPayments),
    calculator_page("/interest-only", Calculator::InterestOnly),
    calculator_page("/affordability", Calculator::Affordability),
    calculator_page("/arm", Calculator::Arm),
    calculator_page("/rent-vs-buy", Calculator::RentVsBuy),
    calculator_page("/personal-loan", Calculator::PersonalLoan),
    calculator_page("/credit-card-refinance", Calculator::CreditCardRefinance),
    calculator_page("/15-vs-30", Calculator::TermComparison),
    calculator_page("/biweekly", Calculator::Biweekly),
    calculator_page("/buydown", Calculator::Buydown),
    calculator_page("/property-tax", Calculator::PropertyTax),
    page("/contact", "Contact Us", PageKind::Contact),
    calculator_page("/fha", Calculator::Fha),
    calculator_page("/va", Calculator::Va),
    calculator_page("/conventional", Calculator::Conventional),
    calculator_page("/dpa", Calculator::Dpa),
];

const fn calculator_page(path: &'static str, calculator: Calculator) -> PageRoute {
    page(path, calculator.title(), PageKind::Calculator(calculator))
}

/// Exact match on the path; a single trailing slash is ignored.
pub fn lookup(path: &str) -> Option<&'static PageRoute> {
    let trimmed = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(rest) => rest,
    };
    ROUTES.iter().find(|route| route.path == trimmed)
}

pub fn calculator_route(calculator: Calculator) -> Option<&'static PageRoute> {
    ROUTES
        .iter()
        .find(|route| route.kind == PageKind::Calculator(calculator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<_> = ROUTES.iter().map(|route| route.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn every_calculator_has_a_page_and_a_post() {
        for calculator in Calculator::ALL {
            let route = calculator_route(calculator).expect("calculator page");
            assert_eq!(route.path.trim_start_matches('/'), calculator.slug());
            assert!(
                ROUTES
                    .iter()
                    .any(|route| route.kind == PageKind::BlogPost(calculator)),
                "no blog post for {}",
                calculator.slug()
            );
        }
    }

    #[test]
    fn lookup_matches_exact_paths() {
        assert_eq!(lookup("/").map(|r| r.kind), Some(PageKind::Home));
        assert_eq!(
            lookup("/15-vs-30").map(|r| r.kind),
            Some(PageKind::Calculator(Calculator::TermComparison))
        );
        assert_eq!(
            lookup("/blog/va-loans/").map(|r| r.kind),
            Some(PageKind::BlogPost(Calculator::Va))
        );
        assert!(lookup("/blog/unknown").is_none());
        assert!(lookup("/MORTGAGE").is_none());
    }

    #[test]
    fn serializes_kind_with_calculator_slug() {
        let route = lookup("/dpa").expect("dpa route");
        let value = serde_json::to_value(route).unwrap();
        assert_eq!(value["path"], "/dpa");
        assert_eq!(value["kind"], "calculator");
        assert_eq!(value["calculator"], "dpa");

        let contact = serde_json::to_value(lookup("/contact").unwrap()).unwrap();
        assert_eq!(contact["kind"], "contact");
        assert!(contact.get("calculator").is_none());
    }
}
