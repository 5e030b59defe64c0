use super::types::{PropertyTaxInputs, PropertyTaxResult, UsState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateTaxDefaults {
    pub state: UsState,
    pub name: &'static str,
    /// Average effective rate, percent of market value.
    pub average_rate: f64,
    pub assessment_ratio: f64,
    pub mill_rate: f64,
}

pub const STATE_DEFAULTS: [StateTaxDefaults; 5] = [
    StateTaxDefaults {
        state: UsState::Ca,
        name: "California",
        average_rate: 1.25,
        assessment_ratio: 100.0,
        mill_rate: 12.5,
    },
    StateTaxDefaults {
        state: UsState::Ga,
        name: "Georgia",
        average_rate: 0.93,
        assessment_ratio: 40.0,
        mill_rate: 23.25,
    },
    StateTaxDefaults {
        state: UsState::Tx,
        name: "Texas",
        average_rate: 1.80,
        assessment_ratio: 100.0,
        mill_rate: 18.0,
    },
    StateTaxDefaults {
        state: UsState::Fl,
        name: "Florida",
        average_rate: 0.89,
        assessment_ratio: 100.0,
        mill_rate: 8.9,
    },
    StateTaxDefaults {
        state: UsState::Ny,
        name: "New York",
        average_rate: 1.72,
        assessment_ratio: 100.0,
        mill_rate: 17.2,
    },
];

pub const GEORGIA_COUNTY_MILL_RATES: [(&str, f64); 5] = [
    ("Fulton", 10.2),
    ("DeKalb", 11.3),
    ("Gwinnett", 9.8),
    ("Cobb", 8.9),
    ("Clayton", 12.5),
];

pub fn state_defaults(state: UsState) -> StateTaxDefaults {
    STATE_DEFAULTS
        .iter()
        .copied()
        .find(|defaults| defaults.state == state)
        .unwrap_or(STATE_DEFAULTS[0])
}

pub fn county_mill_rate(state: UsState, county: &str) -> Option<f64> {
    if state != UsState::Ga {
        return None;
    }
    GEORGIA_COUNTY_MILL_RATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(county.trim()))
        .map(|&(_, rate)| rate)
}

pub fn calculate_property_tax(inputs: &PropertyTaxInputs) -> PropertyTaxResult {
    let defaults = state_defaults(inputs.state);
    let assessment_ratio = inputs.assessment_ratio.unwrap_or(defaults.assessment_ratio);
    let mill_rate = inputs.mill_rate.unwrap_or_else(|| {
        inputs
            .county
            .as_deref()
            .and_then(|county| county_mill_rate(inputs.state, county))
            .unwrap_or(defaults.mill_rate)
    });

    let assessed_value =
        (inputs.property_value * (assessment_ratio / 100.0) - inputs.exemptions).max(0.0);
    let annual_tax = assessed_value * (mill_rate / 1000.0);
    let effective_rate = if inputs.property_value > 0.0 {
        annual_tax / inputs.property_value * 100.0
    } else {
        0.0
    };

    PropertyTaxResult {
        assessment_ratio,
        mill_rate,
        assessed_value,
        annual_tax,
        monthly_tax: annual_tax / 12.0,
        effective_rate,
    }
}
