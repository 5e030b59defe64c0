use super::amortization::{amortize_months, monthly_payment, monthly_rate};
use super::types::{NetWorthYear, RentVsBuyInputs, RentVsBuyResult};

pub fn calculate_rent_vs_buy(inputs: &RentVsBuyInputs) -> RentVsBuyResult {
    let loan_amount = inputs.home_price - inputs.down_payment;
    let monthly_mortgage = monthly_payment(loan_amount, inputs.interest_rate, inputs.term_years * 12);
    let monthly_buying_cost = monthly_mortgage
        + inputs.annual_property_tax / 12.0
        + inputs.annual_insurance / 12.0
        + inputs.annual_maintenance / 12.0
        + inputs.monthly_hoa;
    let investment_rate = monthly_rate(inputs.investment_return);

    let mut home_value = inputs.home_price;
    let mut mortgage_balance = loan_amount;
    let mut rent = inputs.monthly_rent;
    let mut invested = inputs.down_payment;
    let mut mortgage_months_left = inputs.term_years * 12;

    let mut years = Vec::with_capacity(inputs.years as usize + 1);
    years.push(NetWorthYear {
        year: 0,
        home_value,
        mortgage_balance,
        monthly_rent: rent,
        buying_net_worth: home_value - mortgage_balance,
        renting_net_worth: invested,
    });

    for year in 1..=inputs.years {
        home_value *= 1.0 + inputs.appreciation_rate / 100.0;

        let paying_months = mortgage_months_left.min(12);
        mortgage_balance =
            amortize_months(mortgage_balance, inputs.interest_rate, monthly_mortgage, paying_months).0;
        mortgage_months_left -= paying_months;
        let mortgage_this_year = monthly_mortgage * paying_months as f64 / 12.0;

        // Whatever buying costs beyond renting is invested by the renter.
        let buying_cost = monthly_buying_cost - monthly_mortgage + mortgage_this_year;
        let renting_cost = rent + inputs.annual_renters_insurance / 12.0;
        let monthly_difference = buying_cost - renting_cost;
        for _ in 0..12 {
            invested *= 1.0 + investment_rate;
            invested += monthly_difference;
        }

        rent *= 1.0 + inputs.rent_increase_rate / 100.0;

        years.push(NetWorthYear {
            year,
            home_value,
            mortgage_balance,
            monthly_rent: rent,
            buying_net_worth: home_value - mortgage_balance.max(0.0),
            renting_net_worth: invested,
        });
    }

    let crossover_year = years
        .iter()
        .skip(1)
        .find(|row| row.buying_net_worth >= row.renting_net_worth)
        .map(|row| row.year);
    let last = years.last().copied();
    let final_buying = last.map_or(0.0, |row| row.buying_net_worth);
    let final_renting = last.map_or(0.0, |row| row.renting_net_worth);
    let deflator = (1.0 + inputs.inflation_rate / 100.0).powi(inputs.years as i32);

    RentVsBuyResult {
        loan_amount,
        monthly_mortgage,
        monthly_buying_cost,
        years,
        crossover_year,
        final_advantage_buying: final_buying - final_renting,
        real_final_buying_net_worth: final_buying / deflator,
        real_final_renting_net_worth: final_renting / deflator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn both_scenarios_start_at_the_down_payment() {
        let result = calculate_rent_vs_buy(&RentVsBuyInputs::default());
        let start = result.years[0];
        assert_eq!(start.year, 0);
        assert_approx(start.buying_net_worth, 60_000.0);
        assert_approx(start.renting_net_worth, 60_000.0);
        assert_eq!(result.years.len(), 31);
    }

    #[test]
    fn mortgage_is_retired_by_end_of_term() {
        let result = calculate_rent_vs_buy(&RentVsBuyInputs::default());
        let last = result.years[30];
        assert!(last.mortgage_balance < 0.01);
        assert_approx(last.home_value, 300_000.0 * 1.04_f64.powi(30));
    }

    #[test]
    fn rent_escalates_each_year() {
        let result = calculate_rent_vs_buy(&RentVsBuyInputs::default());
        assert_approx(result.years[1].monthly_rent, 2_060.0);
        assert!(result.years[2].monthly_rent > result.years[1].monthly_rent);
    }

    #[test]
    fn no_growth_and_no_cost_difference_keeps_renter_flat() {
        let inputs = RentVsBuyInputs {
            home_price: 100_000.0,
            down_payment: 100_000.0,
            annual_property_tax: 0.0,
            annual_insurance: 0.0,
            annual_maintenance: 0.0,
            monthly_rent: 0.0,
            annual_renters_insurance: 0.0,
            appreciation_rate: 0.0,
            investment_return: 0.0,
            years: 5,
            ..RentVsBuyInputs::default()
        };
        let result = calculate_rent_vs_buy(&inputs);
        assert_approx(result.monthly_mortgage, 0.0);
        for row in &result.years {
            assert_approx(row.renting_net_worth, 100_000.0);
            assert_approx(row.buying_net_worth, 100_000.0);
        }
        assert_eq!(result.crossover_year, Some(1));
    }

    #[test]
    fn real_values_are_deflated() {
        let result = calculate_rent_vs_buy(&RentVsBuyInputs::default());
        let last = result.years[30];
        let deflator = 1.025_f64.powi(30);
        assert_approx(result.real_final_buying_net_worth, last.buying_net_worth / deflator);
        assert_approx(result.real_final_renting_net_worth, last.renting_net_worth / deflator);
    }
}
