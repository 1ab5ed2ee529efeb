//! Property tests for the impact projection calculator.

use proptest::prelude::*;

use disclosure_pilot::domain::foundation::Percentage;
use disclosure_pilot::domain::simulation::{
    ImpactCalculator, ScenarioParameters, PROJECTION_YEARS,
};

fn scenario() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("1.5C".to_string()),
        Just("2.0C".to_string()),
        Just("4.0C".to_string()),
        "[a-z0-9.]{0,6}",
    ]
}

fn reductions() -> impl Strategy<Value = Vec<Percentage>> {
    prop::collection::vec((0u8..=100).prop_map(Percentage::new), 0..15)
}

fn params(price: f64, scenario: &str, reductions: &[Percentage]) -> ScenarioParameters {
    ScenarioParameters::new(price, scenario)
        .with_reductions(reductions.to_vec())
        .with_active_category_count(reductions.len())
}

proptest! {
    #[test]
    fn series_covers_every_projection_year(
        price in 0.0f64..=200.0,
        scenario in scenario(),
        reductions in reductions(),
    ) {
        let series = ImpactCalculator::project(&params(price, &scenario, &reductions));
        prop_assert_eq!(series.years(), PROJECTION_YEARS.to_vec());
    }

    #[test]
    fn projection_is_deterministic(
        price in 0.0f64..=200.0,
        scenario in scenario(),
        reductions in reductions(),
    ) {
        let p = params(price, &scenario, &reductions);
        prop_assert_eq!(ImpactCalculator::project(&p), ImpactCalculator::project(&p));
    }

    #[test]
    fn higher_price_strictly_deepens_impact(
        price in 0u32..=198,
        delta in 2u32..=50,
        scenario in scenario(),
        reductions in reductions(),
    ) {
        let low = ImpactCalculator::project(&params(price as f64, &scenario, &reductions));
        let high = ImpactCalculator::project(&params((price + delta) as f64, &scenario, &reductions));
        for (l, h) in low.values().iter().zip(high.values()) {
            prop_assert!(h < *l, "price {} -> {}: {} >= {}", price, price + delta, h, l);
            prop_assert!(h.abs() > l.abs());
        }
    }

    #[test]
    fn impact_deepens_over_the_horizon(
        price in 0.0f64..=200.0,
        scenario in scenario(),
        reductions in reductions(),
    ) {
        let values = ImpactCalculator::project(&params(price, &scenario, &reductions)).values();
        for pair in values.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn reduction_weight_stays_within_damping_bounds(reductions in reductions()) {
        let weight = ImpactCalculator::reduction_weight(&reductions, reductions.len());
        prop_assert!((0.5..=1.0).contains(&weight), "weight {}", weight);
    }

    #[test]
    fn zero_active_categories_normalise_as_one(
        price in 0.0f64..=200.0,
        reduction in 0u8..=100,
    ) {
        let r = vec![Percentage::new(reduction)];
        let zero = ScenarioParameters::new(price, "1.5C")
            .with_reductions(r.clone())
            .with_active_category_count(0);
        let one = zero.clone().with_active_category_count(1);
        prop_assert_eq!(ImpactCalculator::project(&zero).values(), ImpactCalculator::project(&one).values());
    }

    #[test]
    fn unknown_scenarios_share_the_default_base(
        price in 0.0f64..=200.0,
        id in "[x-z]{1,4}",
    ) {
        let unknown = ImpactCalculator::project(&ScenarioParameters::new(price, id));
        let other = ImpactCalculator::project(&ScenarioParameters::new(price, "unlisted"));
        prop_assert_eq!(unknown.values(), other.values());
    }
}
