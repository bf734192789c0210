use proptest::prelude::{prop_assert, prop_assert_eq, prop_assume, proptest};
use proptest::sample::select;
use smartalloc::core::{
    AssetClass, ReferenceData, ReferenceDataProvider, RiskProfile, allocate, project,
};

fn profiles() -> Vec<RiskProfile> {
    RiskProfile::ALL.to_vec()
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_weights_sum_to_hundred(age in 20u32..=70, profile in select(profiles())) {
        let result = allocate(age, profile, ReferenceData::builtin()).unwrap();
        prop_assert_eq!(result.entries.len(), AssetClass::ALL.len());
        prop_assert!((result.total_weight() - 100.0).abs() <= 0.1);
        prop_assert!(result.entries.iter().all(|e| e.weight >= 0.0));
    }

    #[test]
    fn prop_any_age_is_accepted(age in proptest::num::u32::ANY, profile in select(profiles())) {
        let result = allocate(age, profile, ReferenceData::builtin()).unwrap();
        prop_assert!((result.total_weight() - 100.0).abs() <= 0.1);
        prop_assert!(result.entries.iter().all(|e| e.weight >= 0.0));
        prop_assert!((0.0..=1.0).contains(&result.blend_factor));
    }

    #[test]
    fn prop_weights_move_toward_conservative_vector(
        younger in 25u32..=68,
        gap in 2u32..=40,
        profile in select(profiles()),
    ) {
        let older = younger + gap;
        prop_assume!(older <= 70);

        let data = ReferenceData::builtin();
        let base = data.base_weights(profile);
        let conservative = data.conservative_weights();
        let young = allocate(younger, profile, data).unwrap();
        let old = allocate(older, profile, data).unwrap();

        for asset in AssetClass::ALL {
            let i = asset.index();
            if conservative[i] > base[i] {
                prop_assert!(old.weight_of(asset) > young.weight_of(asset), "{} should grow", asset);
            } else if conservative[i] < base[i] {
                prop_assert!(old.weight_of(asset) < young.weight_of(asset), "{} should shrink", asset);
            } else {
                prop_assert!((old.weight_of(asset) - young.weight_of(asset)).abs() <= 0.01);
            }
        }
    }

    #[test]
    fn prop_invested_amounts_round_trip(
        age in 20u32..=70,
        profile in select(profiles()),
        total in 10_000u32..=100_000_000,
    ) {
        let data = ReferenceData::builtin();
        let allocation = allocate(age, profile, data).unwrap();
        let total = f64::from(total);
        let projection = project(&allocation, data.expected_returns(), total).unwrap();

        // Integer ages blend to exact two-decimal weights, so only the
        // whole-unit rounding of each amount remains
        let tolerance = AssetClass::ALL.len() as f64;
        prop_assert!((projection.summary.invested_total - total).abs() <= tolerance);
        for row in &projection.rows {
            prop_assert!(row.one_year >= row.amount);
            prop_assert!(row.five_year >= row.one_year);
        }
    }

    #[test]
    fn prop_allocate_and_project_are_idempotent(
        age in 0u32..=150,
        profile in select(profiles()),
        total in 1u32..=10_000_000,
    ) {
        let data = ReferenceData::builtin();
        let first = allocate(age, profile, data).unwrap();
        let second = allocate(age, profile, data).unwrap();
        prop_assert_eq!(&first, &second);

        let total = f64::from(total);
        let a = project(&first, data.expected_returns(), total).unwrap();
        let b = project(&second, data.expected_returns(), total).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn low_profile_never_allocates_crypto() {
    for age in 0..=200 {
        let result = allocate(age, RiskProfile::Low, ReferenceData::builtin()).unwrap();
        assert_eq!(result.weight_of(AssetClass::CryptoRegulated), 0.0, "age {age}");
    }
}
