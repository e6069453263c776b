//! Property-based tests over the calculators.

use proptest::prelude::*;

use igaming_math::arithmetic::round2;
use igaming_math::domain::balances;
use igaming_math::ids::IdGenerator;
use igaming_math::{bet, brazil, money, rollover, rtp, weighted, win, Error, WeightedRandom};

fn arb_amount() -> impl Strategy<Value = f64> {
    (0u64..10_000_000).prop_map(|cents| cents as f64 / 100.0)
}

proptest! {
    /// House edge and RTP always add up to 100 inside the valid range.
    #[test]
    fn house_edge_complements_rtp(rtp in 0.01f64..=100.0) {
        prop_assert!((rtp::house_edge(rtp) + rtp - 100.0).abs() < 1e-9);
    }

    #[test]
    fn house_edge_never_negative(rtp in -1_000.0f64..1_000.0) {
        prop_assert!(rtp::house_edge(rtp) >= 0.0);
    }

    #[test]
    fn net_win_is_win_minus_bet(bet in 0.01f64..100_000.0, multiplier in 0.0f64..1_000.0) {
        prop_assert_eq!(
            win::net_win(bet, multiplier),
            round2(win::win(bet, multiplier) - bet)
        );
    }

    /// Progress stays in [0, 100] and remaining never goes negative.
    #[test]
    fn rollover_summary_bounds(
        deposited in -1e7f64..1e7,
        multiplier in -50.0f64..50.0,
        wagered in -1e8f64..1e8,
    ) {
        let s = rollover::summarize(deposited, multiplier, wagered);
        prop_assert!(s.progress >= 0.0 && s.progress <= 100.0);
        prop_assert!(s.remaining >= 0.0);
        prop_assert_eq!(s.can_withdraw, s.remaining <= 0.0);
    }

    /// A single positive weight is always selected.
    #[test]
    fn lone_weight_always_selected(len in 1usize..20, pos in 0usize..20, weight in 1.0f64..1_000.0, seed in any::<u64>()) {
        let pos = pos % len;
        let mut weights = vec![0.0; len];
        weights[pos] = weight;
        prop_assert_eq!(weighted::generate_with_seed(&weights, seed).unwrap(), pos);
    }

    #[test]
    fn draws_stay_in_bounds(weights in prop::collection::vec(0u32..100, 1..30), seed in any::<u64>()) {
        let weights: Vec<f64> = weights.into_iter().map(f64::from).collect();
        let mut sampler = WeightedRandom::with_seed(seed);
        match sampler.generate(&weights) {
            Ok(i) => {
                prop_assert!(i < weights.len());
                prop_assert!(weights[i] > 0.0);
            }
            Err(e) => {
                prop_assert!(matches!(e, Error::InvalidWeights(_)));
                prop_assert!(weights.iter().all(|w| *w == 0.0));
            }
        }
    }

    /// Allocation never exceeds a bucket or the bet, and covers the bet
    /// whenever the balance check passes.
    #[test]
    fn allocation_is_bounded(
        bet in arb_amount(),
        main in arb_amount(),
        bonus in arb_amount(),
        extra in arb_amount(),
    ) {
        let b = balances([("main", main), ("bonus", bonus), ("cashback", extra)]);
        let allocation = bet::allocate_balance(bet, &b);
        let mut total = 0.0;
        for (bucket, amount) in &allocation {
            prop_assert!(*amount > 0.0);
            prop_assert!(*amount <= b[bucket] + 1e-9);
            total += amount;
        }
        prop_assert!(round2(total) <= round2(bet) + 1e-9);
        if bet::validate_balance(bet, &b).is_valid() {
            prop_assert!((round2(total) - round2(bet)).abs() < 1e-6);
        }
    }

    /// Formatting a valid CPF's digits gives back the punctuated form.
    #[test]
    fn cpf_format_round_trip(base in prop::collection::vec(0u32..10, 9)) {
        prop_assume!(!base.iter().all(|d| *d == base[0]));
        let cpf = complete_cpf(&base);
        prop_assert!(brazil::validate_cpf(&cpf));
        let formatted = brazil::format_cpf(&cpf);
        prop_assert_eq!(brazil::only_digits(&formatted), cpf.clone());
        prop_assert!(brazil::validate_cpf(&formatted));
    }

    #[test]
    fn numeric_ids_have_exact_length(length in 1u32..=19, seed in any::<u64>()) {
        let mut ids = IdGenerator::with_seed(seed);
        let id = ids.generate_numeric_id(length, "").unwrap();
        prop_assert_eq!(id.len(), length as usize);
        prop_assert!(!id.starts_with('0'));
    }

    #[test]
    fn compact_preserves_sign(amount in 1_000.0f64..1e9) {
        let positive = money::format_compact(amount, 1);
        let negative = money::format_compact(-amount, 1);
        prop_assert_eq!(negative, format!("-{}", positive));
    }
}

/// Append both check digits to nine base digits.
fn complete_cpf(base: &[u32]) -> String {
    let mut digits = base.to_vec();
    for weight_start in [10u32, 11] {
        let sum: u32 = digits
            .iter()
            .zip((2..=weight_start).rev())
            .map(|(d, w)| d * w)
            .sum();
        let r = sum % 11;
        digits.push(if r < 2 { 0 } else { 11 - r });
    }
    digits.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect()
}

#[test]
fn always_taken_ids_exhaust_attempts() {
    let mut ids = IdGenerator::with_seed(9);
    let err = ids.generate_unique_id_with_check(|_| true, 8, 100).unwrap_err();
    assert_eq!(err, Error::ExhaustedAttempts { attempts: 100 });
}

#[test]
fn brazilian_and_dollar_rendering() {
    assert_eq!(money::format_brazilian(1234.56), "R$ 1.234,56");
    assert_eq!(money::format_dollar(1234.56), "$1,234.56");
    assert!(money::format_compact(1_500_000.0, 1).starts_with("1,5"));
    assert!(money::format_compact(1_500_000.0, 1).ends_with('M'));
}
