use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn table(weights: &[(&'static str, f32)]) -> WeightedTable<&'static str> {
    WeightedTable::from_entries(weights.iter().copied()).expect("valid weights")
}

#[test]
fn empty_table_cannot_select() {
    let t: WeightedTable<&str> = WeightedTable::new();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(t.select(&mut rng), Err(EmptyTableError));
}

#[test]
fn all_zero_weights_cannot_select() {
    let t = table(&[("a", 0.0), ("b", 0.0)]);
    let mut rng = StdRng::seed_from_u64(2);
    assert_eq!(t.len(), 2);
    assert_eq!(t.select(&mut rng), Err(EmptyTableError));
}

#[test]
fn rejects_negative_and_non_finite_weights() {
    let mut t = WeightedTable::new();
    assert!(t.push("neg", -1.0).is_err());
    assert!(t.push("nan", f32::NAN).is_err());
    assert!(t.push("inf", f32::INFINITY).is_err());
    assert!(t.is_empty());
    assert_eq!(t.total_weight(), 0.0);

    let err = WeightedTable::from_entries([("ok", 1.0), ("bad", -0.5)]).unwrap_err();
    assert_eq!(err, InvalidWeight::OutOfRange { weight: -0.5 });
}

#[test]
fn rejects_weights_that_overflow_the_total() {
    let mut t = table(&[("a", f32::MAX)]);

    assert_eq!(
        t.push("b", f32::MAX),
        Err(InvalidWeight::TotalOverflow {
            weight: f32::MAX,
            total: f32::MAX
        })
    );
    assert_eq!(t.len(), 1);
    assert!(t.total_weight().is_finite());

    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        assert_eq!(t.select(&mut rng), Ok(&"a"));
    }
}

#[test]
fn single_positive_entry_always_selected() {
    let t = table(&[("zero", 0.0), ("only", 0.25), ("also_zero", 0.0)]);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1_000 {
        assert_eq!(*t.select(&mut rng).unwrap(), "only");
    }
}

#[test]
fn selection_always_returns_a_present_entry() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let sets: [&[(&str, f32)]; 4] = [
        &[("a", 1.0)],
        &[("a", 0.001), ("b", 1000.0)],
        &[("a", 0.0), ("b", 2.0), ("c", 0.0), ("d", 5.5)],
        &[("a", 1e-6), ("b", 1e-6), ("c", 1e-6)],
    ];

    for set in sets {
        let t = table(set);
        for _ in 0..2_000 {
            let got = *t.select(&mut rng).unwrap();
            let entry = set.iter().find(|(id, _)| *id == got).expect("selected id must be in table");
            assert!(entry.1 > 0.0, "zero-weight entry {got} was selected");
        }
    }
}

#[test]
fn pick_walks_cumulative_weights_in_insertion_order() {
    let t = table(&[("a", 1.0), ("b", 3.0)]);

    assert_eq!(*t.pick(0.0).unwrap(), "a");
    assert_eq!(*t.pick(1.0).unwrap(), "a"); // cumulative 1.0 >= 1.0
    assert_eq!(*t.pick(1.01).unwrap(), "b");
    assert_eq!(*t.pick(3.99).unwrap(), "b");

    // Past the end falls back to the last positive entry.
    assert_eq!(*t.pick(10.0).unwrap(), "b");
}

#[test]
fn equal_weights_tie_break_on_insertion_order() {
    let t = table(&[("first", 2.0), ("second", 2.0)]);
    assert_eq!(*t.pick(2.0).unwrap(), "first");
}

#[test]
fn zero_draw_skips_leading_zero_weight_entries() {
    let t = table(&[("dead", 0.0), ("live", 1.0)]);
    assert_eq!(*t.pick(0.0).unwrap(), "live");
}

#[test]
fn weights_one_to_three_select_b_about_three_quarters() {
    let t = table(&[("A", 1.0), ("B", 3.0)]);
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    let draws = 10_000;
    let b = (0..draws)
        .filter(|_| *t.select(&mut rng).unwrap() == "B")
        .count();

    let ratio = b as f32 / draws as f32;
    assert!((ratio - 0.75).abs() < 0.03, "B ratio {ratio} not close to 0.75");
}

#[test]
fn probability_of_sums_duplicate_ids() {
    let t = table(&[("a", 1.0), ("b", 2.0), ("a", 1.0)]);
    assert!((t.probability_of(&"a") - 0.5).abs() < 1e-6);
    assert!((t.probability_of(&"b") - 0.5).abs() < 1e-6);
    assert_eq!(t.probability_of(&"missing"), 0.0);
}
