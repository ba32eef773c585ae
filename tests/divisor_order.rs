//! Divisibility ordering over a dense numeric range: `leq(a, b)` iff `a`
//! divides `b`.

use poset::Poset;

fn divides(a: &u32, b: &u32) -> bool {
    b % a == 0
}

fn numeric_poset() -> Poset<u32> {
    Poset::with_initial(divides, 1..=999)
}

#[test]
fn descendants_and_ancestors_of_one_hundred_twenty() {
    let poset = numeric_poset();

    let mut descendants: Vec<u32> = poset.get_descendants(&120).into_iter().collect();
    descendants.sort_unstable();
    assert_eq!(
        descendants,
        vec![1, 2, 3, 4, 5, 6, 8, 10, 12, 15, 20, 24, 30, 40, 60]
    );

    let mut ancestors: Vec<u32> = poset.get_ancestors(&120).into_iter().collect();
    ancestors.sort_unstable();
    assert_eq!(ancestors, vec![240, 360, 480, 600, 720, 840, 960]);
}

#[test]
fn one_is_the_unique_bottom_element() {
    let poset = numeric_poset();

    assert!(poset.get_descendants(&1).is_empty());
    assert_eq!(poset.get_ancestors(&1).len(), 998);
    assert_eq!(poset.get_non_parents(), vec![1]);
}

#[test]
fn whole_diagram_is_internally_consistent() {
    // Invariant checking is quadratic in the member count; keep this one
    // range small enough to stay a unit test rather than a benchmark.
    let poset = Poset::with_initial(divides, 1..=200);
    assert!(poset.is_valid(true));
}
