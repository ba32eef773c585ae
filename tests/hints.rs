//! Hint/full-scan equivalence: whatever candidate-generator hints a caller
//! supplies, every query must agree with the no-hints, full-scan engine.

use poset::Poset;

const UNIVERSE: u32 = 30;
const MEMBERS: [u32; 10] = [2, 3, 4, 6, 8, 9, 12, 16, 18, 24];

fn divides(a: &u32, b: &u32) -> bool {
    b % a == 0
}

/// Enumerates every multiple of `x` up to `UNIVERSE`: a deliberately coarse
/// superset of `x`'s true immediate parents, as the hint contract allows.
fn parents_of(x: &u32) -> Vec<u32> {
    let x = *x;
    (1..=UNIVERSE).filter(|m| *m != x && m % x == 0).collect()
}

/// Enumerates every divisor of `x`: the symmetric coarse superset.
fn children_of(x: &u32) -> Vec<u32> {
    let x = *x;
    (1..=x).filter(|m| *m != x && x % m == 0).collect()
}

fn sorted(mut v: Vec<u32>) -> Vec<u32> {
    v.sort_unstable();
    v
}

#[test]
fn hint_accelerated_queries_match_full_scan() {
    let full_scan: Poset<u32> = Poset::with_initial(divides, MEMBERS);
    let hinted: Poset<u32> = Poset::with_hints_and_initial(divides, parents_of, children_of, MEMBERS);

    assert!(full_scan.is_valid(true));
    assert!(hinted.is_valid(true));

    // Candidate order can differ between a full scan and a hint walk; the
    // *set* of immediate parents/children must not.
    for member in MEMBERS {
        assert_eq!(
            sorted(full_scan.get_parents(&member).unwrap()),
            sorted(hinted.get_parents(&member).unwrap()),
            "parents of {member} disagree"
        );
        assert_eq!(
            sorted(full_scan.get_children(&member).unwrap()),
            sorted(hinted.get_children(&member).unwrap()),
            "children of {member} disagree"
        );
        assert_eq!(
            full_scan.get_ancestors(&member),
            hinted.get_ancestors(&member),
            "ancestors of {member} disagree"
        );
        assert_eq!(
            full_scan.get_descendants(&member),
            hinted.get_descendants(&member),
            "descendants of {member} disagree"
        );
    }

    // Insertion order is identical for both posets, so these are exact, not
    // just set-equal.
    assert_eq!(full_scan.get_non_parents(), hinted.get_non_parents());
    assert_eq!(full_scan.get_non_children(), hinted.get_non_children());

    // Hypothetical queries against non-members must also agree.
    for non_member in [5, 30] {
        assert_eq!(
            sorted(full_scan.get_parents_hypothetical(&non_member)),
            sorted(hinted.get_parents_hypothetical(&non_member)),
            "hypothetical parents of {non_member} disagree"
        );
        assert_eq!(
            sorted(full_scan.get_children_hypothetical(&non_member)),
            sorted(hinted.get_children_hypothetical(&non_member)),
            "hypothetical children of {non_member} disagree"
        );
    }
}

#[test]
fn hint_walk_survives_overlapping_candidate_paths() {
    // `parents_of`/`children_of` reach the same far candidate through more
    // than one hop (e.g. 2 -> 4 -> 8 and 2 -> 8 directly), which exercises
    // the walk's `visited` dedup guard rather than its correctness.
    let hinted: Poset<u32> = Poset::with_hints_and_initial(divides, parents_of, children_of, [2, 4, 8]);
    assert_eq!(hinted.get_parents(&2), Some(vec![4]));
    assert_eq!(hinted.get_children(&8), Some(vec![4]));
    assert!(hinted.is_valid(true));
}
