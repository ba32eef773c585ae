//! Property-based check that the diagram stays internally consistent no
//! matter which subset of a small divisor universe gets inserted.

#[cfg(test)]
mod property_tests {
    use quickcheck::{quickcheck, Arbitrary, Gen};

    use poset::Poset;

    const UNIVERSE: u8 = 40;

    #[derive(Clone, Debug)]
    struct InsertionSequence(Vec<u8>);

    impl Arbitrary for InsertionSequence {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 20;
            let values = (0..len)
                .map(|_| 1 + (u8::arbitrary(g) % UNIVERSE))
                .collect();
            Self(values)
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            Box::new(self.0.shrink().map(InsertionSequence))
        }
    }

    fn divides(a: &u8, b: &u8) -> bool {
        b % a == 0
    }

    quickcheck! {
        fn prop_insertion_sequence_stays_valid(seq: InsertionSequence) -> bool {
            let mut poset: Poset<u8> = Poset::new(divides);
            for value in seq.0 {
                poset.add(value);
            }
            poset.is_valid(false)
        }

        fn prop_member_count_matches_distinct_inserts(seq: InsertionSequence) -> bool {
            let mut poset: Poset<u8> = Poset::new(divides);
            let mut distinct = std::collections::HashSet::new();
            for value in seq.0 {
                poset.add(value);
                distinct.insert(value);
            }
            poset.size() == distinct.len()
        }
    }
}
