//! Unit tests for board-core primitives.

#[cfg(test)]
mod ids {
    use crate::PassengerId;

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PassengerId(0) < PassengerId(1));
        assert!(PassengerId(100) > PassengerId(99));
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId(7).to_string(), "passenger 7");
    }
}

#[cfg(test)]
mod seat {
    use std::collections::HashSet;

    use crate::SeatPos;

    #[test]
    fn airline_display() {
        assert_eq!(SeatPos::new(12, 3).to_string(), "12C");
        assert_eq!(SeatPos::new(1, 1).to_string(), "1A");
        assert_eq!(SeatPos::new(38, 6).to_string(), "38F");
    }

    #[test]
    fn wide_row_display_falls_back() {
        assert_eq!(SeatPos::new(4, 27).to_string(), "4#27");
    }

    #[test]
    fn usable_as_set_key() {
        let mut set = HashSet::new();
        assert!(set.insert(SeatPos::new(3, 2)));
        assert!(!set.insert(SeatPos::new(3, 2)));
        assert_eq!(set.len(), 1);
    }
}

#[cfg(test)]
mod tick {
    use crate::Tick;

    #[test]
    fn arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
        assert_eq!(Tick::ZERO.to_string(), "T0");
    }
}

#[cfg(test)]
mod cabin {
    use crate::{CabinLayout, SeatPos};

    #[test]
    fn narrow_body_dimensions() {
        let cabin = CabinLayout::narrow_body();
        assert_eq!(cabin.rows(), 38);
        assert_eq!(cabin.seats_per_row(), 6);
        assert_eq!(cabin.aisle_after(), 3);
        assert_eq!(cabin.seat_count(), 228);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(CabinLayout::new(0, 6, 3).is_err());
        assert!(CabinLayout::new(38, 0, 0).is_err());
    }

    #[test]
    fn rejects_aisle_beyond_row() {
        assert!(CabinLayout::new(10, 4, 5).is_err());
        // Both walls are fine.
        assert!(CabinLayout::new(10, 4, 0).is_ok());
        assert!(CabinLayout::new(10, 4, 4).is_ok());
    }

    #[test]
    fn row_major_enumeration() {
        let cabin = CabinLayout::new(2, 2, 1).unwrap();
        let seats: Vec<SeatPos> = cabin.seat_positions().collect();
        assert_eq!(
            seats,
            vec![
                SeatPos::new(1, 1),
                SeatPos::new(1, 2),
                SeatPos::new(2, 1),
                SeatPos::new(2, 2),
            ]
        );
        assert_eq!(seats.len(), cabin.seat_count());
    }

    #[test]
    fn contains_is_inclusive_of_bounds() {
        let cabin = CabinLayout::new(3, 2, 1).unwrap();
        assert!(cabin.contains(SeatPos::new(1, 1)));
        assert!(cabin.contains(SeatPos::new(3, 2)));
        assert!(!cabin.contains(SeatPos::new(0, 1)));
        assert!(!cabin.contains(SeatPos::new(4, 1)));
        assert!(!cabin.contains(SeatPos::new(3, 3)));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_shuffle() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        SimRng::new(12345).shuffle(&mut a);
        SimRng::new(12345).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        SimRng::new(1).shuffle(&mut a);
        SimRng::new(2).shuffle(&mut b);
        assert_ne!(a, b, "shuffles from different seeds should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(0..10);
            assert!(v < 10);
        }
    }
}
