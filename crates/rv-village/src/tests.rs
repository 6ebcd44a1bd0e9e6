//! Unit tests for rv-village.

#[cfg(test)]
mod helpers {
    use rv_core::NodeId;
    use rv_spatial::RoadGraph;

    /// A - B - C
    pub fn line() -> (RoadGraph, [NodeId; 3]) {
        let g = RoadGraph::from_edges(["A-B", "B-C"]).unwrap();
        let ids = ["A", "B", "C"].map(|n| g.node_id(n).unwrap());
        (g, ids)
    }
}

// ── Move transition ───────────────────────────────────────────────────────────

#[cfg(test)]
mod moves {
    use crate::{Parcel, VillageState};

    #[test]
    fn carried_parcel_moves_with_robot() {
        let (g, [a, b, c]) = super::helpers::line();
        let state = VillageState::new(a, vec![Parcel::new(a, c)]);
        let next = state.moved(&g, b);
        assert_eq!(next, VillageState { place: b, parcels: vec![Parcel::new(b, c)] });
    }

    #[test]
    fn pickup_and_delivery_in_one_move() {
        let (g, [_, b, c]) = super::helpers::line();
        let state = VillageState::new(b, vec![Parcel::new(b, c)]);
        let next = state.moved(&g, c);
        assert_eq!(next.place, c);
        assert!(next.parcels.is_empty());
        assert!(next.is_done());
    }

    #[test]
    fn non_adjacent_move_is_noop() {
        let (g, [a, _, c]) = super::helpers::line();
        let state = VillageState::new(a, vec![Parcel::new(c, a)]);
        assert_eq!(state.moved(&g, c), state);
        assert_eq!(state.moved(&g, a), state); // no self-loop road
    }

    #[test]
    fn parcels_elsewhere_untouched() {
        let (g, [a, b, c]) = super::helpers::line();
        let state = VillageState::new(a, vec![Parcel::new(c, a), Parcel::new(a, b)]);
        let next = state.moved(&g, b);
        // The parcel at C stays; the one carried from A is delivered at B.
        assert_eq!(next.parcels, vec![Parcel::new(c, a)]);
    }

    #[test]
    fn move_is_pure() {
        let (g, [a, b, c]) = super::helpers::line();
        let state = VillageState::new(a, vec![Parcel::new(a, c), Parcel::new(c, b)]);
        let before = state.clone();
        let first = state.moved(&g, b);
        let second = state.moved(&g, b);
        assert_eq!(first, second);
        assert_eq!(state, before);
    }

    #[test]
    fn constructor_drops_delivered_parcels() {
        let (_, [a, b, _]) = super::helpers::line();
        let state = VillageState::new(a, vec![Parcel::new(b, b), Parcel::new(a, b)]);
        assert_eq!(state.parcels, vec![Parcel::new(a, b)]);
    }

    #[test]
    fn held_parcels_are_those_at_robot() {
        let (_, [a, b, c]) = super::helpers::line();
        let state = VillageState::new(a, vec![Parcel::new(a, b), Parcel::new(c, a), Parcel::new(a, c)]);
        assert_eq!(state.held_parcels().count(), 2);
    }
}

// ── Invariants under random walks ─────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use rv_core::{NodeId, RandomIndex, SimRng, VillageConfig};
    use rv_spatial::RoadGraph;

    use crate::VillageState;

    #[test]
    fn no_delivered_parcel_survives_a_move() {
        let g = RoadGraph::from_edges(&VillageConfig::meadowfield().roads).unwrap();
        let start = g.node_id("Post Office").unwrap();
        let mut rng = SimRng::new(17);
        let mut state = VillageState::random(&g, 20, start, &mut rng).unwrap();

        for _ in 0..500 {
            // Mix valid and invalid destinations.
            let dest = NodeId(rng.pick_index(g.node_count()) as u32);
            let next = state.moved(&g, dest);
            assert!(next.parcels.iter().all(|p| p.place != p.address));
            assert!(next.parcels.len() <= state.parcels.len());
            if g.is_adjacent(state.place, dest) {
                assert_eq!(next.place, dest);
            } else {
                assert_eq!(next, state);
            }
            state = next;
        }
    }
}

// ── Random tasks ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod random {
    use rv_core::{NodeId, ScriptedIndex, SimRng};
    use rv_spatial::RoadGraph;

    use crate::{Parcel, VillageError, VillageState};

    #[test]
    fn generates_requested_parcels() {
        let (g, [a, ..]) = super::helpers::line();
        let mut rng = SimRng::new(5);
        let state = VillageState::random(&g, 50, a, &mut rng).unwrap();
        assert_eq!(state.place, a);
        assert_eq!(state.parcel_count(), 50);
        assert!(state.parcels.iter().all(|p| p.place != p.address));
    }

    #[test]
    fn rejection_resamples_place() {
        let (g, [a, b, c]) = super::helpers::line();
        // address = 2, place = 2 (rejected), place = 0.
        let mut rng = ScriptedIndex::new(vec![2, 2, 0]);
        let state = VillageState::random(&g, 1, b, &mut rng).unwrap();
        assert_eq!(state.parcels, vec![Parcel::new(a, c)]);
        assert_eq!(rng.calls(), 3);
    }

    #[test]
    fn same_seed_same_task() {
        let (g, [a, ..]) = super::helpers::line();
        let s1 = VillageState::random(&g, 10, a, &mut SimRng::new(3)).unwrap();
        let s2 = VillageState::random(&g, 10, a, &mut SimRng::new(3)).unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn unknown_start_rejected() {
        let (g, _) = super::helpers::line();
        let err = VillageState::random(&g, 1, NodeId(40), &mut SimRng::new(1)).unwrap_err();
        assert!(matches!(err, VillageError::Spatial(_)));
    }

    #[test]
    fn single_place_graph_rejected() {
        let g = RoadGraph::from_edges(["A-A"]).unwrap();
        let err = VillageState::random(&g, 1, NodeId(0), &mut SimRng::new(1)).unwrap_err();
        assert_eq!(err, VillageError::TooFewPlaces(1));
    }
}
