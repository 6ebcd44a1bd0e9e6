//! Integration tests for rv-sim.

use rv_behavior::{
    FixedRoutePolicy, GoalOrientedPolicy, LazyPolicy, NearestFirstPolicy, RandomPolicy,
    RobotPolicy,
};
use rv_core::{NodeId, SimRng, VillageConfig};
use rv_spatial::{BfsRouter, RoadGraph, Route};
use rv_village::{Parcel, VillageState};

use crate::{NoopObserver, RunOutcome, Sim, SimBuilder, TraceRecorder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn meadowfield() -> RoadGraph {
    RoadGraph::from_edges(&VillageConfig::meadowfield().roads).unwrap()
}

fn mail_tour(graph: &RoadGraph) -> Route {
    graph.resolve_route(&VillageConfig::meadowfield().mail_route).unwrap()
}

fn id(graph: &RoadGraph, name: &str) -> NodeId {
    graph.node_id(name).unwrap()
}

/// A - B - C
fn line() -> RoadGraph {
    RoadGraph::from_edges(["A-B", "B-C"]).unwrap()
}

fn sim<P: RobotPolicy>(graph: RoadGraph, policy: P, limit: u64) -> Sim<P, BfsRouter> {
    SimBuilder::new(graph, policy, BfsRouter).max_turns(limit).build().unwrap()
}

fn run_with<P: RobotPolicy>(sim: &Sim<P, BfsRouter>, state: VillageState, seed: u64) -> RunOutcome {
    sim.run(state, sim.initial_memory(), &mut SimRng::new(seed), &mut NoopObserver)
        .unwrap()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use rv_core::SimConfig;
    use rv_spatial::RoadGraphBuilder;

    use super::*;
    use crate::SimError;

    #[test]
    fn unbounded_by_default() {
        let sim = SimBuilder::new(line(), GoalOrientedPolicy, BfsRouter).build().unwrap();
        assert_eq!(sim.max_turns, None);
    }

    #[test]
    fn zero_turn_limit_rejected() {
        let result = SimBuilder::new(line(), GoalOrientedPolicy, BfsRouter).max_turns(0).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn empty_graph_rejected() {
        let graph = RoadGraphBuilder::new().build();
        let result = SimBuilder::new(graph, RandomPolicy, BfsRouter).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn limit_taken_from_config() {
        let config = SimConfig { max_turns: Some(77), ..SimConfig::default() };
        let sim = SimBuilder::new(line(), LazyPolicy, BfsRouter).config(&config).build().unwrap();
        assert_eq!(sim.max_turns, Some(77));
    }
}

// ── Turn loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn mail_tour_delivers_cabin_parcel_in_five_turns() {
        let g = meadowfield();
        let tour = mail_tour(&g);
        let state = VillageState::new(
            id(&g, "Post Office"),
            vec![Parcel::new(id(&g, "Cabin"), id(&g, "Town Hall"))],
        );
        let expected_path: Vec<NodeId> = ["Alice's House", "Cabin", "Alice's House", "Bob's House", "Town Hall"]
            .iter()
            .map(|n| id(&g, n))
            .collect();

        let sim = sim(g, FixedRoutePolicy::new(tour).unwrap(), 1_000);
        let mut rec = TraceRecorder::new();
        let outcome = sim
            .run(state, sim.initial_memory(), &mut SimRng::new(0), &mut rec)
            .unwrap();

        assert_eq!(outcome, RunOutcome::Completed { turns: 5 });
        assert_eq!(rec.path(), expected_path);
        assert_eq!(rec.outcome, Some(outcome));
    }

    #[test]
    fn finished_task_takes_zero_turns() {
        let g = line();
        let a = id(&g, "A");
        let sim = sim(g, GoalOrientedPolicy, 10);
        let mut rec = TraceRecorder::new();
        let outcome = sim
            .run(VillageState::new(a, vec![]), Route::empty(), &mut SimRng::new(0), &mut rec)
            .unwrap();
        assert_eq!(outcome, RunOutcome::Completed { turns: 0 });
        assert!(outcome.is_completed());
        assert!(rec.events.is_empty());
        assert!(rec.start.is_some());
        assert_eq!(rec.outcome, Some(outcome));
    }

    #[test]
    fn turn_limit_reported() {
        let g = line();
        let (a, c) = (id(&g, "A"), id(&g, "C"));
        // Always taking the first neighbor bounces between A and B forever.
        let sim = sim(g, RandomPolicy, 10);
        let outcome = sim
            .run(
                VillageState::new(a, vec![Parcel::new(c, a)]),
                (),
                &mut rv_core::ScriptedIndex::new(vec![0]),
                &mut NoopObserver,
            )
            .unwrap();
        assert_eq!(outcome, RunOutcome::TurnLimit { turns: 10, remaining: 1 });
        assert_eq!(outcome.turns(), 10);
        assert!(!outcome.is_completed());
    }

    #[test]
    fn invalid_direction_wastes_a_turn() {
        let g = line();
        let (a, b, c) = (id(&g, "A"), id(&g, "B"), id(&g, "C"));
        // C is not adjacent to A, so every move is a no-op.
        let policy = FixedRoutePolicy::new(Route::new(vec![c])).unwrap();
        let sim = sim(g, policy, 3);
        let mut rec = TraceRecorder::new();
        let outcome = sim
            .run(VillageState::new(a, vec![Parcel::new(a, b)]), Route::empty(), &mut SimRng::new(0), &mut rec)
            .unwrap();
        assert_eq!(outcome, RunOutcome::TurnLimit { turns: 3, remaining: 1 });
        assert!(rec.events.iter().all(|e| e.from == a && e.direction == c && e.parcels_left == 1));
    }

    #[test]
    fn observer_sees_every_turn_in_order() {
        let g = meadowfield();
        let start = id(&g, "Post Office");
        let mut rng = SimRng::new(11);
        let state = VillageState::random(&g, 5, start, &mut rng).unwrap();
        let sim = sim(g, LazyPolicy, 1_000);

        let mut rec = TraceRecorder::new();
        let outcome = sim.run(state, Route::empty(), &mut rng, &mut rec).unwrap();

        assert!(outcome.is_completed());
        assert_eq!(rec.events.len() as u64, outcome.turns());
        let mut prev = start;
        for (i, e) in rec.events.iter().enumerate() {
            assert_eq!(e.turn.count(), i as u64 + 1);
            assert_eq!(e.from, prev);
            assert!(sim.graph.is_adjacent(e.from, e.direction));
            prev = e.direction;
        }
        assert_eq!(rec.events.last().unwrap().parcels_left, 0);
    }

    #[test]
    fn step_applies_one_move() {
        let g = meadowfield();
        let po = id(&g, "Post Office");
        let cabin = id(&g, "Cabin");
        let alice = id(&g, "Alice's House");
        let sim = sim(g, GoalOrientedPolicy, 100);
        let state = VillageState::new(po, vec![Parcel::new(cabin, po)]);
        let step = sim.step(&state, Route::empty(), &mut SimRng::new(0)).unwrap();
        assert_eq!(step.direction, alice);
        assert_eq!(step.state.place, alice);
        assert_eq!(step.memory, Route::new(vec![cabin]));
        // Input state is untouched.
        assert_eq!(state.place, po);
    }
}

// ── Determinism & policy comparison ───────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use super::*;

    fn task(graph: &RoadGraph, seed: u64) -> VillageState {
        let start = id(graph, "Post Office");
        VillageState::random(graph, 5, start, &mut SimRng::new(seed)).unwrap()
    }

    #[test]
    fn random_policy_reproducible_under_same_seed() {
        let g = meadowfield();
        let state = task(&g, 3);
        let sim = sim(g, RandomPolicy, 10_000);

        let mut first = TraceRecorder::new();
        let mut second = TraceRecorder::new();
        sim.run(state.clone(), (), &mut SimRng::new(99), &mut first).unwrap();
        sim.run(state, (), &mut SimRng::new(99), &mut second).unwrap();
        assert_eq!(first.events, second.events);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn every_policy_completes_random_tasks() {
        let g = meadowfield();
        let tour = mail_tour(&g);
        let route = sim(g.clone(), FixedRoutePolicy::new(tour).unwrap(), 10_000);
        let goal = sim(g.clone(), GoalOrientedPolicy, 10_000);
        let nearest = sim(g.clone(), NearestFirstPolicy, 10_000);
        let lazy = sim(g.clone(), LazyPolicy, 10_000);
        let random = sim(g.clone(), RandomPolicy, 10_000);

        for seed in 0..25 {
            let state = task(&g, seed);
            assert!(run_with(&route, state.clone(), seed).is_completed());
            assert!(run_with(&goal, state.clone(), seed).is_completed());
            assert!(run_with(&nearest, state.clone(), seed).is_completed());
            assert!(run_with(&lazy, state.clone(), seed).is_completed());
            assert!(run_with(&random, state, seed).is_completed());
        }
    }

    #[test]
    fn fixed_tour_finishes_within_two_laps() {
        // The tour visits every place, so one lap picks up every parcel and
        // the next lap drops each one off.
        let g = meadowfield();
        let tour = mail_tour(&g);
        let lap = tour.len() as u64;
        let route = sim(g.clone(), FixedRoutePolicy::new(tour).unwrap(), 10_000);
        for seed in 0..25 {
            let outcome = run_with(&route, task(&g, seed), seed);
            assert!(outcome.turns() <= 2 * lap, "seed {seed}: {outcome:?}");
        }
    }

    #[test]
    fn routing_failure_aborts_run() {
        use rv_behavior::BehaviorError;
        use rv_spatial::SpatialError;

        use crate::SimError;

        let g = RoadGraph::from_edges(["A-B", "C-D"]).unwrap();
        let (a, c, d) = (id(&g, "A"), id(&g, "C"), id(&g, "D"));
        let sim = sim(g, GoalOrientedPolicy, 100);
        let err = sim
            .run(VillageState::new(a, vec![Parcel::new(c, d)]), Route::empty(), &mut SimRng::new(0), &mut NoopObserver)
            .unwrap_err();
        assert_eq!(
            err,
            SimError::Behavior(BehaviorError::Routing(SpatialError::NoRoute { from: a, to: c }))
        );
    }
}
