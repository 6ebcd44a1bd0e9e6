//! village: compares delivery robot policies on the Meadowfield village.
//!
//! Generates `trials` random tasks from one seed, runs every policy on the
//! same tasks, prints the average number of turns per policy, and writes the
//! full turn-by-turn trace to `output/village/`.
//!
//! Usage: `village [config.json]`.  The optional JSON file has the shape
//! `{ "sim": SimConfig, "village": VillageConfig }`; missing sections fall
//! back to the defaults (seed 42, 5 parcels, the Meadowfield map).

mod logging;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use rv_behavior::{
    FixedRoutePolicy, GoalOrientedPolicy, LazyPolicy, NearestFirstPolicy, PolicyKind,
    RandomPolicy, RobotPolicy,
};
use rv_core::{NodeId, SimConfig, SimRng, VillageConfig};
use rv_output::{CsvTraceWriter, TraceObserver, TraceWriter};
use rv_sim::{Sim, SimBuilder, TracingObserver};
use rv_spatial::{BfsRouter, RoadGraph, Route};
use rv_village::VillageState;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/village";

/// Seed offset separating the policies' own random streams from task
/// generation.
const POLICY_STREAM_OFFSET: u64 = 1 << 32;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:     SimConfig,
    village: Option<VillageConfig>,
}

fn load_config(path: Option<&str>) -> Result<(SimConfig, VillageConfig)> {
    let config = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {p}"))?;
            serde_json::from_str::<DemoConfig>(&text).with_context(|| format!("parsing {p}"))?
        }
        None => DemoConfig::default(),
    };
    let village = config.village.unwrap_or_else(VillageConfig::meadowfield);
    config.sim.validate()?;
    village.validate()?;
    Ok((config.sim, village))
}

// ── Comparison ────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct PolicyStats {
    runs:        usize,
    completed:   usize,
    total_turns: u64,
}

impl PolicyStats {
    fn average_turns(&self) -> f64 {
        if self.completed == 0 {
            return f64::NAN;
        }
        self.total_turns as f64 / self.completed as f64
    }
}

/// Run `sim` over every task, recording into `obs`.
fn run_all<P, W>(
    sim:   &Sim<P, BfsRouter>,
    tasks: &[VillageState],
    rng:   &mut SimRng,
    obs:   &mut TraceObserver<'_, W>,
) -> Result<PolicyStats>
where
    P: RobotPolicy,
    W: TraceWriter,
{
    obs.set_policy(sim.policy.name());
    let mut stats = PolicyStats::default();
    for task in tasks {
        let outcome = sim.run(task.clone(), sim.initial_memory(), rng, obs)?;
        stats.runs += 1;
        if outcome.is_completed() {
            stats.completed += 1;
            stats.total_turns += outcome.turns();
        }
    }
    Ok(stats)
}

fn compare<W: TraceWriter>(
    kind:   PolicyKind,
    graph:  &RoadGraph,
    tour:   &Route,
    config: &SimConfig,
    tasks:  &[VillageState],
    rng:    &mut SimRng,
    obs:    &mut TraceObserver<'_, W>,
) -> Result<PolicyStats> {
    fn build<P: RobotPolicy>(graph: &RoadGraph, policy: P, config: &SimConfig) -> Result<Sim<P, BfsRouter>> {
        Ok(SimBuilder::new(graph.clone(), policy, BfsRouter).config(config).build()?)
    }

    match kind {
        PolicyKind::Random => run_all(&build(graph, RandomPolicy, config)?, tasks, rng, obs),
        PolicyKind::Route => {
            let policy = FixedRoutePolicy::new(tour.clone())?;
            run_all(&build(graph, policy, config)?, tasks, rng, obs)
        }
        PolicyKind::Goal => run_all(&build(graph, GoalOrientedPolicy, config)?, tasks, rng, obs),
        PolicyKind::Nearest => run_all(&build(graph, NearestFirstPolicy, config)?, tasks, rng, obs),
        PolicyKind::Lazy => run_all(&build(graph, LazyPolicy, config)?, tasks, rng, obs),
    }
}

/// Narrate one goal-oriented run through `tracing` (visible at `RUST_LOG=info`).
fn narrate(graph: &RoadGraph, config: &SimConfig, task: &VillageState) -> Result<()> {
    let sim = SimBuilder::new(graph.clone(), GoalOrientedPolicy, BfsRouter).config(config).build()?;
    let mut obs = TracingObserver::new(graph);
    sim.run(task.clone(), sim.initial_memory(), &mut SimRng::new(config.seed), &mut obs)?;
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init();

    let path = std::env::args().nth(1);
    let (config, village) = load_config(path.as_deref())?;

    println!("=== village — delivery robot comparison ===");
    println!(
        "Trials: {}  |  Parcels: {}  |  Seed: {}  |  Turn limit: {}",
        config.trials,
        config.parcel_count,
        config.seed,
        config.max_turns.map_or_else(|| "none".to_string(), |n| n.to_string()),
    );
    println!();

    // 1. Build road graph and resolve the configured names.
    let graph = RoadGraph::from_edges(&village.roads)?;
    let tour = graph.resolve_route(&village.mail_route)?;
    let start: NodeId = graph.node_id(&config.start_place)?;
    println!(
        "Road graph: {} places, {} roads  |  Mail tour: {} stops",
        graph.node_count(),
        graph.edge_count() / 2,
        tour.len()
    );

    // 2. Generate the shared tasks.
    let mut master = SimRng::new(config.seed);
    let tasks = (0..config.trials as u64)
        .map(|i| VillageState::random(&graph, config.parcel_count, start, &mut master.child(i)))
        .collect::<Result<Vec<_>, _>>()?;
    info!(tasks = tasks.len(), "generated tasks");

    if let Some(first) = tasks.first() {
        narrate(&graph, &config, first)?;
    }

    // 3. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvTraceWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = TraceObserver::new(writer, &graph);

    // 4. Run every policy on the same tasks.
    let t0 = Instant::now();
    let mut results = Vec::with_capacity(PolicyKind::ALL.len());
    for (k, kind) in PolicyKind::ALL.into_iter().enumerate() {
        let mut rng = master.child(POLICY_STREAM_OFFSET + k as u64);
        let stats = compare(kind, &graph, &tour, &config, &tasks, &mut rng, &mut obs)?;
        results.push((kind, stats));
    }
    let elapsed = t0.elapsed();

    obs.finish()?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Comparison complete in {:.3} s ({} runs)", elapsed.as_secs_f64(), obs.runs());
    println!("  {OUTPUT_DIR}/turns.csv, {OUTPUT_DIR}/runs.csv");
    println!();
    println!("{:<10} {:>10} {:>12}", "Policy", "Completed", "Avg turns");
    println!("{}", "-".repeat(34));
    for (kind, stats) in &results {
        println!(
            "{:<10} {:>10} {:>12.1}",
            kind.as_str(),
            format!("{}/{}", stats.completed, stats.runs),
            stats.average_turns(),
        );
    }

    Ok(())
}
