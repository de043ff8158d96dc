//! headless — fill a cube grid without a renderer.
//!
//! Every unit is revealed, routed and rolled through a fixed-step animator
//! exactly as an interactive front end would drive it; the stage just counts
//! what it is asked to draw and play.  At the end a per-layer table shows
//! how many destinations were filled.
//!
//! ```text
//! headless --size 5 --seed 42
//! headless --config fill.json --waypoints
//! RUST_LOG=debug headless --size 3
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use cf_core::{Cell, CfError, Effect, Pose, SimConfig, Stage, UnitId};
use cf_motion::FixedStepAnimator;
use cf_sim::{RunSummary, SimBuilder, SimObserver};
use cf_spatial::SpatialError;
use cf_units::{Unit, UnitPhase};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Fill a cube grid unit by unit, headless")]
struct Args {
    /// JSON `SimConfig` to start from; other flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid edge length.
    #[arg(long)]
    size: Option<u32>,

    /// RNG seed; omit for a different layout every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds per single-cell roll.
    #[arg(long)]
    segment_secs: Option<f32>,

    /// Search radius in lattice units.
    #[arg(long)]
    radius: Option<u32>,

    /// Forward every route to the stage as waypoints.
    #[arg(long)]
    waypoints: bool,

    /// Keep equal-height units in layout order.
    #[arg(long)]
    no_shuffle: bool,

    /// Sleep through every animation frame.
    #[arg(long)]
    realtime: bool,

    /// Re-route stranded units once after the queue drains.
    #[arg(long)]
    retry: bool,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config: SimConfig = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };

    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(secs) = args.segment_secs {
        config.segment_secs = secs;
    }
    if let Some(radius) = args.radius {
        config.search_radius = radius;
    }
    config.show_waypoints |= args.waypoints;
    if args.no_shuffle {
        config.shuffle_ties = false;
    }
    Ok(config)
}

// ── Stage ─────────────────────────────────────────────────────────────────────

/// Counts render calls and cues instead of drawing them.
#[derive(Default)]
struct CountingStage {
    frames:    u64,
    effects:   BTreeMap<&'static str, u64>,
    waypoints: u64,
}

impl Stage for CountingStage {
    fn render_pose(&mut self, _unit: UnitId, _pose: Pose) {
        self.frames += 1;
    }

    fn play_effect(&mut self, effect: Effect) -> Result<(), CfError> {
        *self.effects.entry(effect.name()).or_default() += 1;
        Ok(())
    }

    fn show_waypoints(&mut self, _unit: UnitId, cells: &[Cell]) {
        self.waypoints += cells.len() as u64;
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Settled units per layer and failed route queries, plus a log line whenever the fill moves up a layer.
#[derive(Default)]
struct LayerTally {
    layer:    Option<i32>,
    settled:  BTreeMap<i32, usize>,
    failures: usize,
}

impl SimObserver for LayerTally {
    fn on_unit_dequeued(&mut self, _unit: UnitId, height: i32) {
        if self.layer != Some(height) {
            log::info!("filling layer {height}");
            self.layer = Some(height);
        }
    }

    fn on_route_failed(&mut self, _unit: UnitId, _error: &SpatialError) {
        self.failures += 1;
    }

    fn on_settled(&mut self, unit: &Unit, _moves: usize) {
        *self.settled.entry(unit.destination.y).or_default() += 1;
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        log::info!("{} of {} units placed", summary.settled, summary.units);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let size = config.grid_size;

    println!("=== headless — cubefill ===");
    println!(
        "Grid: {size}³ = {} units  |  Seed: {}  |  Segment: {} s",
        config.unit_count(),
        config.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
        config.segment_secs,
    );
    println!();

    let animator = FixedStepAnimator::new(config.frame_secs).realtime(args.realtime);
    let mut sim = SimBuilder::with_grid_router(config, animator).build()?;
    let mut stage = CountingStage::default();
    let mut tally = LayerTally::default();

    let t0 = Instant::now();
    let mut summary = sim.run(&mut stage, &mut tally)?;
    if args.retry && summary.stranded > 0 {
        sim.retry_stranded(&mut stage, &mut tally)?;
        summary = sim.summary();
    }
    let elapsed = t0.elapsed();

    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  animated time : {:.2} s over {} frames",
        sim.animator.elapsed_secs(),
        sim.animator.frames()
    );
    println!("  rendered poses: {}", stage.frames);
    println!("  moves         : {}", summary.moves);
    println!("  cells expanded: {}", summary.expanded);
    println!("  route failures: {}", tally.failures);
    if sim.config.show_waypoints {
        println!("  waypoints     : {}", stage.waypoints);
    }
    for (name, count) in &stage.effects {
        println!("  cue {name:<10}: {count}");
    }
    println!();

    println!("{:<8} {:<10} {:<10}", "Layer", "Settled", "Stranded");
    println!("{}", "-".repeat(28));
    for y in 0..size as i32 {
        let in_layer = sim.units.iter().filter(|u| u.destination.y == y);
        let stranded = in_layer.filter(|u| u.phase() == UnitPhase::Stranded).count();
        println!(
            "{:<8} {:<10} {:<10}",
            y,
            tally.settled.get(&y).copied().unwrap_or(0),
            stranded,
        );
    }
    println!();
    println!(
        "Total: {}/{} settled, {} stranded",
        summary.settled, summary.units, summary.stranded
    );

    Ok(())
}
