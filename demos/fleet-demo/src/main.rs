//! fleet-demo: end-to-end run of the fleet tracking core.
//!
//! Two sessions share one on-disk store:
//!
//! 1. *online*: load 15 drivers from the bundled record file, favorite a
//!    couple, and run a few movement ticks with the filters switched on;
//! 2. *offline*: the source is unreachable, so the engine falls back to the
//!    snapshot the first session persisted, with favorites intact.
//!
//! Usage: `fleet-demo [config.json]`.  Set `RUST_LOG=debug` for per-tick
//! logging.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fleet_core::{DriverId, EngineConfig};
use fleet_driver::{Driver, DriverSource, NoLocation, StaticSource};
use fleet_engine::{DriverEngine, EngineBuilder, EngineError, EngineObserver, LoadOutcome};
use fleet_store::{JsonFileStore, KeyValueStore};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64  = 42;
const TICKS:      u64  = 5;
const STATE_DIR:  &str = "output/fleet-demo";
const RECORDS:    &str = include_str!("../data/drivers.json");

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs what a presentation layer would redraw.
struct LogObserver {
    session: &'static str,
}

impl EngineObserver for LogObserver {
    fn on_view_changed(&mut self, view: &[Driver]) {
        let nearest = view.first().map(|d| d.distance_km);
        info!(session = self.session, visible = view.len(), ?nearest, "view changed");
    }

    fn on_loading_changed(&mut self, loading: bool) {
        info!(session = self.session, loading, "loading state");
    }

    fn on_load_failed(&mut self, error: &EngineError) {
        warn!(session = self.session, %error, "load failed");
    }

    fn on_favorite_toggled(&mut self, id: &DriverId, is_favorite: bool) {
        info!(session = self.session, driver = %id, is_favorite, "favorite toggled");
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config() -> Result<EngineConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_json_file(Path::new(&path))?,
        None => EngineConfig { seed: Some(SEED), ..EngineConfig::default() },
    };
    Ok(config)
}

/// The startup protocol: location, favorites, then source with cache
/// fallback.
async fn start<S: KeyValueStore>(engine: &mut DriverEngine<S>, source: &dyn DriverSource) {
    engine.refresh_location(&NoLocation).await;
    engine.load_favorites();
    if engine.load_from_source(source).await == LoadOutcome::Failed {
        let outcome = engine.load_from_cache();
        info!(?outcome, "fell back to cached snapshot");
    }
}

async fn run_ticks<S: KeyValueStore>(engine: &mut DriverEngine<S>, config: &EngineConfig) {
    let mut interval = tokio::time::interval(config.tick_interval());
    // The first tick of a tokio interval completes immediately.
    interval.tick().await;
    for _ in 0..TICKS {
        interval.tick().await;
        if engine.drivers().is_empty() {
            continue;
        }
        engine.simulate_tick();
    }
}

fn print_view(drivers: &[Driver]) {
    println!("{:<22} {:>8} {:>6}  {:<10} {}", "Driver", "Dist km", "Rating", "Vehicle", "Fav");
    println!("{}", "-".repeat(54));
    for d in drivers {
        println!(
            "{:<22} {:>8.1} {:>6.1}  {:<10} {}",
            d.name,
            d.distance_km,
            d.rating,
            d.vehicle_type.as_str(),
            if d.is_favorite { "*" } else { "" },
        );
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    let state_dir = PathBuf::from(STATE_DIR);
    println!("=== fleet-demo ===");
    println!(
        "Fetch: {}  |  Radius: {} km  |  Tick: {} ms  |  State: {}",
        config.fetch_count,
        config.nearby_radius_km,
        config.tick_interval_ms,
        state_dir.display(),
    );
    println!();

    // 1. Online session.
    let source = StaticSource::from_json_str(RECORDS)?;
    let mut engine = EngineBuilder::new(JsonFileStore::new(&state_dir)?)
        .config(config.clone())
        .observer(Box::new(LogObserver { session: "online" }))
        .build()?;
    start(&mut engine, &source).await;

    let picks: Vec<DriverId> = engine.drivers().iter().take(2).map(|d| d.id.clone()).collect();
    for id in &picks {
        if !engine.is_favorite(id) {
            engine.toggle_favorite(id);
        }
    }

    engine.set_rating_above_4(true);
    engine.set_nearest_only(true);
    run_ticks(&mut engine, &config).await;

    println!("Online: {} drivers, {} ticks, nearest rated > 4:", engine.drivers().len(), engine.tick_count());
    print_view(engine.view());

    // 2. Offline session over the same store.
    let offline = StaticSource::new(Vec::new());
    let mut engine = EngineBuilder::new(JsonFileStore::new(&state_dir)?)
        .config(config)
        .observer(Box::new(LogObserver { session: "offline" }))
        .build()?;
    start(&mut engine, &offline).await;

    if let Some(error) = engine.error() {
        println!("Offline: source unavailable ({error}); showing cached snapshot");
    }
    let favorites: Vec<&str> = engine.favorite_drivers().map(|d| d.name.as_str()).collect();
    println!("Favorites restored: {}", favorites.join(", "));
    print_view(engine.view());

    Ok(())
}
