//! `fleet-engine`: the driver state engine.
//!
//! # Operations
//!
//! ```text
//! load_from_source   begin_load → fetch (await) → finish_load:
//!                      transform at the user location, re-apply favorites,
//!                      persist snapshot, replace collection
//!                    failure keeps the old collection and records the error
//! load_from_cache    restore the persisted snapshot; a miss is a no-op
//! simulate_tick      jitter every driver, refresh distances
//! toggle_favorite    flip membership, persist, update flags + selection
//! load_favorites     restore the persisted favorite set
//! set_filter_*       merge criteria
//! ```
//!
//! Every operation that changes the collection or the criteria recomputes the
//! derived view before it returns and then notifies observers.
//!
//! The engine never owns a timer.  Whoever drives the simulation calls
//! [`DriverEngine::simulate_tick`] at its own cadence
//! (`EngineConfig::tick_interval`).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fleet_driver::{NoLocation, StaticSource};
//! use fleet_engine::EngineBuilder;
//! use fleet_store::MemoryStore;
//!
//! let mut engine = EngineBuilder::new(MemoryStore::new()).build()?;
//! engine.refresh_location(&NoLocation).await;
//! engine.load_favorites();
//! if engine.load_from_source(&source).await == LoadOutcome::Failed {
//!     engine.load_from_cache();
//! }
//! engine.set_nearest_only(true);
//! engine.simulate_tick();
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod filter;
pub mod observer;


pub use builder::EngineBuilder;
pub use engine::{CacheOutcome, DriverEngine, EnginePhase, LoadOutcome, LoadRequest};
pub use error::{EngineError, EngineResult};
pub use filter::{FilterCriteria, FilterFlag, FilterUpdate, apply_filters};
pub use observer::EngineObserver;
