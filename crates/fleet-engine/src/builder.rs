//! Fluent builder for constructing a [`DriverEngine`].

use fleet_core::{EngineConfig, FleetRng};
use fleet_store::{FavoriteIds, KeyValueStore};

use crate::{DriverEngine, EngineObserver, EngineResult, FilterCriteria};

/// Fluent builder for [`DriverEngine<S>`].
///
/// # Required inputs
///
/// - `S: KeyValueStore`: where the snapshot and favorites are persisted
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `.config(c)`    | `EngineConfig::default()`                 |
/// | `.seed(s)`      | `config.seed`, else entropy               |
/// | `.observer(o)`  | none                                      |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(MemoryStore::new())
///     .config(config)
///     .observer(Box::new(Redraw))
///     .build()?;
/// engine.load_favorites();
/// engine.load_from_source(&source).await;
/// ```
pub struct EngineBuilder<S: KeyValueStore> {
    config:    EngineConfig,
    store:     S,
    seed:      Option<u64>,
    observers: Vec<Box<dyn EngineObserver>>,
}

impl<S: KeyValueStore> EngineBuilder<S> {
    pub fn new(store: S) -> Self {
        Self {
            config:    EngineConfig::default(),
            store,
            seed:      None,
            observers: Vec::new(),
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the engine RNG, overriding `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn observer(mut self, observer: Box<dyn EngineObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Validate the configuration and return an `Uninitialized` engine
    /// positioned at `config.default_location`.
    pub fn build(self) -> EngineResult<DriverEngine<S>> {
        self.config.validate()?;

        let rng = FleetRng::from_seed_option(self.seed.or(self.config.seed));

        Ok(DriverEngine {
            user_location: self.config.default_location,
            config:        self.config,
            store:         self.store,
            rng,
            drivers:       Vec::new(),
            view:          Vec::new(),
            favorites:     FavoriteIds::default(),
            selected:      None,
            criteria:      FilterCriteria::default(),
            phase:         Default::default(),
            error:         None,
            ticks:         0,
            observers:     self.observers,
        })
    }
}
