//! The `DriverEngine` struct and its operations.

use tracing::{debug, info, warn};

use fleet_core::{DriverId, EngineConfig, FleetRng, GeoPoint, random_offset};
use fleet_driver::{
    Driver, DriverSource, LocationProvider, RawDriverRecord, SourceResult, to_drivers,
};
use fleet_store::{DriverCache, FavoriteIds, FavoritesStore, KeyValueStore};

use crate::filter::{FilterCriteria, FilterFlag, FilterUpdate, apply_filters};
use crate::{EngineError, EngineObserver};

// ── Lifecycle and outcomes ────────────────────────────────────────────────────

/// Where the engine is in its load cycle.
///
/// ```text
/// Uninitialized ──begin_load──▶ Loading ──finish_load──▶ Ready
///                                  ▲                       │
///                                  └──────begin_load───────┘
/// ```
///
/// A failed load also ends in `Ready`, with the previous collection intact.
/// There is no terminal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EnginePhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

/// Returned by [`DriverEngine::begin_load`]: what to ask the source for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub count: usize,
}

/// Result of a source load.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was replaced with this many drivers.
    Loaded(usize),
    /// The fetch failed; see [`DriverEngine::error`].
    Failed,
}

/// Result of a cache restore.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The collection was replaced with this many cached drivers.
    Restored(usize),
    /// No snapshot has been written yet.
    Miss,
    /// A snapshot exists but could not be read or decoded.  Treated like a
    /// miss: state is unchanged and no error is recorded.
    Unreadable,
}

// ── DriverEngine ──────────────────────────────────────────────────────────────

/// Owns every piece of driver state and exposes the operations that change
/// it.
///
/// All fields are private: presentation code reads through accessors and
/// mutates only through the operations below.  Each operation finishes by
/// recomputing the derived view (where it changed anything) and then
/// notifying observers.
///
/// The engine is single-threaded.  Loads can be split into
/// [`begin_load`](Self::begin_load) / [`finish_load`](Self::finish_load) so
/// an event loop may run ticks or toggles while the fetch is in flight.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct DriverEngine<S: KeyValueStore> {
    pub(crate) config:        EngineConfig,
    pub(crate) store:         S,
    pub(crate) rng:           FleetRng,
    pub(crate) drivers:       Vec<Driver>,
    pub(crate) view:          Vec<Driver>,
    pub(crate) favorites:     FavoriteIds,
    pub(crate) selected:      Option<Driver>,
    pub(crate) user_location: GeoPoint,
    pub(crate) criteria:      FilterCriteria,
    pub(crate) phase:         EnginePhase,
    pub(crate) error:         Option<EngineError>,
    pub(crate) ticks:         u64,
    pub(crate) observers:     Vec<Box<dyn EngineObserver>>,
}

impl<S: KeyValueStore> DriverEngine<S> {
    // ── Read access ───────────────────────────────────────────────────────

    /// The full collection, in load order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// The filtered / sorted view.
    pub fn view(&self) -> &[Driver] {
        &self.view
    }

    pub fn driver(&self, id: &DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|d| &d.id == id)
    }

    /// Collection entries currently marked favorite, in collection order.
    pub fn favorite_drivers(&self) -> impl Iterator<Item = &Driver> + '_ {
        self.drivers.iter().filter(|d| d.is_favorite)
    }

    pub fn favorites(&self) -> &FavoriteIds {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &DriverId) -> bool {
        self.favorites.contains(id)
    }

    pub fn selected(&self) -> Option<&Driver> {
        self.selected.as_ref()
    }

    pub fn user_location(&self) -> GeoPoint {
        self.user_location
    }

    pub fn is_loading(&self) -> bool {
        self.phase == EnginePhase::Loading
    }

    /// The error from the most recent failed load, cleared when the next
    /// load starts.
    pub fn error(&self) -> Option<&EngineError> {
        self.error.as_ref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Number of ticks that moved at least one driver.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine and hand back its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Register an observer.  Observers are called in registration order.
    pub fn subscribe(&mut self, observer: Box<dyn EngineObserver>) {
        self.observers.push(observer);
    }

    // ── Loading ───────────────────────────────────────────────────────────

    /// Fetch a fresh collection from `source`.
    ///
    /// On failure the existing collection is kept and the error is recorded;
    /// nothing is returned as `Err` because a stale collection is still
    /// usable.
    pub async fn load_from_source<D: DriverSource + ?Sized>(&mut self, source: &D) -> LoadOutcome {
        let request = self.begin_load();
        let fetched = source.fetch(request.count).await;
        self.finish_load(fetched)
    }

    /// First half of a split load: enter `Loading`, clear the last error.
    pub fn begin_load(&mut self) -> LoadRequest {
        self.phase = EnginePhase::Loading;
        self.error = None;
        self.notify(|o| o.on_loading_changed(true));
        LoadRequest { count: self.config.fetch_count }
    }

    /// Second half of a split load.
    ///
    /// New drivers are placed around the user location current *now*, which
    /// may differ from the one at `begin_load` time.
    pub fn finish_load(&mut self, fetched: SourceResult<Vec<RawDriverRecord>>) -> LoadOutcome {
        let records = match fetched {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, kept = self.drivers.len(), "driver fetch failed; keeping previous collection");
                self.phase = EnginePhase::Ready;
                let error = EngineError::FetchFailed(e);
                self.notify(|o| o.on_load_failed(&error));
                self.error = Some(error);
                self.notify(|o| o.on_loading_changed(false));
                return LoadOutcome::Failed;
            }
        };

        let mut drivers = to_drivers(
            &records,
            self.user_location,
            self.config.nearby_radius_km,
            &mut self.rng,
        );
        apply_favorites(&mut drivers, &self.favorites);

        if let Err(e) = DriverCache::save(&mut self.store, &drivers) {
            warn!(error = %e, "failed to persist driver snapshot");
        }

        let count = drivers.len();
        self.drivers = drivers;
        self.phase = EnginePhase::Ready;
        self.recompute_view();
        info!(count, anchor = %self.user_location, "loaded drivers from source");

        self.notify(|o| o.on_loading_changed(false));
        self.notify_view();
        LoadOutcome::Loaded(count)
    }

    /// Replace the collection with the persisted snapshot, if there is one.
    ///
    /// Used when the source is known to be unreachable, so a missing or
    /// unreadable snapshot is a silent no-op rather than an error.  The
    /// current favorite set is re-applied to the restored drivers.
    pub fn load_from_cache(&mut self) -> CacheOutcome {
        let mut drivers = match DriverCache::load(&self.store) {
            Ok(Some(drivers)) => drivers,
            Ok(None) => {
                debug!("no cached driver snapshot");
                return CacheOutcome::Miss;
            }
            Err(e) => {
                warn!(error = %e, "cached driver snapshot unreadable; ignoring");
                return CacheOutcome::Unreadable;
            }
        };

        apply_favorites(&mut drivers, &self.favorites);
        let count = drivers.len();
        self.drivers = drivers;
        if self.phase == EnginePhase::Uninitialized {
            self.phase = EnginePhase::Ready;
        }
        self.recompute_view();
        info!(count, "restored drivers from cache");

        self.notify_view();
        CacheOutcome::Restored(count)
    }

    // ── Simulation ────────────────────────────────────────────────────────

    /// Move every driver by an independent random offset on each axis and
    /// refresh its distance from the current user location.
    ///
    /// Returns the number of drivers moved.  With an empty collection this
    /// does nothing at all.
    pub fn simulate_tick(&mut self) -> usize {
        if self.drivers.is_empty() {
            return 0;
        }

        let anchor = self.user_location;
        for driver in &mut self.drivers {
            let d_lat = random_offset(&mut self.rng);
            let d_lon = random_offset(&mut self.rng);
            driver.move_to(driver.position.offset(d_lat, d_lon), anchor);
        }

        self.ticks += 1;
        self.recompute_view();

        let (tick, moved) = (self.ticks, self.drivers.len());
        debug!(tick, moved, "simulation tick");
        self.notify(|o| o.on_tick(tick, moved));
        self.notify_view();
        moved
    }

    // ── Favorites ─────────────────────────────────────────────────────────

    /// Flip `id` in the favorite set and persist the set.
    ///
    /// Returns the new membership.  Calling twice restores the original
    /// state.  The selected-driver snapshot follows along.
    pub fn toggle_favorite(&mut self, id: &DriverId) -> bool {
        let is_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.clone());
            true
        };

        if let Err(e) = FavoritesStore::save(&mut self.store, &self.favorites) {
            warn!(error = %e, driver = %id, "failed to persist favorites");
        }

        apply_favorites(&mut self.drivers, &self.favorites);
        if let Some(selected) = self.selected.as_mut().filter(|s| &s.id == id) {
            selected.is_favorite = is_favorite;
        }
        self.recompute_view();

        self.notify(|o| o.on_favorite_toggled(id, is_favorite));
        self.notify_view();
        is_favorite
    }

    /// Read the persisted favorite set into the engine.
    ///
    /// Returns `false` (and keeps the current set) when nothing is stored or
    /// the stored value cannot be read.  On success the set is re-applied to
    /// the current collection.
    pub fn load_favorites(&mut self) -> bool {
        let favorites = match FavoritesStore::load(&self.store) {
            Ok(Some(favorites)) => favorites,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "stored favorites unreadable; keeping current set");
                return false;
            }
        };

        debug!(count = favorites.len(), "loaded favorites");
        self.favorites = favorites;
        apply_favorites(&mut self.drivers, &self.favorites);
        if let Some(selected) = self.selected.as_mut() {
            selected.is_favorite = self.favorites.contains(&selected.id);
        }
        self.recompute_view();
        self.notify_view();
        true
    }

    // ── Location ──────────────────────────────────────────────────────────

    /// Replace the user location.
    ///
    /// Existing distances are *not* recomputed; they catch up on the next
    /// tick or load, or immediately via
    /// [`refresh_distances`](Self::refresh_distances).
    pub fn set_user_location(&mut self, location: GeoPoint) {
        self.user_location = location;
    }

    /// Ask `provider` for the device location and adopt it if there is one.
    ///
    /// Returns the location in effect afterwards.
    pub async fn refresh_location<P: LocationProvider + ?Sized>(&mut self, provider: &P) -> GeoPoint {
        match provider.current_location().await {
            Some(location) => {
                info!(%location, "using device location");
                self.set_user_location(location);
            }
            None => {
                info!(location = %self.user_location, "no device location; keeping current");
            }
        }
        self.user_location
    }

    /// Recompute every driver's distance from the current user location.
    pub fn refresh_distances(&mut self) {
        let anchor = self.user_location;
        for driver in &mut self.drivers {
            driver.refresh_distance(anchor);
        }
        self.recompute_view();
        self.notify_view();
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// Hold a snapshot of `driver` as the current selection (or clear it).
    pub fn select_driver(&mut self, driver: Option<Driver>) {
        self.selected = driver;
    }

    /// Select the collection entry with `id`.  Returns `false` (and clears
    /// the selection) if there is none.
    pub fn select_driver_by_id(&mut self, id: &DriverId) -> bool {
        self.selected = self.driver(id).cloned();
        self.selected.is_some()
    }

    // ── Filters ───────────────────────────────────────────────────────────

    /// Merge `update` into the criteria and recompute the view.
    pub fn set_filter_criteria(&mut self, update: FilterUpdate) {
        self.criteria.merge(update);
        self.recompute_view();
        self.notify_view();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.set_filter_criteria(FilterUpdate::default().search_text(text));
    }

    pub fn set_rating_above_4(&mut self, on: bool) {
        self.set_filter_flag(FilterFlag::RatingAbove4, on);
    }

    pub fn set_nearest_only(&mut self, on: bool) {
        self.set_filter_flag(FilterFlag::NearestOnly, on);
    }

    pub fn set_filter_flag(&mut self, flag: FilterFlag, on: bool) {
        self.set_filter_criteria(FilterUpdate::default().flag(flag, on));
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn recompute_view(&mut self) {
        self.view = apply_filters(&self.drivers, &self.criteria, self.config.nearest_limit);
    }

    fn notify(&mut self, mut f: impl FnMut(&mut dyn EngineObserver)) {
        for observer in &mut self.observers {
            f(observer.as_mut());
        }
    }

    fn notify_view(&mut self) {
        let view = &self.view;
        for observer in &mut self.observers {
            observer.on_view_changed(view);
        }
    }
}

/// Force each driver's flag to match membership in `favorites`.
fn apply_favorites(drivers: &mut [Driver], favorites: &FavoriteIds) {
    for driver in drivers {
        driver.is_favorite = favorites.contains(&driver.id);
    }
}
