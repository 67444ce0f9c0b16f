//! Typed adapters for the two persisted collections.
//!
//! | Adapter          | Key                | Value                          |
//! |------------------|--------------------|--------------------------------|
//! | [`DriverCache`]  | `cached_drivers`   | JSON array of `Driver`         |
//! | [`FavoritesStore`] | `favorite_drivers` | JSON array of driver id strings |
//!
//! Both namespaces are independent: writing one never touches the other.
//! Undecodable values come back as [`StoreError::Decode`]; callers that
//! prefer "absent" semantics map that to `None` themselves.

use rustc_hash::FxHashSet;

use fleet_core::DriverId;
use fleet_driver::Driver;

use crate::{KeyValueStore, StoreError, StoreResult};

/// Set of favorite driver ids.  Membership is the only semantic.
pub type FavoriteIds = FxHashSet<DriverId>;

/// Last successfully loaded driver collection.
pub struct DriverCache;

impl DriverCache {
    pub const KEY: &'static str = "cached_drivers";

    pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, drivers: &[Driver]) -> StoreResult<()> {
        let json = serde_json::to_string(drivers).map_err(StoreError::Encode)?;
        store.set(Self::KEY, &json)
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> StoreResult<Option<Vec<Driver>>> {
        decode(store, Self::KEY)
    }

    pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> StoreResult<()> {
        store.remove(Self::KEY)
    }
}

/// Persisted favorite-id set.
pub struct FavoritesStore;

impl FavoritesStore {
    pub const KEY: &'static str = "favorite_drivers";

    /// Ids are written sorted so identical sets produce identical bytes.
    pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, favorites: &FavoriteIds) -> StoreResult<()> {
        let mut ids: Vec<&str> = favorites.iter().map(DriverId::as_str).collect();
        ids.sort_unstable();
        let json = serde_json::to_string(&ids).map_err(StoreError::Encode)?;
        store.set(Self::KEY, &json)
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> StoreResult<Option<FavoriteIds>> {
        let ids: Option<Vec<DriverId>> = decode(store, Self::KEY)?;
        Ok(ids.map(|v| v.into_iter().collect()))
    }

    pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> StoreResult<()> {
        store.remove(Self::KEY)
    }
}

fn decode<S, T>(store: &S, key: &'static str) -> StoreResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    match store.get(key)? {
        None => Ok(None),
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StoreError::Decode { key, source }),
    }
}
