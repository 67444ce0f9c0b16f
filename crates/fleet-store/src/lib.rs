//! `fleet-store`: persistence for the fleet tracking core.
//!
//! Backends implement [`KeyValueStore`]:
//!
//! | Feature   | Backend          | Files created                  |
//! |-----------|------------------|--------------------------------|
//! | *(none)*  | `MemoryStore`    | none                           |
//! | *(none)*  | `JsonFileStore`  | `<dir>/<key>.json` per key     |
//! | `sqlite`  | `SqliteStore`    | `<dir>/store.db`               |
//!
//! The engine never touches keys directly; it goes through the typed
//! [`DriverCache`] and [`FavoritesStore`] adapters.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet_store::{DriverCache, JsonFileStore};
//!
//! let mut store = JsonFileStore::new(Path::new("./state"))?;
//! DriverCache::save(&mut store, &drivers)?;
//! let restored = DriverCache::load(&store)?;
//! ```

pub mod adapters;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use adapters::{DriverCache, FavoriteIds, FavoritesStore};
pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
