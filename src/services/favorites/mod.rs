// Favorites service module
// The only state that survives across sessions

use std::collections::BTreeSet;

use anyhow::{Context, Result};

use crate::services::database::Database;

/// The single fixed slot name the favorites set is stored under
const FAVORITES_KEY: &str = "favorites";

/// Persistence port for the favorites set.
///
/// Loaded once at startup and saved after every toggle; the service
/// never assumes a particular storage medium.
#[cfg_attr(test, mockall::automock)]
pub trait FavoritesStore {
    fn load(&self) -> Result<BTreeSet<String>>;
    fn save(&self, favorites: &BTreeSet<String>) -> Result<()>;
}

/// Store backed by the app database's key-value slot. The set is kept
/// as a JSON array of venue ids; a missing slot loads as the empty set.
pub struct SqliteFavoritesStore<'a> {
    db: &'a Database,
}

impl<'a> SqliteFavoritesStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl FavoritesStore for SqliteFavoritesStore<'_> {
    fn load(&self) -> Result<BTreeSet<String>> {
        match self.db.get_value(FAVORITES_KEY)? {
            Some(json) => serde_json::from_str(&json).context("Failed to parse favorites slot"),
            None => Ok(BTreeSet::new()),
        }
    }

    fn save(&self, favorites: &BTreeSet<String>) -> Result<()> {
        let json = serde_json::to_string(favorites).context("Failed to encode favorites")?;
        self.db.set_value(FAVORITES_KEY, &json)
    }
}

/// In-memory favorites set plus its backing store
pub struct Favorites<S: FavoritesStore> {
    store: S,
    ids: BTreeSet<String>,
}

impl<S: FavoritesStore> Favorites<S> {
    /// Load the favorites set from the store
    pub fn load(store: S) -> Result<Self> {
        let ids = store.load()?;
        Ok(Self { store, ids })
    }

    /// Flip membership for a venue id, saving the new set. Returns
    /// whether the venue is a favorite after the toggle. Toggling twice
    /// restores the original contents.
    pub fn toggle(&mut self, venue_id: &str) -> Result<bool> {
        let now_favorite = if self.ids.contains(venue_id) {
            self.ids.remove(venue_id);
            false
        } else {
            self.ids.insert(venue_id.to_string());
            true
        };

        self.store.save(&self.ids)?;
        Ok(now_favorite)
    }

    pub fn contains(&self, venue_id: &str) -> bool {
        self.ids.contains(venue_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
