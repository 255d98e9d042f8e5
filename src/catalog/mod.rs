// Process-wide read-only catalogs: heroes, rank presets, map weights.
//
// All of these are loaded once at startup and shared immutably across
// requests; nothing in this module mutates after construction.

pub mod hero;
pub mod loader;
pub mod presets;

use std::collections::HashMap;

use hero::HeroRecord;

// ---------------------------------------------------------------------------
// Hero catalog
// ---------------------------------------------------------------------------

/// The full hero catalog with an id index for pick-list resolution.
#[derive(Debug, Clone, Default)]
pub struct HeroCatalog {
    heroes: Vec<HeroRecord>,
    by_id: HashMap<String, usize>,
}

impl HeroCatalog {
    pub fn new(heroes: Vec<HeroRecord>) -> Self {
        let by_id = heroes
            .iter()
            .enumerate()
            .map(|(i, h)| (h.id.clone(), i))
            .collect();
        HeroCatalog { heroes, by_id }
    }

    /// Look up a hero by id. Unknown ids return None; callers skip them.
    pub fn get(&self, id: &str) -> Option<&HeroRecord> {
        self.by_id.get(id).map(|&i| &self.heroes[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeroRecord> {
        self.heroes.iter()
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Map weight table
// ---------------------------------------------------------------------------

/// Per-map multipliers keyed by provides-tag name. 1.0 is neutral;
/// values above 1.0 mean the map rewards that tag.
pub type MapWeights = HashMap<String, f64>;

/// All known maps and their tag multipliers. Optional: an empty table
/// simply makes every map neutral.
#[derive(Debug, Clone, Default)]
pub struct MapTable {
    maps: HashMap<String, MapWeights>,
}

impl MapTable {
    pub fn new(maps: HashMap<String, MapWeights>) -> Self {
        MapTable { maps }
    }

    pub fn empty() -> Self {
        MapTable::default()
    }

    /// Multipliers for the named map. Unknown or empty names yield a
    /// neutral (empty) table.
    pub fn weights_for(&self, name: &str) -> MapWeights {
        let name = name.trim();
        if name.is_empty() {
            return MapWeights::new();
        }
        self.maps.get(name).cloned().unwrap_or_default()
    }

    /// Sorted list of known map names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.maps.keys().cloned().collect();
        names.sort();
        names
    }
}
