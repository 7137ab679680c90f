use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{MudmapError, MudmapResult};

/// Token marking a start location; triggers the protected diamond fill.
pub const START_TOKEN: char = '*';

/// Token for unclaimed / default terrain.
pub const UNCLAIMED_TOKEN: char = '?';

/// The versioned built-in token table.
///
/// Extending the map with a new terrain symbol means appending an entry here
/// (or shipping a JSON palette); existing mappings never change, so maps and
/// scripts generated against older versions keep rendering identically.
const STANDARD_ENTRIES: &[(char, Rgb8)] = &[
    (START_TOKEN, Rgb8::new(238, 44, 44)),
    (UNCLAIMED_TOKEN, Rgb8::new(238, 229, 222)),
    // banners/bright colors
    ('0', Rgb8::new(255, 255, 255)), // white banner, rice, cotton
    ('1', Rgb8::new(238, 0, 0)),     // red banner
    ('2', Rgb8::new(0, 205, 0)),     // green banner, peas
    ('3', Rgb8::new(205, 205, 0)),   // yellow banner, corn
    ('4', Rgb8::new(28, 134, 238)),  // blue banner
    ('5', Rgb8::new(255, 0, 255)),   // magenta banner
    ('6', Rgb8::new(0, 238, 238)),   // cyan banner
    // terrain colors
    ('a', Rgb8::new(139, 26, 26)),   // cherries
    ('b', Rgb8::new(144, 238, 144)), // plains, grove
    ('c', Rgb8::new(127, 255, 0)),   // apples
    ('d', Rgb8::new(102, 205, 170)), // jungle
    ('e', Rgb8::new(42, 175, 110)),  // swamp
    ('f', Rgb8::new(0, 100, 0)),     // forest
    ('g', Rgb8::new(108, 140, 0)),   // olives, hops
    ('h', Rgb8::new(153, 255, 255)), // tundra
    ('i', Rgb8::new(0, 191, 255)),   // river
    ('j', Rgb8::new(30, 144, 255)),  // oasis
    ('k', Rgb8::new(79, 148, 205)),  // ocean
    ('l', Rgb8::new(238, 233, 191)), // wheat, barley
    ('m', Rgb8::new(255, 236, 139)), // desert
    ('n', Rgb8::new(255, 165, 79)),  // peaches
    ('o', Rgb8::new(238, 154, 0)),   // oranges, gourds
    ('p', Rgb8::new(142, 142, 56)),  // trench
    ('q', Rgb8::new(139, 117, 0)),   // mountain
    ('r', Rgb8::new(193, 193, 193)), // road
    ('s', Rgb8::new(81, 81, 81)),    // building
    ('t', Rgb8::new(0, 0, 102)),     // dark blue
    ('u', Rgb8::new(0, 76, 153)),    // dark azure blue
    ('v', Rgb8::new(153, 0, 76)),    // dark magenta
    ('w', Rgb8::new(0, 153, 153)),   // dark cyan
    ('x', Rgb8::new(102, 255, 102)), // lime green
    ('y', Rgb8::new(0, 153, 0)),     // dark lime green
    ('z', Rgb8::new(204, 102, 0)),   // dark orange
    ('A', Rgb8::new(255, 153, 204)), // pink
    ('B', Rgb8::new(255, 51, 153)),  // dark pink
    ('C', Rgb8::new(210, 180, 140)), // tan
    ('D', Rgb8::new(127, 0, 255)),   // violet
    ('E', Rgb8::new(76, 0, 153)),    // deep violet
];

/// Immutable token → color table.
///
/// Built once (at startup or from a palette file) and shared read-only across
/// renders; nothing mutates a palette after construction, so `&Palette` is
/// safe to hand to concurrent renders without locking.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: BTreeMap<char, Rgb8>,
}

impl Palette {
    /// The built-in table shipped with the crate.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES.iter().copied().collect(),
        }
    }

    /// Build a palette from explicit entries.
    ///
    /// The same token appearing twice with different colors is rejected.
    pub fn from_entries(entries: impl IntoIterator<Item = (char, Rgb8)>) -> MudmapResult<Self> {
        Self {
            entries: BTreeMap::new(),
        }
        .extended(entries)
    }

    /// Load a palette from a JSON file on disk.
    ///
    /// The format is a flat object of single-character keys to `{r, g, b}`
    /// values.
    pub fn from_path(path: impl AsRef<Path>) -> MudmapResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MudmapError::validation(format!("open palette JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a palette from a JSON reader.
    pub fn from_reader(r: impl Read) -> MudmapResult<Self> {
        let entries: BTreeMap<char, Rgb8> = serde_json::from_reader(r)
            .map_err(|e| MudmapError::validation(format!("parse palette JSON: {e}")))?;
        Ok(Self { entries })
    }

    /// Resolve a token to its color.
    ///
    /// Fails with [`MudmapError::UnknownToken`] when the token has no entry;
    /// a missing token is never painted as a default color.
    pub fn lookup(&self, token: char) -> MudmapResult<Rgb8> {
        self.entries
            .get(&token)
            .copied()
            .ok_or(MudmapError::UnknownToken(token))
    }

    /// Return `true` when `token` has an entry.
    pub fn contains(&self, token: char) -> bool {
        self.entries.contains_key(&token)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive a palette with extra entries appended.
    ///
    /// Remapping an existing token to a different color is refused; repeating
    /// an identical entry is a no-op. This keeps previously generated maps
    /// rendering the same under an extended table.
    pub fn extended(&self, extra: impl IntoIterator<Item = (char, Rgb8)>) -> MudmapResult<Self> {
        let mut entries = self.entries.clone();
        for (token, color) in extra {
            match entries.get(&token) {
                Some(existing) if *existing != color => {
                    return Err(MudmapError::validation(format!(
                        "token '{token}' is already mapped to a different color"
                    )));
                }
                _ => {
                    entries.insert(token, color);
                }
            }
        }
        Ok(Self { entries })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/map/palette.rs"]
mod tests;
