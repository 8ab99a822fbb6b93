//! Field layout: the ordered `name → (x, y)` map the editor builds and
//! the backend persists.
//!
//! Wire format is a flat JSON object whose values are two-element
//! arrays: `{"name": [120, 340], "signature1_pos1": [80, 500]}`.

use crate::error::EditorError;
use crate::key::FieldKey;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Pixel coordinate on the editor canvas.
pub use kurbo::Point as Position;

/// Ordered mapping from field key to canvas position.
///
/// Iteration follows insertion order. Overwriting a key keeps its slot;
/// a key that is removed and placed again moves to the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    entries: SmallVec<[(FieldKey, Position); 8]>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: FieldKey) -> Option<Position> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, pos)| *pos)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Insert or overwrite. Returns the previous position, if any.
    pub fn insert(&mut self, key: FieldKey, pos: Position) -> Option<Position> {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, pos));
        }
        self.entries.push((key, pos));
        None
    }

    pub fn remove(&mut self, key: FieldKey) -> Option<Position> {
        let idx = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, Position)> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Number of keys in the signature family.
    pub fn signature_count(&self) -> usize {
        self.keys().filter(FieldKey::is_signature).count()
    }

    /// Serialize to the persisted JSON object.
    pub fn to_json(&self) -> Result<String, EditorError> {
        serde_json::to_string(self).map_err(|e| EditorError::Decode(e.to_string()))
    }

    /// Parse a persisted JSON object. Entries whose value is not a pair of
    /// numbers are skipped.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        serde_json::from_str(json).map_err(|e| EditorError::Decode(e.to_string()))
    }
}

impl FromIterator<(FieldKey, Position)> for Layout {
    fn from_iter<T: IntoIterator<Item = (FieldKey, Position)>>(iter: T) -> Self {
        let mut layout = Layout::new();
        for (key, pos) in iter {
            layout.insert(key, pos);
        }
        layout
    }
}

impl Serialize for Layout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, pos) in &self.entries {
            map.serialize_entry(key, &[pos.x, pos.y])?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LayoutVisitor)
    }
}

struct LayoutVisitor;

impl<'de> Visitor<'de> for LayoutVisitor {
    type Value = Layout;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field names to [x, y] pairs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Layout, A::Error> {
        let mut layout = Layout::new();
        while let Some((name, value)) = access.next_entry::<String, serde_json::Value>()? {
            match coordinate_pair(&value) {
                Some(pos) => {
                    layout.insert(FieldKey::intern(&name), pos);
                }
                None => log::warn!("skipping layout entry {name:?}: expected [x, y], got {value}"),
            }
        }
        Ok(layout)
    }
}

fn coordinate_pair(value: &serde_json::Value) -> Option<Position> {
    match value.as_array()?.as_slice() {
        [x, y] => Some(Position::new(x.as_f64()?, y.as_f64()?)),
        _ => None,
    }
}
