use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for field keys.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Interned name of a placed field (`name`, `event`, `signature1_pos2`, ...).
/// Internally a `Spur` index: 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey(Spur);

impl FieldKey {
    /// Intern a string as a FieldKey, or return the existing one.
    pub fn intern(s: &str) -> Self {
        FieldKey(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice. Interned strings live for the
    /// whole program.
    pub fn as_str(&self) -> &'static str {
        INTERNER.resolve(&self.0)
    }

    /// Key for the `position`-th placement of signature `signature`.
    pub fn signature_slot(signature: u32, position: u32) -> Self {
        Self::intern(&format!("signature{signature}_pos{position}"))
    }

    /// Whether this key belongs to the signature family (any key that
    /// starts with `signature`, including legacy forms).
    pub fn is_signature(&self) -> bool {
        self.as_str().starts_with("signature")
    }
}

impl fmt::Debug for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FieldKey::intern(&s))
    }
}
