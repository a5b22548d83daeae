//! World seeds and their human-readable designations.

use uuid::Uuid;

/// Identifies a generation run and yields its RNG seed.
///
/// Worlds seeded by name hash the name into a v5 UUID, so the same name
/// always produces the same world. Numeric seeds are stored in the high
/// half of the UUID so every world has a designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldSeed {
    pub id: Uuid,
}

impl WorldSeed {
    /// Seed a world from a human-readable name.
    ///
    /// # Example
    /// ```
    /// use star_system::WorldSeed;
    ///
    /// let a = WorldSeed::from_name("new-eden");
    /// let b = WorldSeed::from_name("new-eden");
    /// assert_eq!(a.seed(), b.seed());
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
        }
    }

    /// Wrap a numeric seed.
    pub fn from_u64(seed: u64) -> Self {
        Self {
            id: Uuid::from_u64_pair(seed, 0),
        }
    }

    /// The ChaCha seed: the first 64 bits of the UUID.
    pub fn seed(&self) -> u64 {
        self.id.as_u64_pair().0
    }

    /// Short designation derived from the seed
    ///
    /// Format: two uppercase letters and four digits (e.g. "KV-4729").
    pub fn catalog_name(&self) -> String {
        let bytes = self.id.as_bytes();
        let prefix1 = (bytes[0] % 26 + b'A') as char;
        let prefix2 = (bytes[1] % 26 + b'A') as char;
        let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
        format!("{}{}-{:04}", prefix1, prefix2, number)
    }
}
