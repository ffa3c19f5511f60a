//! Interned absolute file-system paths.
//!
//! Path resolution happens upstream; by the time a path reaches the
//! interner it is already canonical and absolute. Interning turns it into
//! a 4-byte `AbsPath` so that every index keyed by path hashes and compares
//! an integer instead of a string.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Interned, canonical absolute path.
///
/// Equal path strings interned through the same `PathInterner` yield equal
/// handles. The handle carries no structure of its own; use
/// `PathInterner::lookup` to get the text back.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct AbsPath(u32);

impl AbsPath {
    /// Highest index the interner will hand out.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    #[inline]
    const fn new(index: u32) -> Self {
        AbsPath(index)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Hash for AbsPath {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for AbsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbsPath({})", self.0)
    }
}

/// Error when interning a path fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// More paths than an `AbsPath` can address.
    #[error("path interner exceeded capacity: {count} paths, max is {max}", max = AbsPath::MAX_INDEX)]
    Overflow { count: usize },
}

#[derive(Default)]
struct PathTable {
    /// Map from path text to index.
    map: FxHashMap<&'static str, u32>,
    /// Path text by index.
    paths: Vec<&'static str>,
}

/// Path interner for one analysis session.
///
/// Reads take a shared lock; only the first sighting of a path takes the
/// write lock.
#[derive(Default)]
pub struct PathInterner {
    table: RwLock<PathTable>,
}

impl PathInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to intern a path, returning its handle or an error on overflow.
    pub fn try_intern(&self, path: &str) -> Result<AbsPath, InternError> {
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(path) {
                return Ok(AbsPath::new(index));
            }
        }

        let mut guard = self.table.write();

        // Another writer may have won the race between the two locks
        if let Some(&index) = guard.map.get(path) {
            return Ok(AbsPath::new(index));
        }

        let count = guard.paths.len();
        let index = u32::try_from(count)
            .ok()
            .filter(|&i| i <= AbsPath::MAX_INDEX)
            .ok_or(InternError::Overflow { count })?;

        // Interned paths live for the whole process
        let leaked: &'static str = Box::leak(path.to_owned().into_boxed_str());
        guard.paths.push(leaked);
        guard.map.insert(leaked, index);

        Ok(AbsPath::new(index))
    }

    /// Intern a path, returning its handle.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity. Use `try_intern` for
    /// fallible interning.
    #[inline]
    pub fn intern(&self, path: &str) -> AbsPath {
        self.try_intern(path).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the text of an interned path.
    ///
    /// Handles from a different interner are a caller error and panic on
    /// an out-of-range index.
    pub fn lookup(&self, path: AbsPath) -> &'static str {
        self.table.read().paths[path.index()]
    }

    /// Number of distinct paths interned so far.
    pub fn len(&self) -> usize {
        self.table.read().paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for PathInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathInterner")
            .field("len", &self.len())
            .finish()
    }
}

/// Shared interner for handing one path table to several phases.
#[derive(Clone, Default, Debug)]
pub struct SharedPathInterner(Arc<PathInterner>);

impl SharedPathInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedPathInterner(Arc::new(PathInterner::new()))
    }
}

impl std::ops::Deref for SharedPathInterner {
    type Target = PathInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
