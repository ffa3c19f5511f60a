//! Sprig IR - identity handles shared across compiler phases.
//!
//! The front end hands out small `Copy` handles instead of owning references
//! to program-model objects:
//! - `AbsPath` for canonical, absolute file-system paths
//! - `DeclId` for declared classes
//! - `NodeId` for syntactic locations
//!
//! Handles are only ever compared and hashed. Whoever created a handle owns
//! the object it stands for; consumers such as the resource registry store
//! the handle and never look through it.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod ids;
mod path;

pub use ids::{DeclId, NodeId};
pub use path::{AbsPath, InternError, PathInterner, SharedPathInterner};

mod size_asserts {
    use super::{AbsPath, DeclId, NodeId};
    crate::static_assert_size!(AbsPath, 4);
    crate::static_assert_size!(DeclId, 4);
    crate::static_assert_size!(NodeId, 4);
}
