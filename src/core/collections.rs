//! Collection aliases used throughout the mesh.
//!
//! The concrete storage backend and hash function are chosen here so the rest
//! of the crate only names the aliases.
//!
//! # Feature Flags
//!
//! - **default**: `dense-slotmap` stores points and triangles in a
//!   [`slotmap::DenseSlotMap`] (fast iteration)
//! - **--no-default-features**: uses [`slotmap::SlotMap`]

use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use smallvec::SmallVec;

#[cfg(not(feature = "dense-slotmap"))]
use slotmap::SlotMap;

#[cfg(feature = "dense-slotmap")]
use slotmap::DenseSlotMap;

use crate::core::edge::EdgeKey;
use crate::core::mesh::TriangleKey;

// =============================================================================
// STORAGE BACKEND
// =============================================================================

/// Arena backing points and triangles.
///
/// Not exposed in public signatures; the mesh hands out iterators instead.
#[cfg(not(feature = "dense-slotmap"))]
pub type StorageMap<K, V> = SlotMap<K, V>;

/// Arena backing points and triangles.
///
/// Not exposed in public signatures; the mesh hands out iterators instead.
#[cfg(feature = "dense-slotmap")]
pub type StorageMap<K, V> = DenseSlotMap<K, V>;

// =============================================================================
// HASHING
// =============================================================================

/// `HashMap` with the non-cryptographic `FxHasher`.
///
/// Not DoS-resistant; keys here are internal slotmap keys.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::core::collections::FastHashMap;
///
/// let mut map: FastHashMap<u64, usize> = FastHashMap::default();
/// map.insert(123, 456);
/// assert_eq!(map.get(&123), Some(&456));
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// `HashSet` with the non-cryptographic `FxHasher`.
pub type FastHashSet<T> = FxHashSet<T>;

/// Build hasher for [`FastHashMap`] and [`FastHashSet`].
pub type FastBuildHasher = FxBuildHasher;

/// Creates a [`FastHashMap`] with pre-allocated capacity.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::core::collections::fast_hash_map_with_capacity;
///
/// let map = fast_hash_map_with_capacity::<u64, usize>(100);
/// assert!(map.capacity() >= 100);
/// ```
#[inline]
#[must_use]
pub fn fast_hash_map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}

/// Creates a [`FastHashSet`] with pre-allocated capacity.
#[inline]
#[must_use]
pub fn fast_hash_set_with_capacity<T>(capacity: usize) -> FastHashSet<T> {
    FastHashSet::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}

// =============================================================================
// SMALL BUFFERS
// =============================================================================

/// Stack-allocated buffer that spills to the heap past `N` elements.
///
/// # Examples
///
/// ```rust
/// use planar_delaunay::core::collections::SmallBuffer;
///
/// let mut buffer: SmallBuffer<i32, 4> = SmallBuffer::new();
/// buffer.extend([1, 2, 3]);
/// assert_eq!(buffer.len(), 3);
/// assert!(!buffer.spilled());
/// ```
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

/// Triangles adjacent to one edge. Never more than two in a valid mesh.
pub type EdgeTriangles = SmallBuffer<TriangleKey, 2>;

/// Triangle keys touched by one split.
///
/// Inline for the usual case of up to four; a hull extension over many
/// edges spills to the heap.
pub type TriangleKeyBuffer = SmallBuffer<TriangleKey, 4>;

/// Edges waiting for a legality check.
pub type EdgeWorklist = Vec<EdgeKey>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_helpers_preallocate() {
        let map = fast_hash_map_with_capacity::<u32, u32>(32);
        assert!(map.capacity() >= 32);
        let set = fast_hash_set_with_capacity::<u32>(16);
        assert!(set.capacity() >= 16);
    }

    #[test]
    fn edge_triangles_stay_inline() {
        let mut buffer = EdgeTriangles::new();
        buffer.push(TriangleKey::default());
        buffer.push(TriangleKey::default());
        assert!(!buffer.spilled());
    }
}
