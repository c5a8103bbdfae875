//! `blockalloc` — the page-granular arena layer beneath a managed-runtime
//! allocator.
//!
//! This crate owns exactly the part of a slab/large-object heap that deals
//! in whole OS pages inside a single 2 MiB huge-page block: a bitmap of
//! which pages are occupied ([`bitmap::Bitmap`]), the block-level tracker
//! that hands out and reclaims page runs ([`block::BlockDescriptor`]), and
//! the per-allocation metadata that records the shape of what was handed
//! out ([`extent::Extent`]).
//!
//! Everything above this layer — which block an arena picks, the
//! size-class table, the malloc/free surface, returning pages to the OS —
//! lives one level up and is treated here only through the narrow
//! interfaces in [`slot`] and [`compare`].
//!
//! # Concurrency
//!
//! A [`block::BlockDescriptor`] is single-owner: no primitive here may be
//! called concurrently on the same descriptor. Serialization is the
//! calling arena's job (typically a per-arena lock). Every operation in
//! this crate is non-blocking and bounded-time; none perform I/O,
//! allocation, or syscalls.
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

#[macro_use]
extern crate log;

#[macro_use]
pub mod contracts;

pub mod bitmap;
pub mod block;
pub mod compare;
pub mod extent;
pub mod slot;

pub use bitmap::Bitmap;
pub use block::BlockDescriptor;
pub use extent::Extent;

/// OS page size in bytes.
pub const PAGE_SIZE: usize = 4096;

/// Number of OS pages inside one huge-page block.
pub const PAGES_IN_BLOCK: usize = 512;

/// Size in bytes of one huge-page block (`PAGES_IN_BLOCK * PAGE_SIZE`).
pub const HUGE_PAGE_SIZE: usize = PAGES_IN_BLOCK * PAGE_SIZE;

/// Number of fixed-size slots an `Extent` slab bitmap can track. Bounds
/// the `slot_count` argument `Extent::init_slab` accepts; checked against
/// `Bitmap::CAPACITY` in `contracts.rs`.
pub const SLAB_SLOTS: usize = 512;

/// Number of usable bits in a virtual address, per spec.md's comparator
/// requirement (`LgAddressSpace <= 56`).
pub const LG_ADDRESS_SPACE: usize = 47;

/// Number of small size classes the `size_class` field needs to be able
/// to represent. Supplied by the arena layer in a real system; fixed here
/// so `Extent::init_slab` can reject an out-of-range `size_class` and
/// `contracts.rs` can assert it fits the packed bit layout.
pub const SMALL_CLASS_COUNT: usize = 40;

/// Mask applied to an arena index by the layer above to recover the
/// "contains pointers" convention bit (odd arenas hold pointer-bearing
/// memory, even arenas hold raw bytes).
pub const ARENA_MASK: usize = 0x1;

static_assertions::const_assert!(PAGES_IN_BLOCK.is_power_of_two());
static_assertions::const_assert!(PAGE_SIZE.is_power_of_two());
static_assertions::const_assert!(LG_ADDRESS_SPACE <= 56);
