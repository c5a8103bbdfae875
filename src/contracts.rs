//! Compile-time size/alignment checks and the runtime-contract macros used
//! throughout `block.rs` and `extent.rs`.
//!
//! None of this is a recoverable-error path: every check here guards a
//! precondition that is a programming bug to violate, per spec.md §7. The
//! macros exist only so call sites read as an explicit contract instead of
//! a bare `debug_assert!`.

use crate::bitmap::Bitmap;
use crate::extent::{
    Extent, ARENA_INDEX_BITS, ARENA_INDEX_SHIFT, FREE_SLOTS_BITS, FREE_SLOTS_SHIFT, IS_SLAB_BITS,
    IS_SLAB_SHIFT, SIZE_CLASS_BITS, SIZE_CLASS_SHIFT,
};
use crate::{
    ARENA_MASK, HUGE_PAGE_SIZE, LG_ADDRESS_SPACE, PAGES_IN_BLOCK, PAGE_SIZE, SLAB_SLOTS,
    SMALL_CLASS_COUNT,
};

/// Asserts a precondition, logging at `error!` before panicking so the
/// last thing on the log line is always what actually went wrong.
#[macro_export]
macro_rules! expect {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            error!($($arg)+);
            panic!($($arg)+);
        }
    };
}

/// Asserts two values are equal, as `expect!` does for booleans.
#[macro_export]
macro_rules! expect_eq {
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::expect!($lhs == $rhs, $($arg)+);
    };
}

static_assertions::const_assert_eq!(HUGE_PAGE_SIZE, PAGES_IN_BLOCK * PAGE_SIZE);
static_assertions::const_assert!(PAGES_IN_BLOCK <= 4096);
static_assertions::const_assert_eq!(ARENA_MASK, 1);
static_assertions::const_assert!(LG_ADDRESS_SPACE <= 56);

// `Extent` must be self-aligned: its size is its own alignment constant,
// so Extents can be packed contiguously in a metadata-slot pool and still
// satisfy the provider's alignment guarantee (spec.md §6).
static_assertions::const_assert_eq!(
    core::mem::size_of::<Extent>(),
    core::mem::align_of::<Extent>()
);

// `Extent::bits`' four packed sub-fields must not alias: each field's
// shifted range ends at or before the next field's shift, per the
// Open Question resolution in DESIGN.md for spec.md §9's own
// (non-disjoint, as literally written) `is_slab`/`arena_index`/
// `free_slots`/`size_class` bit ranges.
static_assertions::const_assert!(IS_SLAB_SHIFT + IS_SLAB_BITS <= ARENA_INDEX_SHIFT);
static_assertions::const_assert!(ARENA_INDEX_SHIFT + ARENA_INDEX_BITS <= FREE_SLOTS_SHIFT);
static_assertions::const_assert!(FREE_SLOTS_SHIFT + FREE_SLOTS_BITS <= SIZE_CLASS_SHIFT);
static_assertions::const_assert!(SIZE_CLASS_SHIFT + SIZE_CLASS_BITS <= 64);

// `SLAB_SLOTS` bounds how many slab slots an Extent can track; it must
// not exceed the slab-slot bitmap's actual capacity.
static_assertions::const_assert!(SLAB_SLOTS <= Bitmap::CAPACITY);

// `SMALL_CLASS_COUNT` must fit in the packed `size_class` field (6 bits,
// spec.md §6 "ClassCount.Small").
static_assertions::const_assert!(SMALL_CLASS_COUNT <= (1 << SIZE_CLASS_BITS));
