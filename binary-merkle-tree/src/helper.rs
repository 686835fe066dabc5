/// Smallest power of two `>= n`, with `next_power_of_two(0) == 1`.
///
/// Computed by smearing the highest set bit of `n - 1` into every lower bit.
///
/// # Safety (arithmetic)
///
/// Overflows when `n > 2^63`. A tree can never hold that many leaves, so
/// callers building from in-memory element lists stay well below the limit.
pub fn next_power_of_two(n: u64) -> u64 {
    if n == 0 {
        return 1;
    }
    let mut n = n - 1;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    n |= n >> 32;
    n + 1
}

/// Number of levels above the leaves in a complete tree of `leaf_count`
/// leaves. `leaf_count` must be a power of two.
pub(crate) fn height_for_leaf_count(leaf_count: u64) -> u32 {
    debug_assert!(leaf_count.is_power_of_two());
    leaf_count.trailing_zeros()
}
