pub const GAP_SHRINK_NUMERATOR: usize = 10;
pub const GAP_SHRINK_DENOMINATOR: usize = 13;
pub const MIN_GAP: usize = 1;

const fn shrinks(numerator: usize, denominator: usize) -> bool {
    numerator != 0 && numerator < denominator
}

const _: () = {
    assert!(shrinks(GAP_SHRINK_NUMERATOR, GAP_SHRINK_DENOMINATOR), "gap ratio must shrink the gap");
    assert!(MIN_GAP >= 1, "comb sort degenerates below gap 1");
};
