use crate::equation::alphabet::ALPHABET;

/// Characters allowed into open cells: the equation alphabet minus the
/// blacklist, in alphabet order.
pub(crate) fn fill_pool(blacklist: &[char]) -> Vec<char> {
    ALPHABET
        .chars()
        .filter(|c| !blacklist.contains(c))
        .collect()
}

/// Decodes `rank` into one pool character per open cell.
///
/// Ranks count through the fills like a mixed-radix number with the leftmost
/// cell most significant, so walking ranks upward walks the fills in
/// alphabet order. `pool` must not be empty.
pub(crate) fn decode_fill(rank: u64, pool: &[char], cells: usize) -> Vec<char> {
    let base = pool.len() as u64;
    let mut remaining = rank;
    let mut fills = Vec::with_capacity(cells);
    for _ in 0..cells {
        fills.push(pool[(remaining % base) as usize]);
        remaining /= base;
    }
    fills.reverse();
    fills
}
