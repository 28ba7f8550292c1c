//! Greedy capacity split of a gene sequence into vehicle segments.
//!
//! # Algorithm
//!
//! Walks the genes in order, accumulating demand. A segment is closed after
//! gene `i` when the sequence ends or when adding gene `i + 1` would exceed
//! the vehicle capacity. Segment order and gene order are preserved.
//!
//! Unlike an optimal split, boundaries are decided greedily, so the genetic
//! algorithm controls the partition entirely through the permutation.
//!
//! # Complexity
//!
//! O(n).

use crate::models::Gene;

/// Splits `genes` into consecutive capacity-bounded segments.
///
/// Every segment's demand is at most `capacity`, unless a single gene
/// already exceeds it (such a gene forms a segment on its own).
///
/// # Examples
///
/// ```
/// use delivery_routing::ga::split_by_capacity;
/// use delivery_routing::models::Gene;
///
/// let genes = [Gene::new(0, 5), Gene::new(1, 5), Gene::new(2, 5)];
/// let segments = split_by_capacity(&genes, 10);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0], &genes[..2]);
/// assert_eq!(segments[1], &genes[2..]);
/// ```
pub fn split_by_capacity(genes: &[Gene], capacity: u32) -> Vec<&[Gene]> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut load: u64 = 0;

    for (i, gene) in genes.iter().enumerate() {
        load += u64::from(gene.demand);
        let closes = match genes.get(i + 1) {
            None => true,
            Some(next) => load + u64::from(next.demand) > u64::from(capacity),
        };
        if closes {
            segments.push(&genes[start..=i]);
            start = i + 1;
            load = 0;
        }
    }

    segments
}
