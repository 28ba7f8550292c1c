//! Single-cut crossover with duplicate repair.
//!
//! # Algorithm
//!
//! For a cut position `pos ∈ [1, len)`:
//!
//! ```text
//! child1 = parent1[..pos] ++ parent2[pos..]
//! child2 = parent2[..pos] ++ parent1[pos..]
//! ```
//!
//! Splicing can duplicate genes. The repair pass scans each child's prefix;
//! a gene that occurs twice in the child is replaced by the next gene of the
//! prefix parent's own suffix that the child is still missing, in that
//! parent's order. Both children are permutations of the parents' genes
//! afterwards.

use std::collections::HashMap;

use rand::Rng;

use crate::models::Gene;

/// Crosses two parent permutations at a random cut.
///
/// Genes referring to `placeholder` are never treated as duplicates.
/// Parents with fewer than two genes are returned as copies.
///
/// # Examples
///
/// ```
/// use delivery_routing::ga::crossover;
/// use delivery_routing::models::Gene;
/// use rand::SeedableRng;
///
/// let p1: Vec<Gene> = [0, 1, 2, 3].iter().map(|&n| Gene::new(n, 1)).collect();
/// let p2: Vec<Gene> = [3, 2, 1, 0].iter().map(|&n| Gene::new(n, 1)).collect();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
///
/// let (c1, c2) = crossover(&p1, &p2, usize::MAX, &mut rng);
/// for child in [c1, c2] {
///     let mut nodes: Vec<usize> = child.iter().map(|g| g.node).collect();
///     nodes.sort();
///     assert_eq!(nodes, vec![0, 1, 2, 3]);
/// }
/// ```
pub fn crossover<R: Rng>(
    parent1: &[Gene],
    parent2: &[Gene],
    placeholder: usize,
    rng: &mut R,
) -> (Vec<Gene>, Vec<Gene>) {
    let len = parent1.len().min(parent2.len());
    if len < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let pos = rng.random_range(1..len);
    crossover_at(parent1, parent2, pos, placeholder)
}

/// Crosses two parent permutations at the given cut position.
pub fn crossover_at(
    parent1: &[Gene],
    parent2: &[Gene],
    pos: usize,
    placeholder: usize,
) -> (Vec<Gene>, Vec<Gene>) {
    let mut child1: Vec<Gene> = parent1[..pos].iter().chain(&parent2[pos..]).copied().collect();
    let mut child2: Vec<Gene> = parent2[..pos].iter().chain(&parent1[pos..]).copied().collect();

    repair(&mut child1, &parent1[pos..], pos, placeholder);
    repair(&mut child2, &parent2[pos..], pos, placeholder);

    (child1, child2)
}

fn repair(child: &mut [Gene], donor: &[Gene], pos: usize, placeholder: usize) {
    let mut counts: HashMap<usize, usize> = HashMap::with_capacity(child.len());
    for gene in child.iter() {
        *counts.entry(gene.node).or_insert(0) += 1;
    }

    for idx in 0..pos {
        let gene = child[idx];
        if gene.node == placeholder || counts[&gene.node] <= 1 {
            continue;
        }
        let missing = donor
            .iter()
            .find(|d| counts.get(&d.node).copied().unwrap_or(0) == 0);
        if let Some(&replacement) = missing {
            if let Some(count) = counts.get_mut(&gene.node) {
                *count -= 1;
            }
            *counts.entry(replacement.node).or_insert(0) += 1;
            child[idx] = replacement;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn genes(nodes: &[usize]) -> Vec<Gene> {
        nodes.iter().map(|&n| Gene::new(n, n as u32 + 1)).collect()
    }

    fn nodes(genes: &[Gene]) -> Vec<usize> {
        genes.iter().map(|g| g.node).collect()
    }

    #[test]
    fn test_crossover_without_conflicts() {
        let p1 = genes(&[0, 1, 2, 3]);
        let p2 = genes(&[1, 0, 3, 2]);
        let (c1, c2) = crossover_at(&p1, &p2, 2, usize::MAX);
        assert_eq!(nodes(&c1), vec![0, 1, 3, 2]);
        assert_eq!(nodes(&c2), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_crossover_repairs_duplicates_from_own_suffix() {
        let p1 = genes(&[0, 1, 2, 3, 4]);
        let p2 = genes(&[4, 3, 2, 1, 0]);
        // raw child1 = [0, 1 | 2, 1, 0] → 0 and 1 duplicated, 3 and 4 missing
        let (c1, c2) = crossover_at(&p1, &p2, 2, usize::MAX);
        assert_eq!(nodes(&c1), vec![3, 4, 2, 1, 0]);
        // raw child2 = [4, 3 | 2, 3, 4] → 4 → 1 and 3 → 0, taken from p2's suffix [2, 1, 0]
        assert_eq!(nodes(&c2), vec![1, 0, 2, 3, 4]);
    }

    #[test]
    fn test_crossover_keeps_demands() {
        let p1 = genes(&[0, 1, 2, 3, 4]);
        let p2 = genes(&[4, 3, 2, 1, 0]);
        let (c1, _) = crossover_at(&p1, &p2, 2, usize::MAX);
        for g in c1 {
            assert_eq!(g.demand, g.node as u32 + 1);
        }
    }

    #[test]
    fn test_crossover_placeholder_may_repeat() {
        let p1 = genes(&[9, 1, 9, 2]);
        let p2 = genes(&[9, 2, 9, 1]);
        let (c1, _) = crossover_at(&p1, &p2, 1, 9);
        assert_eq!(nodes(&c1), vec![9, 2, 9, 1]);
    }

    #[test]
    fn test_crossover_short_parents_are_copied() {
        let p1 = genes(&[0]);
        let p2 = genes(&[0]);
        let mut rng = StdRng::seed_from_u64(0);
        let (c1, c2) = crossover(&p1, &p2, usize::MAX, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    proptest! {
        #[test]
        fn prop_children_are_permutations(
            size in 2usize..30,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut p1: Vec<usize> = (0..size).collect();
            let mut p2 = p1.clone();
            p1.shuffle(&mut rng);
            p2.shuffle(&mut rng);
            let (c1, c2) = crossover(&genes(&p1), &genes(&p2), usize::MAX, &mut rng);

            let expected: Vec<usize> = (0..size).collect();
            for child in [c1, c2] {
                prop_assert_eq!(child.len(), size);
                let mut sorted = nodes(&child);
                sorted.sort();
                prop_assert_eq!(sorted, expected.clone());
            }
        }
    }
}
