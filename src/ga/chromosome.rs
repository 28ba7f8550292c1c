//! Permutation chromosome with a per-instance best-decoding memo.
//!
//! A chromosome encodes a VRP solution as a permutation of all customer genes
//! (the depot is never a gene). Each fitness evaluation refines the
//! capacity-bounded segments of that permutation with tabu search, so the
//! same genes can score differently from one evaluation to the next. The
//! chromosome keeps the best score it has seen together with the refined
//! gene order that produced it.

use crate::models::Gene;

/// A permutation of customer genes plus its memoized best decoding.
///
/// The memo belongs to this value only: a freshly created chromosome starts
/// at `f64::INFINITY` even if another chromosome holds the same genes.
///
/// # Examples
///
/// ```
/// use delivery_routing::ga::Chromosome;
/// use delivery_routing::models::Gene;
///
/// let mut c = Chromosome::new(vec![Gene::new(1, 5), Gene::new(0, 5)]);
/// assert_eq!(c.best_fitness(), f64::INFINITY);
///
/// c.consider(12.0, vec![Gene::new(0, 5), Gene::new(1, 5)]);
/// assert_eq!(c.consider(15.0, vec![]), 12.0);
/// assert_eq!(c.best_order(), &[Gene::new(0, 5), Gene::new(1, 5)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<Gene>,
    best_fitness: f64,
    best_order: Vec<Gene>,
}

impl Chromosome {
    /// Creates a chromosome with an empty memo.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            best_fitness: f64::INFINITY,
            best_order: Vec::new(),
        }
    }

    /// The gene permutation.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Lowest fitness recorded for this chromosome (`INFINITY` if never evaluated).
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Refined gene order behind [`best_fitness`](Self::best_fitness); empty if never evaluated.
    pub fn best_order(&self) -> &[Gene] {
        &self.best_order
    }

    /// The order to decode into routes: the memoized one, or the raw genes
    /// if the chromosome was never evaluated.
    pub fn phenotype(&self) -> &[Gene] {
        if self.best_order.is_empty() {
            &self.genes
        } else {
            &self.best_order
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Offers a candidate decoding.
    ///
    /// The memo is replaced when `cost` is not worse than the recorded best.
    /// Returns the memoized fitness afterwards.
    pub fn consider(&mut self, cost: f64, order: Vec<Gene>) -> f64 {
        if cost <= self.best_fitness {
            self.best_fitness = cost;
            self.best_order = order;
        }
        self.best_fitness
    }
}
