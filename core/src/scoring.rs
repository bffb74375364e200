use std::collections::{BTreeSet, HashSet};

use crate::cluster::connected_group;
use crate::{CLUSTER_BASE_POINTS, CLUSTER_GROWTH_POINTS, MIN_SCORING_CLUSTER};

/// Result of scoring one side's claimed cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    /// Total points for the owned set
    pub total: u32,
    /// Cells belonging to any scoring cluster, deduplicated and ascending
    pub combo_cells: Vec<u8>,
}

/// Score a side's owned cells from scratch.
///
/// Every member cell contributes the value of its own connected group
/// when that group reaches [`MIN_SCORING_CLUSTER`]: a cluster of size k
/// is therefore counted once per member, k * (10 + 5*(k-3)) in total.
/// Groups below the threshold contribute nothing.
pub fn score_report(owned: &HashSet<u8>) -> ScoreReport {
    let mut total = 0u32;
    let mut combo = BTreeSet::new();

    for &cell in owned {
        let group = connected_group(cell, owned);
        if group.len() >= MIN_SCORING_CLUSTER {
            total += CLUSTER_BASE_POINTS
                + CLUSTER_GROWTH_POINTS * (group.len() - MIN_SCORING_CLUSTER) as u32;
            combo.extend(group);
        }
    }

    ScoreReport {
        total,
        combo_cells: combo.into_iter().collect(),
    }
}
