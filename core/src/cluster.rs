// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connected-component analysis over claimed cells

use std::collections::HashSet;

use crate::Coord;

/// Find the maximal group of cells reachable from `seed` through
/// orthogonally adjacent members of `owned`.
///
/// The seed itself is always part of the result; `owned` is only
/// consulted when expanding to neighbors. Hypothetical queries ("what if
/// this empty cell were claimed?") pass `owned` with the seed already
/// inserted. Only the resulting set is a contract, not the visit order.
pub fn connected_group(seed: u8, owned: &HashSet<u8>) -> HashSet<u8> {
    let mut group = HashSet::from([seed]);
    let mut stack = vec![seed];

    while let Some(current) = stack.pop() {
        for neighbor in Coord::from_index(current).adjacent_coords() {
            let idx = neighbor.index();
            if owned.contains(&idx) && !group.contains(&idx) {
                group.insert(idx);
                stack.push(idx);
            }
        }
    }

    group
}
