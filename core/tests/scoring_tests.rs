use std::collections::HashSet;

use voxclaim_core::scoring::score_report;

fn owned(indices: &[u8]) -> HashSet<u8> {
    indices.iter().copied().collect()
}

#[test]
fn empty_set_scores_zero() {
    let report = score_report(&owned(&[]));
    assert_eq!(report.total, 0);
    assert!(report.combo_cells.is_empty());
}

#[test]
fn clusters_below_three_score_zero() {
    // two adjacent cells and one lone cell
    let report = score_report(&owned(&[0, 1, 26]));
    assert_eq!(report.total, 0);
    assert!(report.combo_cells.is_empty());
}

#[test]
fn straight_line_of_three_scores_thirty() {
    // (0,0,0), (0,0,1), (0,0,2): one cluster of size 3, counted once
    // per member cell, 3 * (10 + 5*0) = 30
    let report = score_report(&owned(&[0, 1, 2]));
    assert_eq!(report.total, 30);
    assert_eq!(report.combo_cells, vec![0, 1, 2]);
}

#[test]
fn cluster_of_four_scores_sixty() {
    // the z-line extended by (0,1,2): size 4, 4 * (10 + 5*1) = 60
    let report = score_report(&owned(&[0, 1, 2, 5]));
    assert_eq!(report.total, 60);
    assert_eq!(report.combo_cells, vec![0, 1, 2, 5]);
}

#[test]
fn separate_clusters_add_up() {
    // two disjoint z-lines at opposite edges of the cube
    let report = score_report(&owned(&[0, 1, 2, 24, 25, 26]));
    assert_eq!(report.total, 60);
    assert_eq!(report.combo_cells, vec![0, 1, 2, 24, 25, 26]);
}

#[test]
fn non_scoring_cells_stay_out_of_the_combo_set() {
    let report = score_report(&owned(&[0, 1, 2, 26]));
    assert_eq!(report.total, 30);
    assert_eq!(report.combo_cells, vec![0, 1, 2]);
}

#[test]
fn scoring_is_idempotent() {
    let cells = owned(&[0, 1, 2, 5, 14, 26]);
    let first = score_report(&cells);
    let second = score_report(&cells);
    assert_eq!(first, second);
}
