// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII grid rendering for the CLI.

use voxclaim_core::{Coord, Game, Grid, Side, GRID_SIZE};

/// Render the three x-layers of the grid side by side.
///
/// Within a layer, rows are y (top to bottom) and columns are z.
pub fn render_grid(grid: &Grid) -> String {
    let mut output = String::new();

    output.push_str("    ");
    for x in 0..GRID_SIZE {
        output.push_str(&format!("x={}      ", x));
    }
    output.push('\n');

    for y in 0..GRID_SIZE {
        output.push_str(&format!("y={} ", y));
        for x in 0..GRID_SIZE {
            for z in 0..GRID_SIZE {
                let symbol = match grid.get(Coord::new(x, y, z).index()) {
                    Some(Side::Player) => '●',
                    Some(Side::Computer) => '○',
                    None => '.',
                };
                output.push(symbol);
                output.push(' ');
            }
            output.push_str("   ");
        }
        output.push('\n');
    }

    output
}

/// One-line score summary
pub fn render_scores(game: &Game) -> String {
    format!(
        "Your Score: {}  Computer Score: {}  [{:?}]",
        game.score(Side::Player),
        game.score(Side::Computer),
        game.phase()
    )
}
