// SPDX-License-Identifier: MIT OR Apache-2.0

use voxclaim_core::{
    BlockingStrategy, Game, GameError, Grid, MoveStrategy, Phase, Side, CELL_COUNT,
};

/// Strategy that always claims the lowest free cell, for scripted games
struct LowestFree;

impl MoveStrategy for LowestFree {
    fn choose_move(&mut self, grid: &Grid) -> Result<u8, GameError> {
        grid.free_cells()
            .first()
            .copied()
            .ok_or(GameError::NoFreeCell)
    }
}

#[test]
fn moves_are_rejected_before_start() {
    let mut game = Game::new();
    assert_eq!(game.phase(), Phase::AwaitingStart);
    assert_eq!(
        game.submit_player_move(0),
        Err(GameError::InvalidTransition)
    );
    assert_eq!(game.grid().claimed_count(), 0);
}

#[test]
fn start_is_only_legal_from_awaiting_start() {
    let mut game = Game::new();
    game.start().unwrap();
    assert_eq!(game.start(), Err(GameError::InvalidTransition));

    // a reset re-arms it
    game.reset();
    assert!(game.start().is_ok());
}

#[test]
fn player_move_hands_the_turn_to_the_computer() {
    let mut game = Game::new();
    game.start().unwrap();

    let outcome = game.submit_player_move(13).unwrap();
    assert_eq!(outcome.cell, 13);
    assert_eq!(outcome.side, Side::Player);
    assert_eq!(outcome.score, 0);
    assert!(outcome.combo_cells.is_empty());
    assert_eq!(outcome.phase, Phase::ComputerTurn);
    assert!(outcome.final_score.is_none());
    assert_eq!(game.phase(), Phase::ComputerTurn);
}

#[test]
fn player_input_is_rejected_during_computer_turn() {
    let mut game = Game::new();
    game.start().unwrap();
    game.submit_player_move(0).unwrap();

    let before = (game.phase(), game.score(Side::Player), game.grid().claimed_count());
    assert_eq!(
        game.submit_player_move(1),
        Err(GameError::InvalidTransition)
    );
    let after = (game.phase(), game.score(Side::Player), game.grid().claimed_count());
    assert_eq!(before, after, "rejected move must not change state");
}

#[test]
fn occupied_and_out_of_range_cells_are_rejected_without_mutation() {
    let mut game = Game::new();
    game.start().unwrap();
    game.submit_player_move(0).unwrap();
    game.play_computer_move(&mut LowestFree).unwrap(); // takes cell 1

    assert_eq!(game.submit_player_move(1), Err(GameError::CellOccupied));
    assert_eq!(game.submit_player_move(27), Err(GameError::InvalidIndex));
    assert_eq!(game.grid().claimed_count(), 2);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn computer_move_requires_computer_turn() {
    let mut game = Game::new();
    game.start().unwrap();
    assert_eq!(
        game.play_computer_move(&mut LowestFree),
        Err(GameError::InvalidTransition)
    );
}

#[test]
fn scores_are_recomputed_after_each_move() {
    let mut game = Game::new();
    game.start().unwrap();

    // player builds the z-line 0-1-2 while the computer is scripted
    // onto cells far away from it
    let mut replies = ScriptedMoves(vec![18, 20, 24]);
    game.submit_player_move(0).unwrap();
    game.play_computer_move(&mut replies).unwrap();
    game.submit_player_move(1).unwrap();
    game.play_computer_move(&mut replies).unwrap();
    let outcome = game.submit_player_move(2).unwrap();

    assert_eq!(outcome.score, 30);
    assert_eq!(outcome.combo_cells, vec![0, 1, 2]);
    assert_eq!(game.score(Side::Player), 30);
    assert_eq!(game.score(Side::Computer), 0);
}

/// Strategy replaying a fixed list of cells
struct ScriptedMoves(Vec<u8>);

impl MoveStrategy for ScriptedMoves {
    fn choose_move(&mut self, _grid: &Grid) -> Result<u8, GameError> {
        if self.0.is_empty() {
            return Err(GameError::NoFreeCell);
        }
        Ok(self.0.remove(0))
    }
}

#[test]
fn game_ends_exactly_when_the_grid_fills() {
    let mut game = Game::new();
    game.start().unwrap();
    let mut strategy = LowestFree;

    loop {
        let free = game.grid().free_cells();
        let cell = *free.last().unwrap();
        let outcome = game.submit_player_move(cell).unwrap();

        if outcome.phase == Phase::GameOver {
            break;
        }
        let reply = game.play_computer_move(&mut strategy).unwrap();
        if reply.phase == Phase::GameOver {
            break;
        }
    }

    assert!(game.grid().is_full());
    assert_eq!(game.grid().claimed_count(), CELL_COUNT as usize);
    assert_eq!(game.phase(), Phase::GameOver);

    // terminal: nothing is accepted until a reset + start
    assert_eq!(
        game.submit_player_move(0),
        Err(GameError::InvalidTransition)
    );
    assert_eq!(
        game.play_computer_move(&mut strategy),
        Err(GameError::InvalidTransition)
    );
}

#[test]
fn winner_is_decided_by_strict_comparison() {
    let mut game = Game::new();
    game.start().unwrap();
    let mut strategy = BlockingStrategy::seeded(7);

    loop {
        let cell = *game.grid().free_cells().first().unwrap();
        if game.submit_player_move(cell).unwrap().phase == Phase::GameOver {
            break;
        }
        if game.play_computer_move(&mut strategy).unwrap().phase == Phase::GameOver {
            break;
        }
    }

    let standing = game.final_score().unwrap();
    match standing.winner {
        Some(Side::Player) => assert!(standing.player_score > standing.computer_score),
        Some(Side::Computer) => assert!(standing.computer_score > standing.player_score),
        None => assert_eq!(standing.player_score, standing.computer_score),
    }
}

#[test]
fn equal_scores_are_a_tie() {
    // a finished game restored from a serialized snapshot with equal
    // totals must report no winner
    let snapshot = serde_json::json!({
        "grid": {
            "cells": (0..27)
                .map(|i| if i % 2 == 0 { "Player" } else { "Computer" })
                .collect::<Vec<_>>()
        },
        "player_score": 30,
        "computer_score": 30,
        "phase": "GameOver"
    });

    let game: Game = serde_json::from_value(snapshot).unwrap();
    let standing = game.final_score().unwrap();
    assert_eq!(standing.winner, None);
    assert_eq!(standing.player_score, standing.computer_score);
}

#[test]
fn reset_clears_everything_from_any_phase() {
    let mut game = Game::new();
    game.start().unwrap();
    game.submit_player_move(0).unwrap();

    game.reset();
    assert_eq!(game.phase(), Phase::AwaitingStart);
    assert_eq!(game.grid().claimed_count(), 0);
    assert_eq!(game.score(Side::Player), 0);
    assert_eq!(game.score(Side::Computer), 0);
    assert!(game.final_score().is_none());
}
