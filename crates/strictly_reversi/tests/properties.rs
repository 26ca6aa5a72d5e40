//! Property tests over random playouts.

use proptest::prelude::*;
use strictly_reversi::{Board, Cell, Player, Position};

/// Plays up to `choices.len()` plies, each picking a legal move by index.
fn playout(choices: &[usize]) -> (Board, Player) {
    let mut board = Board::new();
    let mut player = Player::X;
    for choice in choices {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            player = player.opponent();
            if !board.has_legal_move(player) {
                break;
            }
            continue;
        }
        let pos = moves[choice % moves.len()];
        assert!(board.apply_move(pos.row() as i32, pos.col() as i32, player));
        player = player.opponent();
    }
    (board, player)
}

proptest! {
    #[test]
    fn legality_does_not_depend_on_apply_flag(
        choices in prop::collection::vec(any::<usize>(), 0..40),
        row in -2i32..10,
        col in -2i32..10,
    ) {
        let (board, player) = playout(&choices);
        let legal = board.is_legal_move(row, col, player);

        let mut flipped = board.clone();
        prop_assert_eq!(flipped.flip_captures(row, col, player), legal);
        if !legal {
            prop_assert_eq!(&flipped, &board);
        }
    }

    #[test]
    fn legal_move_adds_one_disc_and_flips_exactly_the_bracket(
        choices in prop::collection::vec(any::<usize>(), 0..40),
        pick in any::<usize>(),
    ) {
        let (board, player) = playout(&choices);
        let moves = board.legal_moves(player);
        prop_assume!(!moves.is_empty());
        let pos = moves[pick % moves.len()];
        let flips = board.flips_for(pos, player);
        prop_assert!(!flips.is_empty());

        let mut after = board.clone();
        prop_assert!(after.apply_move(pos.row() as i32, pos.col() as i32, player));

        prop_assert_eq!(after.empty_count() + 1, board.empty_count());
        prop_assert_eq!(
            after.count(player),
            board.count(player) + flips.len() + 1
        );
        for p in Position::all() {
            let changed = after.get(p) != board.get(p);
            prop_assert_eq!(changed, p == pos || flips.contains(&p));
            if changed {
                prop_assert_eq!(after.get(p), Cell::Occupied(player));
            }
        }
    }

    #[test]
    fn has_legal_move_agrees_with_legal_moves(
        choices in prop::collection::vec(any::<usize>(), 0..60),
    ) {
        let (board, _) = playout(&choices);
        for player in [Player::X, Player::O] {
            prop_assert_eq!(board.has_legal_move(player), !board.legal_moves(player).is_empty());
        }
    }
}
