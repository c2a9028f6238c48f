//! Property tests for the outcome evaluator and the engine invariants.

use proptest::prelude::*;
use tictactoe_history::games::tictactoe::invariants::{InvariantSet, TicTacToeInvariants};
use tictactoe_history::games::tictactoe::rules::LINES;
use tictactoe_history::{Action, Board, Outcome, Player, Position, Square, TimeTravelGame, evaluate};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..9).prop_map(|i| Action::Place(Position::ALL[i])),
        1 => (0usize..10).prop_map(Action::JumpTo),
        1 => Just(Action::ToggleOrder),
    ]
}

fn complete(board: &Board, line: &[Position; 3]) -> Option<Player> {
    let first = board.get(line[0]).player()?;
    line.iter()
        .all(|p| board.get(*p) == Square::Occupied(first))
        .then_some(first)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A win names the first complete line in scan order and its occupant
    #[test]
    fn win_is_first_complete_line(board in board()) {
        let first = LINES.iter().find_map(|line| complete(&board, line).map(|p| (p, *line)));
        match evaluate(&board) {
            Outcome::Win { player, line } => {
                prop_assert_eq!(Some((player, line)), first);
            }
            Outcome::Draw => {
                prop_assert_eq!(first, None);
                prop_assert_eq!(board.occupied(), 9);
            }
            Outcome::NoResult => {
                prop_assert_eq!(first, None);
                prop_assert!(board.occupied() < 9);
            }
        }
    }

    /// Invariants hold after any sequence of actions
    #[test]
    fn invariants_hold_after_actions(actions in prop::collection::vec(action(), 0..40)) {
        let mut game = TimeTravelGame::new();
        for action in actions {
            let before = game.clone();
            match game.apply(action) {
                Ok(Some(disposition)) if !disposition.is_applied() => {
                    prop_assert_eq!(&game, &before);
                }
                Err(_) => {
                    prop_assert_eq!(&game, &before);
                }
                _ => {}
            }
            prop_assert!(TicTacToeInvariants::check_all(&game).is_ok());
            prop_assert_eq!(game.next_player(), Player::for_step(game.step()));
        }
    }

    /// Jumps never change the history
    #[test]
    fn jumps_preserve_history(moves in prop::collection::vec(0usize..9, 0..9), target in 0usize..10) {
        let mut game = TimeTravelGame::new();
        for i in moves {
            let _ = game.apply_index(i);
        }
        let history = game.history().to_vec();
        let _ = game.jump_to(target);
        prop_assert_eq!(game.history(), history.as_slice());
    }
}
