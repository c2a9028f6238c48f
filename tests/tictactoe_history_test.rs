//! Tests for the time-travel game engine.

use tictactoe_history::{
    GameView, MoveDisposition, Outcome, Player, Position, SortOrder, Square, TimeTravelGame,
};

fn play(game: &mut TimeTravelGame, moves: &[Position]) {
    for pos in moves {
        assert_eq!(game.apply_move(*pos), MoveDisposition::Applied, "{pos}");
    }
}

#[test]
fn test_first_move_in_center() {
    let mut game = TimeTravelGame::new();
    game.apply_move(Position::Center);

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.step(), 1);
    assert_eq!(game.next_player(), Player::O);
    assert_eq!(game.history()[1].row(), Some(2));
    assert_eq!(game.history()[1].column(), Some(2));
}

#[test]
fn test_top_row_win() {
    let mut game = TimeTravelGame::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::BottomLeft,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ],
    );

    assert_eq!(
        game.outcome(),
        Outcome::Win {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
}

#[test]
fn test_finished_game_ignores_moves() {
    let mut game = TimeTravelGame::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::BottomLeft,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ],
    );
    let before = game.clone();

    assert_eq!(game.apply_move(Position::Center), MoveDisposition::GameOver);
    assert_eq!(game, before);
}

#[test]
fn test_jump_to_start_then_move_truncates() {
    let mut game = TimeTravelGame::new();
    play(&mut game, &[Position::Center, Position::TopLeft, Position::BottomRight]);

    game.jump_to(0).unwrap();
    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.board(), &tictactoe_history::Board::new());

    game.apply_move(Position::TopRight);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.board().get(Position::TopRight), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::Center), Square::Empty);
}

#[test]
fn test_jump_between_steps_is_lossless() {
    let mut game = TimeTravelGame::new();
    play(&mut game, &[Position::Center, Position::TopLeft, Position::BottomRight]);
    let history = game.history().to_vec();

    for step in [2, 0, 3, 1] {
        game.jump_to(step).unwrap();
        assert_eq!(game.step(), step);
        assert_eq!(game.next_player(), Player::for_step(step));
    }
    assert_eq!(game.history(), history.as_slice());
}

#[test]
fn test_toggle_twice_restores_move_list() {
    let mut game = TimeTravelGame::new();
    play(&mut game, &[Position::Center, Position::TopLeft]);
    let before = GameView::from_game(&game);

    game.toggle_order();
    let reversed = GameView::from_game(&game);
    assert_eq!(reversed.order(), &SortOrder::Descending);
    assert_eq!(reversed.moves().first(), before.moves().last());

    game.toggle_order();
    let after = GameView::from_game(&game);
    assert_eq!(after, before);
}

#[test]
fn test_with_order_starts_descending() {
    let game = TimeTravelGame::with_order(SortOrder::Descending);
    assert_eq!(game.order(), SortOrder::Descending);
    assert_eq!(game.steps_in_order(), vec![0]);
}
