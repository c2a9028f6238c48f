//! Presentation model shared by every front end.
//!
//! A [`GameView`] is a snapshot of everything a renderer needs: the status
//! line, the nine cells with the winning line marked, and the move list in
//! display order. Renderers never look at the game directly.

use crate::games::tictactoe::{Outcome, Position, SortOrder, Square, TimeTravelGame};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::instrument;

/// One board cell as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
pub struct CellView {
    /// Cell position.
    position: Position,
    /// Cell contents.
    square: Square,
    /// Whether the cell is part of the winning line.
    highlighted: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveItem {
    /// History index this entry jumps to.
    step: usize,
    /// Button text, e.g. `Go to move #2(1,3)`.
    description: String,
    /// Whether this is the step currently shown.
    is_current: bool,
}

/// Everything a front end renders for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Status line: next player, winner or draw.
    status: String,
    /// Evaluation of the current board.
    outcome: Outcome,
    /// Cells in row-major order.
    cells: Vec<CellView>,
    /// Move list in display order.
    moves: Vec<MoveItem>,
    /// Display order of the move list.
    order: SortOrder,
    /// Current step.
    step: usize,
}

impl GameView {
    /// Builds the view of the game's current step.
    #[instrument(skip(game), fields(step = game.step(), order = %game.order()))]
    pub fn from_game(game: &TimeTravelGame) -> Self {
        let outcome = game.outcome();
        let line = outcome.winning_line();

        let cells = Position::ALL
            .into_iter()
            .map(|pos| {
                let highlighted = line.is_some_and(|l| l.contains(&pos));
                CellView::new(pos, game.board().get(pos), highlighted)
            })
            .collect();

        let moves = game
            .steps_in_order()
            .into_iter()
            .map(|step| {
                MoveItem::new(
                    step,
                    game.history()[step].description(step),
                    step == game.step(),
                )
            })
            .collect();

        Self {
            status: status_line(game),
            outcome,
            cells,
            moves,
            order: game.order(),
            step: game.step(),
        }
    }

    /// Positions of the highlighted cells.
    pub fn highlighted(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.position)
            .collect()
    }
}

/// Formats the status line for the game's current step.
pub fn status_line(game: &TimeTravelGame) -> String {
    match game.outcome() {
        Outcome::NoResult => format!("Next player: {}", game.next_player()),
        Outcome::Win { player, .. } => format!("Winner: {player}"),
        Outcome::Draw => "Draw".to_string(),
    }
}

impl std::fmt::Display for GameView {
    /// Plain-text rendering: status, board (winning cells in brackets),
    /// then the move list with `>` on the current step.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status)?;
        writeln!(f)?;
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line: Vec<String> = cells
                .iter()
                .map(|cell| {
                    let symbol = match cell.square {
                        Square::Empty => (cell.position.to_index() + 1).to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    if cell.highlighted {
                        format!("[{symbol}]")
                    } else {
                        format!(" {symbol} ")
                    }
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        writeln!(f)?;
        writeln!(f, "Moves ({}):", self.order)?;
        for item in &self.moves {
            let marker = if item.is_current { '>' } else { ' ' };
            writeln!(f, "{marker} {}", item.description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(moves: &[Position]) -> TimeTravelGame {
        let mut game = TimeTravelGame::new();
        for pos in moves {
            assert!(game.apply_move(*pos).is_applied());
        }
        game
    }

    #[test]
    fn test_initial_view() {
        let view = GameView::from_game(&TimeTravelGame::new());
        assert_eq!(view.status(), "Next player: X");
        assert_eq!(view.moves().len(), 1);
        assert_eq!(view.moves()[0].description(), "Go to move start");
        assert!(*view.moves()[0].is_current());
        assert!(view.highlighted().is_empty());
    }

    #[test]
    fn test_move_descriptions() {
        let game = game_with(&[Position::Center, Position::BottomLeft]);
        let view = GameView::from_game(&game);
        let descriptions: Vec<&str> = view.moves().iter().map(|m| m.description().as_str()).collect();
        assert_eq!(
            descriptions,
            ["Go to move start", "Go to move #1(2,2)", "Go to move #2(1,3)"]
        );
        assert_eq!(view.status(), "Next player: X");
    }

    #[test]
    fn test_win_highlights_line() {
        let game = game_with(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]);
        let view = GameView::from_game(&game);
        assert_eq!(view.status(), "Winner: X");
        assert_eq!(
            view.highlighted(),
            vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_draw_status() {
        // X O X / X O O / O X X
        let game = game_with(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        let view = GameView::from_game(&game);
        assert_eq!(view.status(), "Draw");
        assert!(view.highlighted().is_empty());
    }

    #[test]
    fn test_descending_marks_current_step() {
        let mut game = game_with(&[Position::Center, Position::TopLeft]);
        game.toggle_order();
        game.jump_to(1).unwrap();

        let view = GameView::from_game(&game);
        let steps: Vec<usize> = view.moves().iter().map(|m| *m.step()).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        let current: Vec<usize> = view
            .moves()
            .iter()
            .filter(|m| *m.is_current())
            .map(|m| *m.step())
            .collect();
        assert_eq!(current, vec![1]);
        assert_eq!(view.status(), "Next player: O");
    }

    #[test]
    fn test_text_rendering() {
        let game = game_with(&[Position::Center]);
        let text = GameView::from_game(&game).to_string();
        assert!(text.starts_with("Next player: O\n"));
        assert!(text.contains(" 4 | X | 6 "));
        assert!(text.contains("Moves (ASC):"));
        assert!(text.contains("> Go to move #1(2,2)"));
    }
}
