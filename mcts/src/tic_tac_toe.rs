use std::fmt::{self, Display, Formatter};

use engine::{Cell, GameEngine, GameState, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square(pub usize);

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct TicTacToeEngine {
    to_move: Player,
    board: [Cell; 9],
}

impl TicTacToeEngine {
    pub fn new() -> Self {
        TicTacToeEngine {
            to_move: Player::Black,
            board: [Cell::Empty; 9],
        }
    }

    fn winning_line(&self) -> Option<Player> {
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];

        for [a, b, c] in LINES {
            if let Cell::Occupied(player) = self.board[a] {
                if self.board[b] == self.board[a] && self.board[c] == self.board[a] {
                    return Some(player);
                }
            }
        }

        None
    }

    fn board_full(&self) -> bool {
        self.board.iter().all(|cell| !cell.is_empty())
    }
}

impl GameEngine for TicTacToeEngine {
    type Action = Square;
    type Board = [Cell; 9];

    fn reset(&mut self, state: &GameState<Self::Board>) {
        self.to_move = state.to_move;
        self.board = state.board;
    }

    fn state(&self) -> GameState<Self::Board> {
        GameState::new(self.to_move, self.board)
    }

    fn legal_actions(&self) -> Vec<Self::Action> {
        if self.is_game_over() {
            return Vec::new();
        }

        self.board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(square, _)| Square(square))
            .collect()
    }

    fn take_action(&mut self, action: &Self::Action) {
        self.board[action.0] = Cell::Occupied(self.to_move);
        self.to_move = self.to_move.opponent();
    }

    fn is_game_over(&self) -> bool {
        self.winning_line().is_some() || self.board_full()
    }

    fn winner(&self) -> Option<Player> {
        self.winning_line()
    }
}

pub fn position(cells: [char; 9], to_move: Player) -> GameState<[Cell; 9]> {
    let board = cells.map(|c| match c {
        'x' => Cell::Occupied(Player::Black),
        'o' => Cell::Occupied(Player::White),
        _ => Cell::Empty,
    });

    GameState::new(to_move, board)
}
