use crate::players::Player;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState<B> {
    pub to_move: Player,
    pub board: B,
}

impl<B> GameState<B> {
    pub fn new(to_move: Player, board: B) -> Self {
        GameState { to_move, board }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}
