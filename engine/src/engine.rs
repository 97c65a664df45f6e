use rand::{Rng, RngCore};

use super::game_state::GameState;
use super::players::Player;

pub trait GameEngine {
    type Action;
    type Board;

    fn reset(&mut self, state: &GameState<Self::Board>);
    fn state(&self) -> GameState<Self::Board>;
    fn legal_actions(&self) -> Vec<Self::Action>;
    fn take_action(&mut self, action: &Self::Action);
    fn is_game_over(&self) -> bool;
    fn winner(&self) -> Option<Player>;

    fn random_action(&mut self, rng: &mut dyn RngCore) -> Self::Action {
        let mut actions = self.legal_actions();
        let chosen = rng.gen_range(0..actions.len());

        actions.swap_remove(chosen)
    }
}
