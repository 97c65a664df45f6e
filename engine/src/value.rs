use crate::players::Player;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reward(pub [f64; 2]);

impl Reward {
    pub fn win(player: Player) -> Self {
        let mut values = [0.0, 0.0];
        values[player.index()] = 1.0;
        Reward(values)
    }

    pub fn draw() -> Self {
        Reward([0.5, 0.5])
    }

    pub fn value_for_player(&self, player: Player) -> f64 {
        self.0[player.index()]
    }
}
