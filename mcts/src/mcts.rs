use std::fmt::Debug;

use anyhow::Result;
use generational_arena::Index;
use log::debug;
use rand::prelude::StdRng;

use common::create_rng_from_seed;
use engine::{GameEngine, GameState, Reward};

use super::node_details::{NodeDetails, Ucb};
use super::options::MCTSOptions;
use super::tree::SearchTree;

pub struct MCTS<'a, E>
where
    E: GameEngine,
{
    options: MCTSOptions,
    game_engine: &'a mut E,
    rng: StdRng,
    pub(crate) tree: SearchTree<E::Action, E::Board>,
}

impl<'a, E> MCTS<'a, E>
where
    E: GameEngine,
    E::Action: Clone + Eq + Debug,
    E::Board: Clone,
{
    pub fn new(
        game_state: GameState<E::Board>,
        game_engine: &'a mut E,
        seed: u64,
        options: MCTSOptions,
    ) -> Self {
        let tree = SearchTree::with_capacity(game_state, game_engine, options.budget + 1);

        MCTS {
            options,
            game_engine,
            rng: create_rng_from_seed(seed),
            tree,
        }
    }

    pub fn search(&mut self) -> Result<(E::Action, Vec<(E::Action, f64)>)> {
        for i in 0..self.options.budget {
            let node_index = self.select();
            let reward = self.rollout(node_index);

            self.tree.backpropagate(node_index, &reward);

            if self.options.progress_every != 0 && (i + 1) % self.options.progress_every == 0 {
                debug!("Processed {} iterations", i + 1);
            }
        }

        // The final decision is pure exploitation over the root's children.
        let (_, action, ucbs) = self.tree.best_child(self.tree.root(), 0.0)?;

        Ok((action, ucbs))
    }

    pub fn advance_to_action(&mut self, action: E::Action) -> Result<()> {
        self.tree.advance_to_action(&action, self.game_engine)
    }

    pub fn get_root_node_details(&self) -> Result<NodeDetails<E::Action>> {
        self.get_node_details(self.tree.root())
    }

    pub fn get_principal_variation(&self) -> Result<Vec<(E::Action, Ucb)>> {
        let mut node_index = self.tree.root();
        let mut nodes = vec![];

        loop {
            let mut children = self.get_node_details(node_index)?.children;

            if children.is_empty() {
                break;
            }

            let (action, ucb) = children.swap_remove(0);
            nodes.push((action.clone(), ucb));

            if let Some(child_index) = self.tree.node(node_index).get_child_of_action(&action) {
                node_index = child_index;
                continue;
            }

            break;
        }

        Ok(nodes)
    }

    pub fn num_nodes(&self) -> usize {
        self.tree.num_nodes()
    }

    fn select(&mut self) -> Index {
        let mut node_index = self.tree.root();

        loop {
            let node = self.tree.node(node_index);

            if node.is_terminal() {
                return node_index;
            }

            // Expansion takes priority over descending further.
            if !node.is_fully_expanded() {
                return self.tree.expand(node_index, self.game_engine);
            }

            let (child_index, _, _) = self
                .tree
                .best_child(node_index, self.options.exploration_constant)
                .expect("A fully expanded node should have children");

            node_index = child_index;
        }
    }

    fn rollout(&mut self, node_index: Index) -> Reward {
        let state = self.tree.node(node_index).state().clone();

        self.game_engine.reset(&state);

        while !self.game_engine.is_game_over() {
            let action = self.game_engine.random_action(&mut self.rng);
            self.game_engine.take_action(&action);
        }

        match self.game_engine.winner() {
            Some(player) => Reward::win(player),
            // A finished game with no winner is scored as half a win for each player.
            None => Reward::draw(),
        }
    }

    fn get_node_details(&self, node_index: Index) -> Result<NodeDetails<E::Action>> {
        let node = self.tree.node(node_index);

        let mut children = self
            .tree
            .node_ucbs(node_index, self.options.exploration_constant);

        children.sort_by(|(_, x_ucb), (_, y_ucb)| y_ucb.cmp(x_ucb));

        Ok(NodeDetails {
            visits: node.visits(),
            children,
        })
    }
}
