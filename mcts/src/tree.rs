use anyhow::{anyhow, Result};
use generational_arena::{Arena, Index};
use itertools::Itertools;

use engine::{GameEngine, GameState, Reward};

use super::node::Node;
use super::node_details::Ucb;

pub struct SearchTree<A, B> {
    arena: Arena<Node<A, B>>,
    root: Index,
}

impl<A, B> SearchTree<A, B>
where
    A: Clone + Eq,
    B: Clone,
{
    pub fn new<E>(game_state: GameState<B>, game_engine: &mut E) -> Self
    where
        E: GameEngine<Action = A, Board = B>,
    {
        Self::with_capacity(game_state, game_engine, 0)
    }

    pub fn with_capacity<E>(game_state: GameState<B>, game_engine: &mut E, capacity: usize) -> Self
    where
        E: GameEngine<Action = A, Board = B>,
    {
        game_engine.reset(&game_state);

        let root = Node::new(
            game_engine.state(),
            game_engine.legal_actions(),
            None,
            game_engine.is_game_over(),
        );

        let mut arena = Arena::with_capacity(capacity);
        let root = arena.insert(root);

        SearchTree { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn node(&self, node_index: Index) -> &Node<A, B> {
        &self.arena[node_index]
    }

    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    #[cfg(test)]
    pub(crate) fn node_mut(&mut self, node_index: Index) -> &mut Node<A, B> {
        &mut self.arena[node_index]
    }

    pub fn expand<E>(&mut self, node_index: Index, game_engine: &mut E) -> Index
    where
        E: GameEngine<Action = A, Board = B>,
    {
        let node = &mut self.arena[node_index];

        assert!(!node.is_terminal, "Tried to expand a terminal node");

        // Untried actions are consumed oldest first so expansion order is deterministic.
        let action = node
            .untried_actions
            .pop_front()
            .expect("Tried to expand a node with no untried actions");
        let state = node.state.clone();

        game_engine.reset(&state);
        game_engine.take_action(&action);

        let child = Node::new(
            game_engine.state(),
            game_engine.legal_actions(),
            Some(node_index),
            game_engine.is_game_over(),
        );
        let child_index = self.arena.insert(child);

        self.arena[node_index].children.push((action, child_index));

        child_index
    }

    pub fn best_child(
        &self,
        node_index: Index,
        exploration_constant: f64,
    ) -> Result<(Index, A, Vec<(A, f64)>)> {
        let node = &self.arena[node_index];

        if node.children.is_empty() {
            return Err(anyhow!(
                "Node has no children. This node should have been designated as a terminal node."
            ));
        }

        let parent_visits = node.num_visits as f64;

        let mut ucbs = Vec::with_capacity(node.children.len());
        let mut best_child_index = 0;
        let mut best_ucb = f64::MIN;

        for (i, (action, child_index)) in node.children.iter().enumerate() {
            let child = &self.arena[*child_index];
            let exploitation = child.num_wins / child.num_visits as f64;
            let exploration = (2.0 * parent_visits.ln() / child.num_visits as f64).sqrt();
            let ucb = exploitation + exploration_constant * exploration;

            // Ties keep the earliest child, so later children must be strictly greater.
            if ucb > best_ucb {
                best_ucb = ucb;
                best_child_index = i;
            }

            ucbs.push((action.clone(), ucb));
        }

        let (action, child_index) = &node.children[best_child_index];

        Ok((*child_index, action.clone(), ucbs))
    }

    pub fn backpropagate(&mut self, node_index: Index, reward: &Reward) {
        let mut current = node_index;

        loop {
            match self.arena[current].parent {
                None => {
                    self.arena[current].num_visits += 1;
                    return;
                }
                Some(parent_index) => {
                    // Win credit is scored for the player to move at the parent, since the
                    // parent is the one choosing between its children.
                    let player_at_parent = self.arena[parent_index].state.to_move;
                    let node = &mut self.arena[current];

                    node.num_wins += reward.value_for_player(player_at_parent);
                    node.num_visits += 1;

                    current = parent_index;
                }
            }
        }
    }

    pub fn advance_to_action<E>(&mut self, action: &A, game_engine: &mut E) -> Result<()>
    where
        E: GameEngine<Action = A, Board = B>,
    {
        let root_index = self.root;

        let chosen = match self.arena[root_index].get_child_of_action(action) {
            Some(child_index) => child_index,
            None => {
                let position = self.arena[root_index]
                    .untried_actions
                    .iter()
                    .position(|a| a == action)
                    .ok_or(anyhow!("No matching Action"))?;

                self.arena[root_index].untried_actions.remove(position);

                let state = self.arena[root_index].state.clone();

                game_engine.reset(&state);
                game_engine.take_action(action);

                let child = Node::new(
                    game_engine.state(),
                    game_engine.legal_actions(),
                    Some(root_index),
                    game_engine.is_game_over(),
                );
                let child_index = self.arena.insert(child);

                self.arena[root_index]
                    .children
                    .push((action.clone(), child_index));

                child_index
            }
        };

        let other_children = self.arena[root_index]
            .children
            .iter()
            .filter(|(a, _)| a != action)
            .map(|(_, child_index)| *child_index)
            .collect_vec();

        for child_index in other_children {
            self.remove_subtree(child_index);
        }

        self.arena
            .remove(root_index)
            .expect("Node should exist in arena");

        // The new root keeps its statistics but loses its back-reference.
        self.arena[chosen].parent = None;
        self.root = chosen;

        Ok(())
    }

    fn remove_subtree(&mut self, node_index: Index) {
        let node = self
            .arena
            .remove(node_index)
            .expect("Node should exist in arena");

        for (_, child_index) in node.children {
            self.remove_subtree(child_index);
        }
    }

    #[allow(non_snake_case)]
    pub(crate) fn node_ucbs(&self, node_index: Index, exploration_constant: f64) -> Vec<(A, Ucb)> {
        let node = &self.arena[node_index];
        let parent_visits = node.num_visits as f64;

        node.children
            .iter()
            .map(|(action, child_index)| {
                let child = &self.arena[*child_index];
                let Nsa = child.num_visits;
                let Qsa = child.num_wins / child.num_visits as f64;
                let Usa = (2.0 * parent_visits.ln() / child.num_visits as f64).sqrt();
                let UCB = Qsa + exploration_constant * Usa;

                (action.clone(), Ucb { Nsa, Qsa, Usa, UCB })
            })
            .collect_vec()
    }
}
