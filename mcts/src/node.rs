use std::collections::VecDeque;

use engine::GameState;
use generational_arena::Index;

#[derive(Debug)]
pub struct Node<A, B> {
    pub(crate) state: GameState<B>,
    pub(crate) num_wins: f64,
    pub(crate) num_visits: usize,
    pub(crate) parent: Option<Index>,
    pub(crate) children: Vec<(A, Index)>,
    pub(crate) untried_actions: VecDeque<A>,
    pub(crate) is_terminal: bool,
}

impl<A, B> Node<A, B> {
    pub fn new(
        state: GameState<B>,
        actions: Vec<A>,
        parent: Option<Index>,
        is_terminal: bool,
    ) -> Self {
        Node {
            state,
            num_wins: 0.0,
            num_visits: 0,
            parent,
            children: Vec::new(),
            untried_actions: actions.into(),
            is_terminal,
        }
    }

    pub fn visits(&self) -> usize {
        self.num_visits
    }

    pub fn wins(&self) -> f64 {
        self.num_wins
    }

    pub fn state(&self) -> &GameState<B> {
        &self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried_actions.is_empty()
    }

    pub fn child_len(&self) -> usize {
        self.children.len()
    }

    pub fn iter_children(&self) -> impl Iterator<Item = &(A, Index)> {
        self.children.iter()
    }
}

impl<A, B> Node<A, B>
where
    A: Eq,
{
    pub fn get_child_of_action(&self, action: &A) -> Option<Index> {
        self.children
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, index)| *index)
    }
}
