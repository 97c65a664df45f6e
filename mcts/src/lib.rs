pub mod mcts;
mod node;
pub mod node_details;
pub mod options;
#[cfg(test)]
mod tic_tac_toe;
pub mod tree;

pub use mcts::*;
pub use node::*;
pub use node_details::*;
pub use options::*;
pub use tree::*;
