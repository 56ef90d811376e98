pub mod body;
pub mod node;
