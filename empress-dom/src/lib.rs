pub mod container;
pub mod markup;
pub mod node;
