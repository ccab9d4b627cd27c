pub mod error;
pub mod groups;
pub mod natural_sort;
pub mod types;
