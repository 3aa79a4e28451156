pub mod manager;
pub mod view_model;

pub use manager::PurityManager;
