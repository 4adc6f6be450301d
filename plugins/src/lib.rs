pub mod factory;
pub mod graph;
pub mod scheduler;
pub mod services;
