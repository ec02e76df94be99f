pub mod agent;
pub mod upstream;
