pub mod config;
pub mod endpoint;
pub mod error;
pub mod ext;
pub mod node_preference;
