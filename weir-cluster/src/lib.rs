pub mod config;
pub mod gossip;
pub mod member;
pub mod node_selector;

pub const REFERENCE: &'static str = include_str!("../reference.toml");
