// Time-bounded minimax / alpha-beta agent for Isolation-style games
pub mod agent;
pub mod board;
pub mod config;
pub mod opening;
pub mod perft;
pub mod search;
pub mod selfplay;

// Re-exports kept minimal
pub use agent::Agent;
pub use board::GameState;
pub use config::AgentConfig;
