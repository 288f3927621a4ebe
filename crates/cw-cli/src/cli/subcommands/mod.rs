pub mod auth;
pub mod watch;

pub use auth::AuthCommands;
pub use watch::WatchCommands;
