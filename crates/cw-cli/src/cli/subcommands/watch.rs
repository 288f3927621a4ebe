use clap::Subcommand;

/// Watchlist commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WatchCommands {
    /// Bookmark an object from the current feed.
    Add { id: String },
    /// Remove a bookmark.
    Remove { id: String },
    /// List bookmarks, oldest first.
    List,
}
