use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "myblog", version, about = "A small server-rendered blog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server. This is the default.
    Serve,
    /// Create an author account.
    CreateUser {
        username: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Publish a new entry.
    CreateEntry {
        /// Username of the author.
        #[arg(long)]
        author: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
    },
    /// Replace the title and body of an existing entry.
    EditEntry {
        id: i32,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
}

impl Cli {
    /// The requested subcommand, defaulting to `serve`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
