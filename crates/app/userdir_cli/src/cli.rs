use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "userdir", about = "Userdir GraphQL client", version)]
pub struct Cli {
    /// GraphQL endpoint.
    #[arg(long, global = true, env = "USERDIR_URL", default_value = "http://localhost:4000")]
    pub url: String,

    /// Where the access token from `login` is kept.
    #[arg(long, global = true, env = "USERDIR_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all users
    Users,
    /// Show one user (requires login)
    User { id: String },
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i32,
        #[arg(long)]
        married: bool,
    },
    /// Log in by email and store the access token
    Login { email: String },
    /// Forget the stored access token
    Logout,
    /// Print version
    Version,
}
