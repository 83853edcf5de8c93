// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use client::{GraphQlClient, UserView};
use token_store::TokenStore;

mod cli;
mod client;
mod logging;
mod token_store;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();
    let store = TokenStore::new(args.token_file.unwrap_or_else(TokenStore::default_path));

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Logout => {
            if store.clear()? {
                log::info!("removed token at {}", store.path().display());
            } else {
                log::info!("not logged in");
            }
        }
        Commands::Users => {
            let client = GraphQlClient::new(&args.url, None);
            for user in client.get_users()? {
                println!("{}", user.name);
                println!("  Age: {}", user.age);
                println!("  Married: {}", yes_no(user.is_married));
            }
        }
        Commands::User { id } => {
            let client = GraphQlClient::new(&args.url, store.load()?);
            print_selected(client.get_user_by_id(id)?.as_ref());
        }
        Commands::Create { name, age, married } => {
            let client = GraphQlClient::new(&args.url, None);
            let user = client.create_user(name, *age, *married)?;
            log::info!("created user {} ({})", user.name, user.id);
        }
        Commands::Login { email } => {
            let client = GraphQlClient::new(&args.url, None);
            let payload = client.login(email)?;
            store.save(&payload.token)?;
            log::info!(
                "logged in as {} ({}), token stored at {}",
                payload.user.name,
                payload.user.id,
                store.path().display()
            );
        }
    }

    Ok(())
}

fn print_selected(user: Option<&UserView>) {
    let none = || "None".to_string();
    println!("Name: {}", user.map_or_else(none, |u| u.name.clone()));
    println!("Age: {}", user.map_or_else(none, |u| u.age.to_string()));
    println!(
        "Married: {}",
        user.map_or_else(none, |u| yes_no(u.is_married).to_string())
    );
    println!(
        "Email: {}",
        user.and_then(|u| u.email.clone()).unwrap_or_else(none)
    );
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
