use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uuid::Uuid;

use client::{App, ClientConfig, View, app::ViewOptions};
use common::validation::MovieForm;

#[derive(Parser, Debug)]
#[command(name = "deus", version, about = "Deus Movies rent store client")]
struct Cli {
    /// Origin of the proxy relay
    #[arg(long, env = "DEUS_BASE_URL")]
    base_url: Option<String>,

    /// File holding the session token
    #[arg(long, env = "DEUS_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with username and password
    Login {
        username: String,
        #[arg(long, env = "DEUS_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and forget the stored token
    Logout,

    /// Open a screen by path (/login, /home, /profile, /admin)
    Open {
        path: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        category: Option<String>,
    },

    /// Browse the catalog
    Home {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Only show movies of this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the details of a movie listed on a catalog page
    Movie {
        uuid: Uuid,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Rent a movie
    Rent { movie: Uuid },

    /// Show the profile, wallet and rentals
    Profile {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Add funds to the wallet
    Deposit {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Return a rented movie
    Return { rental: Uuid },

    /// Show the admin dashboard
    Admin {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Upload a new movie (admin only)
    AddMovie {
        #[arg(long)]
        title: String,
        /// Publication year
        #[arg(long)]
        pub_date: String,
        /// Duration in minutes
        #[arg(long)]
        duration: String,
        #[arg(long)]
        rating: String,
        #[arg(long)]
        description: String,
        /// Comma-separated category names
        #[arg(long)]
        categories: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(token_file) = cli.token_file {
        config.token_file = token_file;
    }

    let app = App::new(&config)?;

    match cli.cmd {
        Command::Login { username, password } => {
            let landing = app.login(&username, &password).await?;
            println!("Signed in as {username}");
            print_view(&app, landing.path(), ViewOptions { page: 1, category: None }).await?;
        }
        Command::Logout => {
            let view = app.logout()?;
            println!("Signed out");
            print_view(&app, view.path(), ViewOptions::default()).await?;
        }
        Command::Open {
            path,
            page,
            category,
        } => print_view(&app, &path, ViewOptions { page, category }).await?,
        Command::Home { page, category } => {
            print_view(&app, View::Home.path(), ViewOptions { page, category }).await?
        }
        Command::Movie { uuid, page } => println!("{}", app.movie(uuid, page).await?),
        Command::Rent { movie } => println!("{}", app.rent(movie).await?),
        Command::Profile { page } => {
            print_view(&app, View::Profile.path(), ViewOptions { page, category: None }).await?
        }
        Command::Deposit { amount } => println!("{}", app.deposit(amount).await?),
        Command::Return { rental } => {
            app.return_movie(rental).await?;
            print_view(&app, View::Profile.path(), ViewOptions { page: 1, category: None }).await?;
        }
        Command::Admin { page } => {
            print_view(&app, View::Admin.path(), ViewOptions { page, category: None }).await?
        }
        Command::AddMovie {
            title,
            pub_date,
            duration,
            rating,
            description,
            categories,
        } => {
            let form = MovieForm {
                title,
                pub_date,
                duration,
                rating,
                description,
                categories,
            };
            println!("{}", app.add_movie(&form).await?);
        }
    }

    Ok(())
}

async fn print_view(app: &App, path: &str, options: ViewOptions) -> Result<()> {
    let (_, rendered) = app.open(path, &options).await?;
    println!("{rendered}");
    Ok(())
}
