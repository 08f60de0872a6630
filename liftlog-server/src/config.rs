use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(version, about = "liftlog - gym tracking backend", long_about = None)]
struct Args {
    /// SQLite database path. Falls back to the DATABASE_URL environment
    /// variable (a .env file is honored).
    #[arg(long)]
    database_url: Option<String>,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:9000")]
    listen: SocketAddr,
}

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub listen: SocketAddr,
}

impl Config {
    pub fn load() -> Result<Self> {
        let args = Args::parse();
        let database_url = match args.database_url {
            Some(url) => url,
            None => env::var("DATABASE_URL")
                .context("DATABASE_URL must be specified or present in the environment")?,
        };
        Ok(Self {
            database_url,
            listen: args.listen,
        })
    }
}
