mod chat;
mod config;
mod constants;
mod error;
mod utils;

use crate::config::ProbeConfig;
use crate::utils::process_command;
use colored::Colorize;
use std::{error::Error, process};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match ProbeConfig::from_env() {
        Ok(config) => config,
        Err(err) => fail(err),
    };

    let client = reqwest::Client::builder().timeout(config.timeout).build()?;

    match process_command(&client, &config).await {
        Ok(rendered) => println!("{}", rendered),
        Err(err) => fail(err),
    }

    Ok(())
}

fn fail(err: impl Error) -> ! {
    eprintln!("{} {}", "error:".bold().red(), err);
    process::exit(1);
}
