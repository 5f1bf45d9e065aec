use std::process;

use colored::Colorize;

#[tokio::main]
async fn main() {
    spendview::init();

    if let Err(err) = spendview::cli::run().await {
        eprintln!("{} {err:#}", "Error:".red());
        process::exit(1);
    }
}
