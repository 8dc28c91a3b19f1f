use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = zephyr_connector::cli::Cli::parse();
    if let Err(e) = zephyr_connector::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
