use clap::Parser;
use warenbuchung_cli::{cmd::GlobalArgs, logger};

#[tokio::main]
async fn main() {
    logger::init();
    let app = GlobalArgs::parse();
    app.exec_subcmd().await.unwrap_or_else(|e| {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    });
}
