use clap::Parser;

use treefs_server::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    if let Err(e) = treefs_server::logging::init(&config.log_filter) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = treefs_server::serve(config).await {
        tracing::error!(error = %e, "server stopped");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
