//! get-books: GET /api/books, /api/authors and /api/years.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::process::ExitCode;

use bookstore::config::ServiceConfig;
use bookstore::handlers;
use bookstore::microsvc::Service;
use bookstore::runtime::{launch, LaunchOptions};
use bookstore::telemetry;
use clap::Parser;
use tracing::error;

const OPTIONS: LaunchOptions = LaunchOptions {
    name: "get-books",
    default_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3001),
    always_seed: false,
};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();
    let config = ServiceConfig::parse();

    let result = launch(OPTIONS, config, |store| {
        bookstore::register_handlers!(
            Service::new(store),
            handlers::books_list,
            handlers::authors_list,
            handlers::years_list,
        )
    })
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "get-books failed");
            ExitCode::FAILURE
        }
    }
}
