//! delete-books: DELETE /api/books/:id.

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
    name: "delete-books",
    default_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3004),
    always_seed: false,
};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();
    let config = ServiceConfig::parse();

    let result = launch(OPTIONS, config, |store| {
        bookstore::register_handlers!(
            Service::new(store),
            handlers::books_delete,
        )
    })
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "delete-books failed");
            ExitCode::FAILURE
        }
    }
}
