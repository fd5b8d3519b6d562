//! Service startup: connect to the store, prepare the collection,
//! optionally seed, then serve until shutdown.
//!
//! Every binary goes through [`launch`]; what differs between them is
//! the name, the default address and which handlers get registered.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

use crate::book::{seed, BookRecord};
use crate::config::ServiceConfig;
use crate::microsvc::{self, Service};
use crate::store::{connect, AnyStore, DocumentStore, StoreError};

/// Why a service could not start or stopped abnormally.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("could not open store {uri}: {source}")]
    Connect { uri: String, source: StoreError },
    #[error("store {uri} did not answer within {secs}s")]
    ConnectTimeout { uri: String, secs: u64 },
    #[error("could not prepare the books collection: {0}")]
    Prepare(StoreError),
    #[error("seeding failed: {0}")]
    Seed(StoreError),
    #[error("startup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("http server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Per-binary startup settings.
#[derive(Debug, Clone, Copy)]
pub struct LaunchOptions {
    pub name: &'static str,
    pub default_addr: SocketAddr,
    /// Seed regardless of configuration.
    pub always_seed: bool,
}

/// Connect, prepare, seed when asked, build the service and serve it.
pub async fn launch<F>(
    options: LaunchOptions,
    config: ServiceConfig,
    build: F,
) -> Result<(), LaunchError>
where
    F: FnOnce(AnyStore) -> Service<AnyStore>,
{
    let store = open_store(&config).await?;
    info!(service = options.name, backend = store.backend(), "store ready");

    if options.always_seed || config.seed {
        let seeding = store.clone();
        let report = tokio::task::spawn_blocking(move || seed::seed(&seeding))
            .await?
            .map_err(LaunchError::Seed)?;
        if report.inserted == 0 {
            warn!("no example books inserted, all ids were already present");
        }
    }

    let service = Arc::new(build(store).named(options.name));
    microsvc::serve(service, config.addr_or(options.default_addr)).await?;
    info!(service = options.name, "stopped");
    Ok(())
}

async fn open_store(config: &ServiceConfig) -> Result<AnyStore, LaunchError> {
    let uri = config.database_uri.clone();
    let opening = {
        let uri = uri.clone();
        tokio::task::spawn_blocking(move || {
            let store =
                connect(&uri).map_err(|source| LaunchError::Connect { uri, source })?;
            store
                .ensure_collection::<BookRecord>()
                .map_err(LaunchError::Prepare)?;
            Ok::<_, LaunchError>(store)
        })
    };

    match tokio::time::timeout(config.connect_timeout(), opening).await {
        Ok(joined) => joined?,
        Err(_) => Err(LaunchError::ConnectTimeout {
            uri,
            secs: config.connect_timeout_secs,
        }),
    }
}
