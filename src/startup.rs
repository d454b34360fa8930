use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{
    config::{Settings, TlsSettings},
    error::{config::ConfigError, AppError},
    listener::ApiListener,
};

/// Connects to the MySQL database and runs pending migrations.
///
/// Establishes a connection pool using the connection URL built from the
/// resolved settings, then automatically runs all pending SeaORM migrations
/// to ensure the database schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `settings` - Resolved startup settings containing the database configuration
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(settings: &Settings) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(settings.database.url());
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Serves the application until the underlying transport fails.
///
/// With no TLS material configured the listener serves plaintext HTTP;
/// otherwise the certificate and key are loaded and the listener serves TLS.
/// Either way this call blocks for the lifetime of the process; returning an
/// error means the serve loop itself failed, which the caller treats as
/// fatal. TLS over a unix domain socket is rejected up front.
///
/// # Arguments
/// - `listener` - Bound listener from `listener::bind`
/// - `router` - Fully layered application router
/// - `tls` - Optional TLS certificate and key paths
///
/// # Returns
/// - `Ok(())` - Never reached in normal operation
/// - `Err(AppError)` - Serve-loop failure or unusable TLS configuration
pub async fn serve(
    listener: ApiListener,
    router: Router,
    tls: Option<&TlsSettings>,
) -> Result<(), AppError> {
    match (listener, tls) {
        (ApiListener::Tcp(listener), None) => axum::serve(listener, router).await?,
        (ApiListener::Tcp(listener), Some(tls)) => {
            let config = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
            axum_server::from_tcp_rustls(listener.into_std()?, config)
                .serve(router.into_make_service())
                .await?
        }
        (ApiListener::Unix(listener), None) => axum::serve(listener, router).await?,
        (ApiListener::Unix(_), Some(_)) => return Err(ConfigError::TlsOverUnixSocket.into()),
    }

    Ok(())
}
