//! Listener construction for the configured transport.

use std::io::ErrorKind;
use std::os::unix::fs::PermissionsExt;

use tokio::net::{TcpListener, UnixListener};

use crate::{config::ListenProto, error::AppError};

/// Listener bound to one of the supported transports.
pub enum ApiListener {
    Tcp(TcpListener),
    Unix(UnixListener),
}

/// Binds a listener on the given transport and address.
///
/// For a unix domain socket, any stale socket file at the path is removed
/// before binding (a missing file is not an error), and the socket file is
/// made world-accessible afterwards so other local processes may connect. If
/// the permission change fails the listener is closed and the whole bootstrap
/// fails.
///
/// # Arguments
/// - `proto` - Transport to bind (`tcp` or `unix`)
/// - `addr` - Network address (tcp) or filesystem path (unix)
///
/// # Returns
/// - `Ok(ApiListener)` - Bound listener ready to serve
/// - `Err(AppError::IoErr)` - Bind, removal, or permission failure
pub async fn bind(proto: ListenProto, addr: &str) -> Result<ApiListener, AppError> {
    match proto {
        ListenProto::Tcp => Ok(ApiListener::Tcp(TcpListener::bind(addr).await?)),
        ListenProto::Unix => {
            match tokio::fs::remove_file(addr).await {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }

            let listener = UnixListener::bind(addr)?;

            if let Err(err) =
                tokio::fs::set_permissions(addr, std::fs::Permissions::from_mode(0o777)).await
            {
                drop(listener);
                return Err(err.into());
            }

            Ok(ApiListener::Unix(listener))
        }
    }
}
