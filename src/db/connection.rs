use std::time::Duration;

use mongodb::{Client, bson::doc, options::ClientOptions};
use tracing::{error, info};
use url::Url;

use crate::config::DbSettings;
use crate::db::registry::DbRegistry;
use crate::error::CleanlyfeError;

const LOCAL_URI: &str = "mongodb://localhost:27017/";
const CLOUD_URI: &str =
    "mongodb+srv://cleanlyfe.1ucxqaz.mongodb.net/?retryWrites=true&w=majority&appName=cleanlyfe";

const CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_millis(5000);
const MAX_POOL_SIZE: u32 = 5;

/// Load settings from the environment, connect, and populate the registry.
///
/// The registry is only written after the liveness check passes, so a failed
/// bootstrap leaves it empty.
pub async fn init_db(registry: &DbRegistry) -> Result<Client, CleanlyfeError> {
    let settings = DbSettings::from_env()
        .inspect_err(|e| error!(error = %e, "error loading environment variables"))?;
    init_db_with(registry, &settings).await
}

pub async fn init_db_with(
    registry: &DbRegistry,
    settings: &DbSettings,
) -> Result<Client, CleanlyfeError> {
    let uri = build_connection_uri(
        &settings.connection,
        settings.user.as_deref(),
        settings.password.as_deref(),
    )?;

    let client = connect(&uri).await?;
    registry.store(client.clone());

    info!(mode = %settings.connection.to_ascii_lowercase(), "successfully connected to MongoDB");
    Ok(client)
}

/// Build the connection URI for the given connection type.
///
/// Pure: no environment reads, no network access. Cloud credentials are
/// percent-encoded into the userinfo component.
pub fn build_connection_uri(
    connection: &str,
    user: Option<&str>,
    password: Option<&str>,
) -> Result<String, CleanlyfeError> {
    match connection.to_ascii_lowercase().as_str() {
        "local" => Ok(LOCAL_URI.to_string()),
        "cloud" => match (user, password) {
            (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => {
                cloud_uri(user, password)
            }
            _ => Err(CleanlyfeError::Configuration(
                "user and password required for cloud connection".to_string(),
            )),
        },
        other => Err(CleanlyfeError::Configuration(format!(
            "invalid database connection type: {other}. Use 'local' or 'cloud'"
        ))),
    }
}

fn cloud_uri(user: &str, password: &str) -> Result<String, CleanlyfeError> {
    let mut uri = Url::parse(CLOUD_URI)
        .map_err(|e| CleanlyfeError::Configuration(format!("invalid cloud URI template: {e}")))?;
    uri.set_username(user)
        .and_then(|()| uri.set_password(Some(password)))
        .map_err(|()| {
            CleanlyfeError::Configuration("cloud URI template rejected credentials".to_string())
        })?;
    Ok(uri.into())
}

/// Construct a client for `uri` with the fixed bootstrap timeouts and verify
/// it can reach the server. Pooling stays with the driver.
pub async fn connect(uri: &str) -> Result<Client, CleanlyfeError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .inspect_err(|e| error!(error = %e, "failed to parse MongoDB connection options"))?;
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
    options.max_pool_size = Some(MAX_POOL_SIZE);
    options.retry_writes = Some(true);

    let client = Client::with_options(options)
        .inspect_err(|e| error!(error = %e, "failed to construct MongoDB client"))?;

    test_connection(&client).await?;
    Ok(client)
}

/// Ping the server through `client` under its configured timeouts.
pub async fn test_connection(client: &Client) -> Result<(), CleanlyfeError> {
    match client.database("admin").run_command(doc! { "ping": 1 }).await {
        Ok(_) => {
            info!("MongoDB connection test successful");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "MongoDB connection test failed");
            Err(e.into())
        }
    }
}
