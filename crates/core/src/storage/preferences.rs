//! Stored user preferences
//!
//! Preferences live beside the task collection in the same gateway. Only the
//! dark-mode flag is stored today, as a stringified boolean.

use super::gateway::{StorageGateway, DARK_MODE_KEY};
use crate::Result;

/// Read the dark-mode preference; absent means off
pub async fn dark_mode(gateway: &dyn StorageGateway) -> Result<bool> {
    let value = gateway.get(DARK_MODE_KEY).await?;
    Ok(value.as_deref() == Some("true"))
}

/// Store the dark-mode preference
pub async fn set_dark_mode(gateway: &dyn StorageGateway, enabled: bool) -> Result<()> {
    gateway
        .set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
        .await
}
