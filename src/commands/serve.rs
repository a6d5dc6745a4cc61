//! Serve command implementation

use crate::{config::Config, server, Result};

/// Handle the serve command
pub async fn handle_serve(port: Option<u16>, api_base: Option<String>) -> Result<()> {
    let config = Config::resolve(port, api_base)?;
    server::serve(&config).await
}
