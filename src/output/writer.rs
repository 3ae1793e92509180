use crate::output::models::DashboardData;
use crate::Result;
use std::path::Path;
use tracing::info;

/// Write the dashboard as pretty-printed JSON, creating parent directories
pub async fn write_dashboard(path: &Path, data: &DashboardData) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(data)?;
    tokio::fs::write(path, json).await?;

    info!("Data written to {}", path.display());
    Ok(())
}
