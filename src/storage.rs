use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// Loads the persisted state. A missing or unreadable file and malformed
/// JSON all fall back to the empty default; the failure is only logged,
/// never surfaced.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;

    #[tokio::test]
    async fn missing_file_loads_empty_state() {
        let data = load_data(Path::new("does/not/exist/state.json")).await;
        assert!(data.todos.is_empty());
        assert!(data.achievements.is_empty());
        assert_eq!(data.theme, Theme::Light);
    }

    #[test]
    fn legacy_document_with_only_todos_key_parses() {
        // Older backups carry just the goal list; the other keys default.
        let raw = br#"{"todos": [{"id": "1", "text": "Ride the Trans-Siberian", "completed": false, "createdAt": "2026-01-05T10:00:00Z", "category": "travel"}]}"#;
        let data: AppData = serde_json::from_slice(raw).unwrap();
        assert_eq!(data.todos.len(), 1);
        assert_eq!(data.todos[0].text, "Ride the Trans-Siberian");
        assert_eq!(data.theme, Theme::Light);
    }
}
