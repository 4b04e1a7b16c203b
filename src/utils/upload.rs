use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use http::StatusCode;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::config::APP_CONFIG;

pub struct SavedUpload {
    pub path: PathBuf,
    pub original_name: String,
    pub stored_name: String,
}

/// Reads the `file` field of a multipart form and writes it under the
/// configured temp upload directory. The caller owns the temp file and must
/// remove it when done, whatever the outcome (see `remove_upload`).
pub async fn save_import_file(
    mut multipart: Multipart,
) -> Result<SavedUpload, (StatusCode, String)> {
    let mut uploaded: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Failed to read multipart field: {}", e),
        )
    })? {
        if field.name().unwrap_or_default() != "file" {
            continue;
        }

        let original_name = field.file_name().unwrap_or("import.xlsx").to_string();
        let data = field.bytes().await.map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            )
        })?;
        uploaded = Some((original_name, data.to_vec()));
        break;
    }

    let (original_name, data) =
        uploaded.ok_or_else(|| (StatusCode::BAD_REQUEST, "No file provided".to_string()))?;

    if data.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Uploaded file is empty".to_string()));
    }

    let stored_name = format!(
        "{}_{}",
        Uuid::new_v4(),
        sanitize_filename::sanitize(&original_name)
    );
    let temp_dir = Path::new(&APP_CONFIG.upload_dir).join("temp");

    fs::create_dir_all(&temp_dir).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to create temp directory: {}", e),
        )
    })?;

    let path = temp_dir.join(&stored_name);
    let mut file = fs::File::create(&path).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to create temp file: {}", e),
        )
    })?;

    file.write_all(&data).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to write temp file: {}", e),
        )
    })?;

    file.flush().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to flush temp file: {}", e),
        )
    })?;

    Ok(SavedUpload {
        path,
        original_name,
        stored_name,
    })
}

/// Best-effort removal of a temp upload. Must run on every import exit path,
/// including parse failures.
pub async fn remove_upload(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        tracing::warn!(
            "Failed to remove temp upload {}: {}",
            path.display(),
            e
        );
    }
}
