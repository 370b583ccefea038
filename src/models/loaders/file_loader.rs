use crate::error::{AppResult, FileError};
use crate::models::upload::UploadFile;
use std::path::Path;
use tokio::fs;

/// 从磁盘读取待上传文件
///
/// 文件名取路径的最后一段，服务端以此作为简历/JD 的标识
pub async fn load_upload_file(path: &Path) -> AppResult<UploadFile> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| FileError::NotAFile {
            path: path.display().to_string(),
        })?;

    let bytes = fs::read(path).await.map_err(|source| FileError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!("已读取文件 {} ({} 字节)", file_name, bytes.len());

    Ok(UploadFile::new(file_name, bytes))
}
