use anyhow::{Context, Result};
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

/// Uploads the finished CSV to object storage, keyed by its filename.
///
/// Called only after the file has been written and closed; credentials
/// come from the default provider chain.
pub async fn upload_file(bucket: &str, path: &str) -> Result<()> {
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_s3::Client::new(&aws_config);

    let body = ByteStream::from_path(path)
        .await
        .with_context(|| format!("Failed to read {path} for upload"))?;

    client
        .put_object()
        .bucket(bucket)
        .key(path)
        .body(body)
        .send()
        .await
        .with_context(|| format!("Failed to upload {path} to bucket {bucket}"))?;

    info!(bucket, key = path, "uploaded listings file");
    Ok(())
}
