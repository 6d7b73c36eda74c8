use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::resume::extract::extract_text;
use crate::resume::prompts::{resume_parser_prompt, RESUME_PARSER_SYSTEM};
use crate::resume::{ParsedResume, ResumeFile, ResumeParser};

/// Extracts the upload's text, archives the original to S3 and asks the
/// model for the structured fields. Unreadable uploads are never archived.
pub struct LlmResumeParser {
    llm: LlmClient,
    s3: S3Client,
    bucket: String,
}

impl LlmResumeParser {
    pub fn new(llm: LlmClient, s3: S3Client, bucket: String) -> Self {
        Self { llm, s3, bucket }
    }

    async fn archive(&self, user_id: Uuid, file: &ResumeFile) -> Result<String, AppError> {
        let ext = file.extension().unwrap_or_else(|| "bin".to_string());
        let key = archive_key(user_id, Uuid::new_v4(), &ext);
        self.s3
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(file.bytes.clone()))
            .content_type(
                file.content_type
                    .as_deref()
                    .unwrap_or("application/octet-stream"),
            )
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("résumé upload failed: {e}")))?;
        info!("Archived résumé to s3://{}/{}", self.bucket, key);
        Ok(key)
    }
}

pub fn archive_key(user_id: Uuid, upload_id: Uuid, ext: &str) -> String {
    format!("resumes/{user_id}/{upload_id}.{ext}")
}

#[async_trait]
impl ResumeParser for LlmResumeParser {
    async fn parse(&self, user_id: Uuid, file: &ResumeFile) -> Result<ParsedResume, AppError> {
        let text = extract_text(file).await?;
        self.archive(user_id, file).await?;

        let prompt = resume_parser_prompt(&file.file_name, &text);
        match self.llm.complete_json(RESUME_PARSER_SYSTEM, &prompt).await {
            Ok(parsed) => Ok(parsed),
            Err(LlmError::Parse(e)) => {
                warn!("Model returned unusable JSON for {}: {e}", file.file_name);
                Err(AppError::ResumeParse(
                    "the résumé could not be turned into portfolio fields".to_string(),
                ))
            }
            Err(e) => Err(AppError::Internal(anyhow::anyhow!("résumé parsing failed: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
    use bytes::Bytes;

    /// S3 pointed at a closed port: any archive attempt fails as `Storage`.
    fn offline_parser() -> LlmResumeParser {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .endpoint_url("http://127.0.0.1:9")
            .credentials_provider(Credentials::new("test", "test", None, None, "test"))
            .force_path_style(true)
            .build();
        LlmResumeParser::new(
            LlmClient::new("test-key".to_string()).unwrap(),
            S3Client::from_conf(config),
            "resumes".to_string(),
        )
    }

    #[tokio::test]
    async fn test_unsupported_upload_is_rejected_before_archiving() {
        let file = ResumeFile {
            file_name: "cv.exe".to_string(),
            content_type: Some("application/octet-stream".to_string()),
            bytes: Bytes::from_static(b"MZ\x90\x00"),
        };
        let result = offline_parser().parse(Uuid::new_v4(), &file).await;
        assert!(matches!(result, Err(AppError::ResumeParse(_))));
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected_before_archiving() {
        let file = ResumeFile {
            file_name: "cv.txt".to_string(),
            content_type: None,
            bytes: Bytes::from_static(b"  \n "),
        };
        let result = offline_parser().parse(Uuid::new_v4(), &file).await;
        assert!(matches!(result, Err(AppError::ResumeParse(_))));
    }

    #[test]
    fn test_archive_key_layout() {
        let user = Uuid::nil();
        let upload = Uuid::nil();
        assert_eq!(
            archive_key(user, upload, "pdf"),
            format!("resumes/{user}/{upload}.pdf")
        );
    }
}
