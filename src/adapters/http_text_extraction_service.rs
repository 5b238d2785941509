use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::core::interfaces::adapters::TextExtractionService;
use crate::core::models::ImageLocation;
use crate::global_constants;

#[derive(Debug, Deserialize)]
struct ExtractionResponse {
    extracted_text: String,
}

pub struct HttpTextExtractionService {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpTextExtractionService {
    pub fn new(endpoint_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint_url)
    }

    pub fn with_client(client: reqwest::Client, endpoint_url: String) -> Self {
        Self {
            client,
            endpoint_url,
        }
    }

    async fn read_image_bytes(location: &ImageLocation) -> Result<(Vec<u8>, &'static str)> {
        let image_path = location.to_file_path()?;

        log::debug!("[UPLOAD] Reading image from {:?}", image_path);

        let image_data = tokio::fs::read(&image_path)
            .await
            .with_context(|| format!("Failed to read image at {:?}", image_path))?;

        Ok((image_data, Self::guess_mime_type(&image_path)))
    }

    fn guess_mime_type(image_path: &Path) -> &'static str {
        image::ImageFormat::from_path(image_path)
            .map(|format| format.to_mime_type())
            .unwrap_or(global_constants::UPLOAD_FALLBACK_MIME_TYPE)
    }

    fn build_upload_form(image_data: Vec<u8>, mime_type: &str) -> Result<reqwest::multipart::Form> {
        let image_part = reqwest::multipart::Part::bytes(image_data)
            .file_name(global_constants::UPLOAD_FILE_NAME)
            .mime_str(mime_type)
            .context("Invalid image content type")?;

        Ok(reqwest::multipart::Form::new().part(global_constants::UPLOAD_FIELD_NAME, image_part))
    }

    fn parse_extraction_response(response_text: &str) -> Result<String> {
        let response: ExtractionResponse = serde_json::from_str(response_text).with_context(|| {
            format!(
                "Response is not JSON with a string `{}` field",
                global_constants::RESPONSE_TEXT_FIELD
            )
        })?;

        Ok(response.extracted_text)
    }
}

#[async_trait]
impl TextExtractionService for HttpTextExtractionService {
    async fn extract_text(&self, location: &ImageLocation) -> Result<String> {
        let (image_data, mime_type) = Self::read_image_bytes(location).await?;

        log::info!(
            "[UPLOAD] Uploading {} bytes ({}) to {}",
            image_data.len(),
            mime_type,
            self.endpoint_url
        );

        let form = Self::build_upload_form(image_data, mime_type)?;

        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.endpoint_url))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read extraction response body")?;
        log::debug!("[UPLOAD] Server responded {}: {}", status, response_text);

        if !status.is_success() {
            anyhow::bail!("Extraction server returned {}", status);
        }

        let extracted_text = Self::parse_extraction_response(&response_text)?;

        log::info!(
            "[UPLOAD] Received {} characters of extracted text",
            extracted_text.len()
        );
        Ok(extracted_text)
    }
}
