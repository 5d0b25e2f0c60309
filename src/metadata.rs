use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize};

use crate::{constants::METADATA_UPLOAD_URL, error::SdkError};

/// Off-chain token metadata. `file` is the URL of the token image.
#[derive(Debug, Clone, Default)]
pub struct CreateTokenMetadataRequest {
    pub file: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub twitter: String,
    pub telegram: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTokenMetadataResponse {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub show_name: bool,
    pub created_on: String,
    pub twitter: String,
    pub telegram: String,
    pub website: String,
    pub image: String,
    /// Pass this as the `uri` of the create instruction.
    pub metadata_uri: String,
}

/// Upload token metadata to the pump.fun IPFS endpoint.
pub async fn upload_metadata(
    client: &Client,
    request: &CreateTokenMetadataRequest,
) -> Result<CreateTokenMetadataResponse, SdkError> {
    upload_metadata_to(client, METADATA_UPLOAD_URL, request).await
}

/// Same as [`upload_metadata`] against another endpoint.
pub async fn upload_metadata_to(
    client: &Client,
    upload_url: &str,
    request: &CreateTokenMetadataRequest,
) -> Result<CreateTokenMetadataResponse, SdkError> {
    let image = client.get(&request.file).send().await?;
    if !image.status().is_success() {
        return Err(SdkError::Upload(format!(
            "image download from {} failed ({})",
            request.file,
            image.status()
        )));
    }
    let image_bytes = image.bytes().await?;

    let form = metadata_form(request, image_bytes.to_vec());

    let resp = client.post(upload_url).multipart(form).send().await?;
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(SdkError::Upload(format!("{} ({}): {}", upload_url, status, body)));
    }

    let metadata: CreateTokenMetadataResponse = resp.json().await?;
    log::info!("uploaded metadata for {}: {}", metadata.symbol, metadata.metadata_uri);

    Ok(metadata)
}

fn metadata_form(request: &CreateTokenMetadataRequest, image: Vec<u8>) -> Form {
    Form::new()
        .part("file", Part::bytes(image).file_name("image.png"))
        .text("name", request.name.clone())
        .text("symbol", request.symbol.clone())
        .text("description", request.description.clone())
        .text("twitter", request.twitter.clone())
        .text("telegram", request.telegram.clone())
        .text("website", request.website.clone())
        .text("showName", "true")
}
