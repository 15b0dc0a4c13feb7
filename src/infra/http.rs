//! reqwest-backed [`ListingGateway`].

use std::time::Duration;

use async_trait::async_trait;
use autolist_api_types::{ADD_CAR_PATH, AddCarResponse, CAR_DATA_FIELD, CarListing, IMAGE_FIELD};
use reqwest::{
    Client, Response, Url,
    header::{AUTHORIZATION, HeaderValue},
    multipart::{Form, Part},
};
use tracing::debug;

use crate::application::submission::{GatewayError, ListingGateway};
use crate::domain::image::ListingImage;

use super::error::InfraError;

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct HttpListingGateway {
    client: Client,
    base: Url,
    token: Option<String>,
}

impl HttpListingGateway {
    /// `base` must end with `/` for relative paths to land beneath it.
    pub fn new(
        base: Url,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, InfraError> {
        let mut builder = Client::builder().user_agent(Self::user_agent());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            base,
            token,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("autolist/", env!("CARGO_PKG_VERSION"))
    }

    pub fn url(&self, path: &str) -> Result<Url, GatewayError> {
        self.base
            .join(path)
            .map_err(|err| GatewayError::Transport(format!("invalid URL: {err}")))
    }

    fn auth_header(&self) -> Result<Option<HeaderValue>, GatewayError> {
        self.token
            .as_deref()
            .map(|token| {
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|err| GatewayError::Transport(format!("invalid token: {err}")))
            })
            .transpose()
    }

    async fn handle(resp: Response) -> Result<AddCarResponse, GatewayError> {
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            debug!(%status, body = %text, "add-car returned an error status");
            return Err(GatewayError::Status(status.as_u16()));
        }
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

/// Multipart body: the picture (when present) under `image`, then the
/// listing JSON under `carData`.
pub fn listing_form(
    listing: &CarListing,
    image: Option<&ListingImage>,
) -> Result<Form, GatewayError> {
    let mut form = Form::new();
    if let Some(image) = image {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.content_type())?;
        form = form.part(IMAGE_FIELD, part);
    }
    let car_data = serde_json::to_string(listing)?;
    Ok(form.text(CAR_DATA_FIELD, car_data))
}

#[async_trait]
impl ListingGateway for HttpListingGateway {
    async fn add_car(
        &self,
        listing: &CarListing,
        image: Option<&ListingImage>,
    ) -> Result<AddCarResponse, GatewayError> {
        let url = self.url(ADD_CAR_PATH)?;
        let form = listing_form(listing, image)?;

        let mut req = self.client.post(url).multipart(form);
        if let Some(header) = self.auth_header()? {
            req = req.header(AUTHORIZATION, header);
        }

        let resp = req.send().await?;
        Self::handle(resp).await
    }
}
