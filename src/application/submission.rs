//! Submission of a draft listing to the add-car endpoint.
//!
//! [`AddCarForm`] is a two-state machine (`idle` and `submitting`). A submit
//! issued while another one is in flight is rejected, never queued.

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use autolist_api_types::{AddCarResponse, CarListing};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{
    draft::{Draft, ListingField},
    image::ListingImage,
};

/// Failures that never produced an `AddCarResponse`.
///
/// The `Display` text is what the owner sees.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to encode listing: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Transport(String),
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Remote side of the form.
#[async_trait]
pub trait ListingGateway: Send + Sync {
    async fn add_car(
        &self,
        listing: &CarListing,
        image: Option<&ListingImage>,
    ) -> Result<AddCarResponse, GatewayError>;
}

/// Where submission outcomes are announced.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend stored the listing; the draft has been reset.
    Listed { message: String },
    /// The backend answered `success: false`; the draft is kept.
    Refused { message: String },
    /// No usable answer arrived; the draft is kept.
    Failed { message: String },
    /// Another submission was already in flight. Nothing was sent.
    Busy,
}

impl SubmitOutcome {
    pub fn is_listed(&self) -> bool {
        matches!(self, Self::Listed { .. })
    }
}

pub struct AddCarForm {
    gateway: Arc<dyn ListingGateway>,
    notifier: Arc<dyn Notifier>,
    draft: Mutex<Draft>,
    submitting: AtomicBool,
}

impl AddCarForm {
    pub fn new(gateway: Arc<dyn ListingGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            draft: Mutex::new(Draft::default()),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn edit(&self, field: ListingField) {
        let mut draft = self.lock_draft();
        *draft = std::mem::take(&mut *draft).with_field(field);
    }

    pub fn set_image(&self, image: Option<ListingImage>) {
        let mut draft = self.lock_draft();
        *draft = std::mem::take(&mut *draft).with_image(image);
    }

    pub fn listing(&self) -> CarListing {
        self.lock_draft().listing.clone()
    }

    pub fn image(&self) -> Option<ListingImage> {
        self.lock_draft().image.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Send the current draft once and route the answer to the notifier.
    pub async fn submit(&self) -> SubmitOutcome {
        // Declared first so it is released after every other step.
        let Some(_in_flight) = InFlight::acquire(&self.submitting) else {
            debug!("submission already in flight, ignoring");
            return SubmitOutcome::Busy;
        };

        let Draft { listing, image } = self.lock_draft().clone();
        info!(
            brand = %listing.brand,
            model = %listing.model,
            has_image = image.is_some(),
            image_bytes = image.as_ref().map_or(0, ListingImage::size_bytes),
            "submitting listing"
        );

        match self.gateway.add_car(&listing, image.as_ref()).await {
            Ok(AddCarResponse {
                success: true,
                message,
            }) => {
                self.notifier.success(&message);
                *self.lock_draft() = Draft::default();
                info!(%message, "listing accepted");
                SubmitOutcome::Listed { message }
            }
            Ok(AddCarResponse { message, .. }) => {
                self.notifier.error(&message);
                warn!(%message, "listing refused");
                SubmitOutcome::Refused { message }
            }
            Err(err) => {
                let message = err.to_string();
                self.notifier.error(&message);
                warn!(error = %err, "listing submission failed");
                SubmitOutcome::Failed { message }
            }
        }
    }

    fn lock_draft(&self) -> MutexGuard<'_, Draft> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the in-flight flag for the lifetime of one submission. Dropping it
/// clears the flag, including when the submit future is dropped mid-request.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests;
