use std::sync::atomic::AtomicUsize;

use autolist_api_types::{Category, FuelType, Location, Transmission};
use bytes::Bytes;
use tokio::sync::Notify;

use super::*;

type Call = (CarListing, Option<ListingImage>);

/// Answers every call with a fixed result.
struct ScriptedGateway {
    reply: fn() -> Result<AddCarResponse, GatewayError>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedGateway {
    fn new(reply: fn() -> Result<AddCarResponse, GatewayError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingGateway for ScriptedGateway {
    async fn add_car(
        &self,
        listing: &CarListing,
        image: Option<&ListingImage>,
    ) -> Result<AddCarResponse, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((listing.clone(), image.cloned()));
        (self.reply)()
    }
}

/// Parks inside `add_car` until released.
#[derive(Default)]
struct GatedGateway {
    entered: Notify,
    release: Notify,
    calls: AtomicUsize,
}

#[async_trait]
impl ListingGateway for GatedGateway {
    async fn add_car(
        &self,
        _listing: &CarListing,
        _image: Option<&ListingImage>,
    ) -> Result<AddCarResponse, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(accepted())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Toast {
    Success(String),
    Error(String),
}

#[derive(Default)]
struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts
            .lock()
            .unwrap()
            .push(Toast::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts
            .lock()
            .unwrap()
            .push(Toast::Error(message.to_string()));
    }
}

fn accepted() -> AddCarResponse {
    AddCarResponse {
        success: true,
        message: "Car Added".into(),
    }
}

fn refused() -> Result<AddCarResponse, GatewayError> {
    Ok(AddCarResponse {
        success: false,
        message: "Not authorized".into(),
    })
}

fn unreachable_backend() -> Result<AddCarResponse, GatewayError> {
    Err(GatewayError::Transport("connection refused".into()))
}

fn fill(form: &AddCarForm) {
    for field in [
        ListingField::Brand("Bajaj".into()),
        ListingField::Model("RE".into()),
        ListingField::Year(2024),
        ListingField::PricePerDay(50.0),
        ListingField::Category(Some(Category::Cargo)),
        ListingField::Transmission(Some(Transmission::Manual)),
        ListingField::FuelType(Some(FuelType::Cng)),
        ListingField::SeatingCapacity(3),
        ListingField::Location(Some(Location::UllalBeach)),
        ListingField::Description("Test".into()),
    ] {
        form.edit(field);
    }
}

fn picture() -> ListingImage {
    ListingImage::from_bytes("auto.png", Bytes::from_static(b"\x89PNG")).expect("png")
}

#[tokio::test]
async fn success_resets_draft_and_image() {
    let gateway = ScriptedGateway::new(|| Ok(accepted()));
    let notifier = Arc::new(RecordingNotifier::default());
    let form = AddCarForm::new(gateway.clone(), notifier.clone());
    fill(&form);
    form.set_image(Some(picture()));
    let submitted = form.listing();

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Listed {
            message: "Car Added".into()
        }
    );
    assert_eq!(form.listing(), CarListing::default());
    assert_eq!(form.image(), None);
    assert!(!form.is_submitting());
    assert_eq!(notifier.toasts(), vec![Toast::Success("Car Added".into())]);

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, submitted);
    assert_eq!(calls[0].1, Some(picture()));
}

#[tokio::test]
async fn refusal_keeps_draft() {
    let gateway = ScriptedGateway::new(refused);
    let notifier = Arc::new(RecordingNotifier::default());
    let form = AddCarForm::new(gateway, notifier.clone());
    fill(&form);
    form.set_image(Some(picture()));
    let before = form.listing();

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Refused {
            message: "Not authorized".into()
        }
    );
    assert_eq!(form.listing(), before);
    assert_eq!(form.image(), Some(picture()));
    assert!(!form.is_submitting());
    assert_eq!(notifier.toasts(), vec![Toast::Error("Not authorized".into())]);
}

#[tokio::test]
async fn transport_failure_clears_flag_and_keeps_draft() {
    let gateway = ScriptedGateway::new(unreachable_backend);
    let notifier = Arc::new(RecordingNotifier::default());
    let form = AddCarForm::new(gateway, notifier.clone());
    fill(&form);
    let before = form.listing();

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "connection refused".into()
        }
    );
    assert!(!form.is_submitting());
    assert_eq!(form.listing(), before);
    assert_eq!(
        notifier.toasts(),
        vec![Toast::Error("connection refused".into())]
    );
}

#[tokio::test]
async fn status_failure_uses_status_message() {
    let gateway = ScriptedGateway::new(|| Err(GatewayError::Status(500)));
    let notifier = Arc::new(RecordingNotifier::default());
    let form = AddCarForm::new(gateway, notifier.clone());

    form.submit().await;

    assert_eq!(
        notifier.toasts(),
        vec![Toast::Error("Request failed with status code 500".into())]
    );
}

#[tokio::test]
async fn resubmit_while_in_flight_is_rejected() {
    let gateway = Arc::new(GatedGateway::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let form = Arc::new(AddCarForm::new(gateway.clone(), notifier.clone()));
    fill(&form);

    let first = tokio::spawn({
        let form = Arc::clone(&form);
        async move { form.submit().await }
    });
    gateway.entered.notified().await;

    assert!(form.is_submitting());
    assert_eq!(form.submit().await, SubmitOutcome::Busy);
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

    gateway.release.notify_one();
    let outcome = first.await.expect("first submission");

    assert!(outcome.is_listed());
    assert!(!form.is_submitting());
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    assert_eq!(notifier.toasts(), vec![Toast::Success("Car Added".into())]);
}

#[tokio::test]
async fn edits_while_in_flight_are_kept_until_success() {
    let gateway = Arc::new(GatedGateway::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let form = Arc::new(AddCarForm::new(gateway.clone(), notifier));

    let first = tokio::spawn({
        let form = Arc::clone(&form);
        async move { form.submit().await }
    });
    gateway.entered.notified().await;

    form.edit(ListingField::Brand("Mahindra".into()));
    assert_eq!(form.listing().brand, "Mahindra");

    gateway.release.notify_one();
    first.await.expect("first submission");
    assert_eq!(form.listing(), CarListing::default());
}

#[tokio::test]
async fn dropped_submission_releases_flag() {
    let gateway = Arc::new(GatedGateway::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let form = Arc::new(AddCarForm::new(gateway.clone(), notifier.clone()));

    let pending = tokio::spawn({
        let form = Arc::clone(&form);
        async move { form.submit().await }
    });
    gateway.entered.notified().await;
    assert!(form.is_submitting());

    pending.abort();
    let joined = pending.await;

    assert!(joined.is_err_and(|err| err.is_cancelled()));
    assert!(!form.is_submitting());
    assert!(notifier.toasts().is_empty());
}
