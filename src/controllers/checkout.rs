//! Checkout Controller
//!
//! Starts a hosted checkout session and sends the browser to it.

use log::{error, info};

use crate::api::CheckoutBackend;
use crate::models::CheckoutOutcome;

/// Page-level side effects the controllers may trigger
pub trait Navigator {
    fn redirect(&self, url: &str);
    /// Blocking user-visible message
    fn alert(&self, message: &str);
}

#[derive(Clone)]
pub struct CheckoutController<B, N> {
    backend: B,
    navigator: N,
}

impl<B: CheckoutBackend, N: Navigator> CheckoutController<B, N> {
    pub fn new(backend: B, navigator: N) -> Self {
        Self { backend, navigator }
    }

    /// `None` when the request itself failed; that case is only logged
    pub async fn start(&self) -> Option<CheckoutOutcome> {
        info!("checkout button clicked");
        let outcome = match self.backend.create_checkout_session().await {
            Ok(resp) => resp.outcome(),
            Err(e) => {
                error!("Fetch error: {}", e);
                return None;
            }
        };
        match &outcome {
            CheckoutOutcome::Redirect(url) => self.navigator.redirect(url),
            CheckoutOutcome::Failed(reason) => {
                error!("Checkout session error: {}", reason);
                if let Some(message) = outcome.alert_message() {
                    self.navigator.alert(&message);
                }
            }
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::CheckoutResponse;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeBackend(RefCell<Option<Result<CheckoutResponse, ApiError>>>);

    impl FakeBackend {
        fn replying(resp: Result<CheckoutResponse, ApiError>) -> Self {
            Self(RefCell::new(Some(resp)))
        }
    }

    impl CheckoutBackend for FakeBackend {
        async fn create_checkout_session(&self) -> Result<CheckoutResponse, ApiError> {
            self.0.borrow_mut().take().expect("one checkout request")
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        redirects: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl Navigator for &RecordingNavigator {
        fn redirect(&self, url: &str) {
            self.redirects.borrow_mut().push(url.to_string());
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_redirects_to_session_url() {
        let nav = RecordingNavigator::default();
        let controller = CheckoutController::new(
            FakeBackend::replying(Ok(CheckoutResponse {
                url: Some("https://pay.example/sess_1".into()),
                error: None,
            })),
            &nav,
        );

        block_on(controller.start());

        assert_eq!(*nav.redirects.borrow(), vec!["https://pay.example/sess_1"]);
        assert!(nav.alerts.borrow().is_empty());
    }

    #[test]
    fn test_error_payload_alerts_without_navigating() {
        let nav = RecordingNavigator::default();
        let controller = CheckoutController::new(
            FakeBackend::replying(Ok(CheckoutResponse {
                url: None,
                error: Some("card_declined".into()),
            })),
            &nav,
        );

        let outcome = block_on(controller.start());

        assert_eq!(outcome, Some(CheckoutOutcome::Failed("card_declined".into())));
        assert!(nav.redirects.borrow().is_empty());
        assert_eq!(nav.alerts.borrow().len(), 1);
        assert!(nav.alerts.borrow()[0].contains("card_declined"));
    }

    #[test]
    fn test_network_error_is_silent() {
        let nav = RecordingNavigator::default();
        let controller = CheckoutController::new(
            FakeBackend::replying(Err(ApiError::Network("offline".into()))),
            &nav,
        );

        assert_eq!(block_on(controller.start()), None);
        assert!(nav.redirects.borrow().is_empty());
        assert!(nav.alerts.borrow().is_empty());
    }
}
