//! Action layer: collaborator interfaces and quote payload assembly.
//!
//! DESIGN
//! ======
//! Export and submission are performed by external collaborators behind
//! narrow traits. The core's obligations are to hand them well-formed input
//! and to surface their failures as retryable, user-visible errors; a failed
//! call never rolls back or mutates planner state.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::estimator::{Estimate, LineItem, QuoteOptions};
use crate::quote::QuoteAggregate;

/// Anchor of the consultation section a successful quote navigates to.
pub const CONSULT_ANCHOR: &str = "estimator";

// =============================================================================
// CUSTOMER
// =============================================================================

/// Contact details collected with a quote request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Which customer field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerFieldError {
    #[error("name is required")]
    MissingName,
    #[error("a valid email address is required")]
    InvalidEmail,
    #[error("phone may contain only digits and hyphens")]
    InvalidPhone,
    #[error("address is required")]
    MissingAddress,
}

impl Customer {
    /// Validate all fields, reporting the first failure in form order.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails its check.
    pub fn validate(&self) -> Result<(), CustomerFieldError> {
        if self.name.trim().is_empty() {
            return Err(CustomerFieldError::MissingName);
        }
        if !is_plausible_email(&self.email) {
            return Err(CustomerFieldError::InvalidEmail);
        }
        let phone = self.phone.trim();
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit() || c == '-') {
            return Err(CustomerFieldError::InvalidPhone);
        }
        if self.address.trim().is_empty() {
            return Err(CustomerFieldError::MissingAddress);
        }
        Ok(())
    }
}

/// Shape check only; deliverability is the endpoint's problem.
fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|part| !part.is_empty())
}

// =============================================================================
// QUOTE PAYLOAD
// =============================================================================

/// The structured payload handed to the quote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePayload {
    pub customer: Customer,
    pub rooms: u32,
    pub options: QuoteOptions,
    pub total_price: u64,
    pub breakdown: Vec<LineItem>,
}

impl QuotePayload {
    /// Assemble a payload from a whole-home estimate.
    #[must_use]
    pub fn from_estimate(customer: Customer, estimate: &Estimate) -> Self {
        Self {
            customer,
            rooms: estimate.rooms,
            options: estimate.options,
            total_price: estimate.total,
            breakdown: estimate.breakdown.clone(),
        }
    }

    /// Assemble a payload from the planner's quote aggregate. Each product
    /// group becomes one breakdown row.
    #[must_use]
    pub fn from_planner(customer: Customer, quote: &QuoteAggregate, rooms: u32, options: QuoteOptions) -> Self {
        let breakdown = quote
            .lines
            .iter()
            .map(|line| LineItem { item: format!("{} × {}", line.name, line.quantity), price: line.subtotal })
            .collect();
        Self { customer, rooms, options, total_price: quote.grand_total, breakdown }
    }
}

// =============================================================================
// COLLABORATORS
// =============================================================================

/// An exported snapshot of the rendered canvas.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// Suggested download name.
    pub file_name: String,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
}

/// Failure reported by the capture collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("image capture failed: {0}")]
pub struct CaptureError(pub String);

/// Captures the rendered canvas surface as an encoded image.
pub trait ImageCapture {
    /// Capture the element named by `surface_ref`.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError`] when the element cannot be rendered.
    fn capture(&self, surface_ref: &str) -> Result<Vec<u8>, CaptureError>;
}

/// Failure reported by the quote endpoint's transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("quote submission failed: {0}")]
pub struct SubmitError(pub String);

/// Receipt returned by the quote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Accepts a quote payload over a request/response exchange. Retry policy
/// and transport belong to the implementation.
#[async_trait]
pub trait QuoteEndpoint {
    /// Submit the payload and report the endpoint's verdict.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when the exchange itself fails.
    async fn submit(&self, payload: &QuotePayload) -> Result<SubmitReceipt, SubmitError>;
}

/// Requests navigation to a named anchor after a quote action.
pub trait Navigator {
    fn navigate_to(&self, anchor: &str);
}

// =============================================================================
// ACTIONS
// =============================================================================

/// User-visible, retryable failures from the action layer. None of these
/// mutate the placement store or the background picker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("could not save the image: {0}")]
    ExportFailed(#[from] CaptureError),
    #[error("invalid contact details: {0}")]
    InvalidCustomer(#[from] CustomerFieldError),
    #[error("could not send the quote: {0}")]
    SubmitFailed(#[from] SubmitError),
    #[error("the quote endpoint rejected the request: {0}")]
    SubmitRejected(String),
}

/// Download name for an exported snapshot.
#[must_use]
pub fn export_file_name() -> String {
    let now_ms = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!("my-smart-home-{now_ms}.png")
}

/// Export the canvas through `capture`. Failure is surfaced as a retryable
/// error and leaves planner state untouched.
///
/// # Errors
///
/// Returns [`ActionError::ExportFailed`] when the collaborator fails.
pub fn export_image(capture: &dyn ImageCapture, surface_ref: &str) -> Result<ImageAsset, ActionError> {
    match capture.capture(surface_ref) {
        Ok(bytes) => {
            let asset = ImageAsset { file_name: export_file_name(), bytes };
            info!(file = %asset.file_name, bytes = asset.bytes.len(), "canvas exported");
            Ok(asset)
        }
        Err(e) => {
            warn!(error = %e, "canvas export failed");
            Err(ActionError::from(e))
        }
    }
}

/// Validate the customer, submit the payload, and surface the outcome.
///
/// # Errors
///
/// Returns [`ActionError`] for an invalid customer, a failed exchange, or a
/// rejection reported by the endpoint.
pub async fn submit_quote(endpoint: &dyn QuoteEndpoint, payload: &QuotePayload) -> Result<SubmitReceipt, ActionError> {
    payload.customer.validate()?;
    match endpoint.submit(payload).await {
        Ok(receipt) if receipt.success => {
            info!(id = receipt.id.as_deref().unwrap_or_default(), "quote submitted");
            Ok(receipt)
        }
        Ok(receipt) => {
            warn!(message = %receipt.message, "quote endpoint rejected the request");
            Err(ActionError::SubmitRejected(receipt.message))
        }
        Err(e) => {
            warn!(error = %e, "quote submission failed");
            Err(ActionError::from(e))
        }
    }
}

/// Submit and, on success, request navigation to the consultation section.
///
/// # Errors
///
/// Propagates [`submit_quote`] failures; no navigation is requested on
/// failure.
pub async fn submit_quote_with_followup(
    endpoint: &dyn QuoteEndpoint,
    navigator: &dyn Navigator,
    payload: &QuotePayload,
) -> Result<SubmitReceipt, ActionError> {
    let receipt = submit_quote(endpoint, payload).await?;
    navigator.navigate_to(CONSULT_ANCHOR);
    Ok(receipt)
}
