use serde::Deserialize;

/// Request payload for the inquiry endpoint.
/// Converted into `model::Inquiry` with `TryFrom`, which validates the email.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryIn {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub phone: Option<String>,
}
