use gloo::timers::future::TimeoutFuture;
use shared::error::SubmissionError;
use shared::setup::ProfileDraft;

/// Simulated latency for saving the business profile.
pub const SUBMIT_DELAY_MS: u32 = 500;

/// Mocked profile-submission collaborator. The typed payload is
/// serialized and logged where a real build would POST it; a
/// serialization failure surfaces as a submission rejection and leaves
/// the form editable.
pub async fn submit_profile(profile: &ProfileDraft) -> Result<(), SubmissionError> {
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    match serde_json::to_string(profile) {
        Ok(payload) => {
            gloo::console::log!("profile submitted:", payload);
            Ok(())
        }
        Err(error) => Err(SubmissionError::Rejected(error.to_string())),
    }
}
