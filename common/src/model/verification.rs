use serde::{Deserialize, Serialize};

/// Tri-valued verification status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationState {
    #[default]
    Pending,
    Success,
    Failed,
}

impl VerificationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationState::Pending => "pending",
            VerificationState::Success => "success",
            VerificationState::Failed => "failed",
        }
    }

    /// Anything that is not a known state reads as pending.
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => VerificationState::Success,
            "failed" => VerificationState::Failed,
            _ => VerificationState::Pending,
        }
    }

    /// Human-readable label used by the verified-profiles export.
    pub fn status_label(&self) -> &'static str {
        match self {
            VerificationState::Success => "Verified",
            VerificationState::Failed => "Failed",
            VerificationState::Pending => "Pending",
        }
    }
}
