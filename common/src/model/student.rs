use crate::model::verification::VerificationState;
use serde::{Deserialize, Serialize};

/// One student row, always owned by exactly one school.
///
/// All roster fields are free-form strings taken from the uploaded sheet;
/// `name` is the only one stored as absent rather than defaulted to `""`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub school: String,
    pub name: Option<String>,
    pub roll_number: String,
    pub registration_no: String,
    pub class: String,
    pub dob: String,
    pub age_group: String,
    pub verified: bool,
    pub verification_result: VerificationState,
    pub verification_image: Option<String>,
    pub verified_at: Option<String>,
}
