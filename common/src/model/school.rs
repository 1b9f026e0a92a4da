use serde::{Deserialize, Serialize};

/// A school record as stored and served by the API.
///
/// `students` is a cached projection of the owned student ids; the
/// `Student::school` back-reference is the source of truth and the list is
/// rebuilt after every roster bulk insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    pub aff_no: Option<String>,
    pub group_photo: Option<String>,
    #[serde(default)]
    pub students: Vec<String>,
}

/// Compact listing row for `GET /api/school` and single-school reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSummary {
    pub id: String,
    pub name: String,
    pub aff_no: Option<String>,
    pub group_photo: Option<String>,
}

/// Result of one roster ingestion, echoed back to the uploader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    pub id: String,
    pub name: String,
    pub aff_no: Option<String>,
    pub group_photo: Option<String>,
    pub students_count: usize,
}
