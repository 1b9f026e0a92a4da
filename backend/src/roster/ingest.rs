use crate::db;
use crate::error::ApiError;
use crate::roster::normalize::{first_non_empty, normalize_row};
use crate::sheet::decode::RawRow;
use common::model::school::{RosterSummary, School};
use common::model::student::Student;
use common::model::verification::VerificationState;
use log::info;
use rusqlite::Connection;
use std::collections::HashMap;
use uuid::Uuid;

pub const DEFAULT_SCHOOL_NAME: &str = "Unnamed School";

// Canonical-key synonyms per field, ordered by preference. The lists match
// the headers seen in real uploads, including a couple of historical typos.
const SCHOOL_NAME_KEYS: &[&str] = &["school", "schoolname"];
const AFF_NO_KEYS: &[&str] = &["affno", "affiliationno"];
const NAME_KEYS: &[&str] = &["name", "studentname", "student_fullname", "fullname"];
const ROLL_KEYS: &[&str] = &["rollnumber", "rollno", "roll", "rollnumberno"];
const REGISTRATION_KEYS: &[&str] = &[
    "registrationno",
    "regno",
    "regnumber",
    "registerno",
    "admissionno",
    "admissionnumber",
];
const CLASS_KEYS: &[&str] = &["class", "std", "standard", "grade"];
const DOB_KEYS: &[&str] = &["dob", "dateofbirth", "dateofbirthdob"];
const AGE_GROUP_KEYS: &[&str] = &["agegroup", "age", "agegrou"];

/// Runs the ingestion pipeline against an already-decoded sheet: school
/// attributes from the first row, student rows filtered and bulk-inserted,
/// then the school's cached student-id list rebuilt to match.
///
/// The student batch is one transaction; the school insert and the re-link
/// are separate writes, so a mid-pipeline failure can leave a school without
/// students (at-least-once, surfaced to the caller as an error).
pub fn ingest(
    conn: &mut Connection,
    rows: &[RawRow],
    group_photo: Option<String>,
) -> Result<RosterSummary, ApiError> {
    if rows.is_empty() {
        return Err(ApiError::Validation(
            "Roster file appears to be empty".to_string(),
        ));
    }

    let normalized: Vec<HashMap<String, String>> = rows.iter().map(normalize_row).collect();

    let first = &normalized[0];
    let school_name = match first_non_empty(first, SCHOOL_NAME_KEYS) {
        "" => DEFAULT_SCHOOL_NAME.to_string(),
        name => name.to_string(),
    };
    let aff_no = match first_non_empty(first, AFF_NO_KEYS) {
        "" => None,
        aff => Some(aff.to_string()),
    };

    let school = School {
        id: Uuid::new_v4().to_string(),
        name: school_name,
        aff_no,
        group_photo,
        students: Vec::new(),
    };
    db::insert_school(conn, &school)?;

    let students: Vec<Student> = normalized
        .iter()
        .filter_map(|row| student_from_row(row, &school.id))
        .collect();

    if !students.is_empty() {
        db::insert_students_batch(conn, &students)?;
    }
    let ids: Vec<String> = students.iter().map(|s| s.id.clone()).collect();
    db::relink_students(conn, &school.id, &ids)?;

    info!(
        "ingested roster for school '{}' ({} students)",
        school.name,
        ids.len()
    );

    Ok(RosterSummary {
        id: school.id,
        name: school.name,
        aff_no: school.aff_no,
        group_photo: school.group_photo,
        students_count: ids.len(),
    })
}

/// Extracts one student from a normalized row. Rows where every tracked
/// field is blank produce nothing, so fully-empty spreadsheet lines never
/// become ghost records.
fn student_from_row(row: &HashMap<String, String>, school_id: &str) -> Option<Student> {
    let name = first_non_empty(row, NAME_KEYS);
    let roll_number = first_non_empty(row, ROLL_KEYS);
    let registration_no = first_non_empty(row, REGISTRATION_KEYS);
    let class = first_non_empty(row, CLASS_KEYS);
    let dob = first_non_empty(row, DOB_KEYS);
    let age_group = first_non_empty(row, AGE_GROUP_KEYS);

    let has_any = [name, roll_number, registration_no, class, dob, age_group]
        .iter()
        .any(|v| !v.trim().is_empty());
    if !has_any {
        return None;
    }

    Some(Student {
        id: Uuid::new_v4().to_string(),
        school: school_id.to_string(),
        name: if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        },
        roll_number: roll_number.to_string(),
        registration_no: registration_no.to_string(),
        class: class.to_string(),
        dob: dob.to_string(),
        age_group: age_group.to_string(),
        verified: false,
        verification_result: VerificationState::Pending,
        verification_image: None,
        verified_at: None,
    })
}
