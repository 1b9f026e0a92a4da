use common::model::student::Student;
use regex::Regex;

/// Column order of the verified-profiles export.
pub const COLUMNS: [&str; 4] = ["Name", "Roll Number", "Verification Status", "School"];

pub const SHEET_NAME: &str = "Verified Profiles";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Shapes one export row per student, in `COLUMNS` order. The school column
/// falls back to "Unknown" when the school record is missing.
pub fn profile_rows(school_name: Option<&str>, students: &[Student]) -> Vec<Vec<String>> {
    let school = school_name.unwrap_or("Unknown");
    students
        .iter()
        .map(|student| {
            vec![
                student.name.clone().unwrap_or_default(),
                student.roll_number.clone(),
                student.verification_result.status_label().to_string(),
                school.to_string(),
            ]
        })
        .collect()
}

/// Suggested download filename, `<school>_verified_profiles.xlsx`, with the
/// school name reduced to filesystem-safe characters.
pub fn export_filename(school_name: Option<&str>) -> String {
    let base = school_name.unwrap_or("school");
    let safe = Regex::new(r"[^A-Za-z0-9 ._-]")
        .map(|re| re.replace_all(base, "").to_string())
        .unwrap_or_else(|_| base.to_string());
    let trimmed = safe.trim();
    let name = if trimmed.is_empty() { "school" } else { trimmed };
    format!("{name}_verified_profiles.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::verification::VerificationState;

    fn student(name: Option<&str>, roll: &str, result: VerificationState) -> Student {
        Student {
            id: "s-1".to_string(),
            school: "sch-1".to_string(),
            name: name.map(str::to_string),
            roll_number: roll.to_string(),
            registration_no: String::new(),
            class: String::new(),
            dob: String::new(),
            age_group: String::new(),
            verified: result == VerificationState::Success,
            verification_result: result,
            verification_image: None,
            verified_at: None,
        }
    }

    #[test]
    fn status_labels_cover_all_states() {
        let students = vec![
            student(Some("A. Roy"), "12", VerificationState::Success),
            student(Some("B. Sen"), "13", VerificationState::Failed),
            student(None, "14", VerificationState::Pending),
        ];

        let rows = profile_rows(Some("Oak Hall"), &students);
        assert_eq!(rows[0], vec!["A. Roy", "12", "Verified", "Oak Hall"]);
        assert_eq!(rows[1], vec!["B. Sen", "13", "Failed", "Oak Hall"]);
        // Unset verification and absent name read as Pending / empty.
        assert_eq!(rows[2], vec!["", "14", "Pending", "Oak Hall"]);
    }

    #[test]
    fn missing_school_reads_as_unknown() {
        let students = vec![student(Some("A. Roy"), "12", VerificationState::Pending)];
        let rows = profile_rows(None, &students);
        assert_eq!(rows[0][3], "Unknown");
    }

    #[test]
    fn filename_falls_back_to_school_and_drops_unsafe_characters() {
        assert_eq!(
            export_filename(Some("Oak Hall")),
            "Oak Hall_verified_profiles.xlsx"
        );
        assert_eq!(
            export_filename(Some("Oak/Hall: \"North\"")),
            "OakHall North_verified_profiles.xlsx"
        );
        assert_eq!(export_filename(None), "school_verified_profiles.xlsx");
        assert_eq!(export_filename(Some("///")), "school_verified_profiles.xlsx");
    }
}
