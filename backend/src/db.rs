use common::model::school::{School, SchoolSummary};
use common::model::student::Student;
use common::model::verification::VerificationState;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

/// Opens the roster database, creating parent directories and the schema
/// when missing. All DDL is idempotent, so this is safe per-operation.
pub fn open_db(path: &Path) -> rusqlite::Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS schools(
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            aff_no TEXT,
            group_photo TEXT,
            student_ids TEXT NOT NULL DEFAULT '[]'
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS students(
            id TEXT PRIMARY KEY,
            school_id TEXT NOT NULL,
            name TEXT,
            roll_number TEXT NOT NULL DEFAULT '',
            registration_no TEXT NOT NULL DEFAULT '',
            class TEXT NOT NULL DEFAULT '',
            dob TEXT NOT NULL DEFAULT '',
            age_group TEXT NOT NULL DEFAULT '',
            verified INTEGER NOT NULL DEFAULT 0,
            verification_result TEXT NOT NULL DEFAULT 'pending',
            verification_image TEXT,
            verified_at TEXT,
            FOREIGN KEY(school_id) REFERENCES schools(id)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_students_school ON students(school_id)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS users(
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

fn ids_json(ids: &[String]) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

fn school_from_row(row: &Row) -> rusqlite::Result<School> {
    let stored_ids: String = row.get(4)?;
    Ok(School {
        id: row.get(0)?,
        name: row.get(1)?,
        aff_no: row.get(2)?,
        group_photo: row.get(3)?,
        students: serde_json::from_str(&stored_ids).unwrap_or_default(),
    })
}

fn student_from_row(row: &Row) -> rusqlite::Result<Student> {
    let result: String = row.get(9)?;
    Ok(Student {
        id: row.get(0)?,
        school: row.get(1)?,
        name: row.get(2)?,
        roll_number: row.get(3)?,
        registration_no: row.get(4)?,
        class: row.get(5)?,
        dob: row.get(6)?,
        age_group: row.get(7)?,
        verified: row.get::<_, i64>(8)? != 0,
        verification_result: VerificationState::parse(&result),
        verification_image: row.get(10)?,
        verified_at: row.get(11)?,
    })
}

const STUDENT_COLUMNS: &str = "id, school_id, name, roll_number, registration_no, class, dob, \
     age_group, verified, verification_result, verification_image, verified_at";

pub fn insert_school(conn: &Connection, school: &School) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO schools(id, name, aff_no, group_photo, student_ids)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            school.id,
            school.name,
            school.aff_no,
            school.group_photo,
            ids_json(&school.students)
        ],
    )?;
    Ok(())
}

/// Inserts a roster's students as one batched write inside a transaction,
/// so the re-link step that follows never observes a partial batch.
pub fn insert_students_batch(conn: &mut Connection, students: &[Student]) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO students(id, school_id, name, roll_number, registration_no, class, dob, \
             age_group, verified, verification_result)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;
        for student in students {
            stmt.execute(params![
                student.id,
                student.school,
                student.name,
                student.roll_number,
                student.registration_no,
                student.class,
                student.dob,
                student.age_group,
                student.verified as i64,
                student.verification_result.as_str(),
            ])?;
        }
    }
    tx.commit()
}

/// Rebuilds the school's cached student-id projection.
pub fn relink_students(
    conn: &Connection,
    school_id: &str,
    student_ids: &[String],
) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE schools SET student_ids = ?1 WHERE id = ?2",
        params![ids_json(student_ids), school_id],
    )?;
    Ok(())
}

pub fn list_schools(conn: &Connection) -> rusqlite::Result<Vec<SchoolSummary>> {
    let mut stmt =
        conn.prepare("SELECT id, name, aff_no, group_photo FROM schools ORDER BY rowid")?;
    let rows = stmt.query_map([], |row| {
        Ok(SchoolSummary {
            id: row.get(0)?,
            name: row.get(1)?,
            aff_no: row.get(2)?,
            group_photo: row.get(3)?,
        })
    })?;
    rows.collect()
}

pub fn get_school(conn: &Connection, id: &str) -> rusqlite::Result<Option<School>> {
    conn.query_row(
        "SELECT id, name, aff_no, group_photo, student_ids FROM schools WHERE id = ?1",
        params![id],
        school_from_row,
    )
    .optional()
}

pub fn update_school(
    conn: &Connection,
    id: &str,
    name: &str,
    aff_no: Option<&str>,
) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE schools SET name = ?1, aff_no = ?2 WHERE id = ?3",
        params![name, aff_no, id],
    )?;
    Ok(())
}

/// Deletes a school and every student referencing it in one transaction.
pub fn delete_school(conn: &mut Connection, id: &str) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM students WHERE school_id = ?1", params![id])?;
    tx.execute("DELETE FROM schools WHERE id = ?1", params![id])?;
    tx.commit()
}

pub fn students_by_school(conn: &Connection, school_id: &str) -> rusqlite::Result<Vec<Student>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {STUDENT_COLUMNS} FROM students WHERE school_id = ?1 ORDER BY rowid"
    ))?;
    let rows = stmt.query_map(params![school_id], student_from_row)?;
    rows.collect()
}

pub fn get_student(conn: &Connection, id: &str) -> rusqlite::Result<Option<Student>> {
    conn.query_row(
        &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?1"),
        params![id],
        student_from_row,
    )
    .optional()
}

/// Records a verification outcome. The image reference is only overwritten
/// when a new capture was stored.
pub fn set_verification(
    conn: &Connection,
    student_id: &str,
    result: VerificationState,
    image: Option<&str>,
    verified_at: &str,
) -> rusqlite::Result<bool> {
    let verified = matches!(result, VerificationState::Success) as i64;
    let changed = conn.execute(
        "UPDATE students SET verified = ?1, verification_result = ?2, \
         verification_image = COALESCE(?3, verification_image), verified_at = ?4 WHERE id = ?5",
        params![verified, result.as_str(), image, verified_at, student_id],
    )?;
    Ok(changed > 0)
}

pub fn insert_user(
    conn: &Connection,
    id: &str,
    username: &str,
    password_hash: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO users(id, username, password_hash) VALUES (?1, ?2, ?3)",
        params![id, username, password_hash],
    )?;
    Ok(())
}

/// Looks up a user by name, returning `(id, password_hash)`.
pub fn find_user(conn: &Connection, username: &str) -> rusqlite::Result<Option<(String, String)>> {
    conn.query_row(
        "SELECT id, password_hash FROM users WHERE username = ?1",
        params![username],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
}
