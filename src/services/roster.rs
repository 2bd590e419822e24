use crate::models::Student;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

const BLOCK_HEADER: &str = "Student:";

/// Errors that can occur while reading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required field '{field}' in student entry {entry}")]
    MissingField { field: &'static str, entry: usize },

    #[error("Invalid number format for {field}: '{value}' in student entry for {name}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        name: String,
    },
}

/// Read and parse a roster file
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Student>, RosterError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let students = parse_roster(&contents)?;

    tracing::info!(
        "Loaded {} students from {}",
        students.len(),
        path.as_ref().display()
    );

    Ok(students)
}

/// Parse roster text made of `Student:` blocks of `Key: Value` lines
///
/// Blank lines and lines without a colon are ignored.
pub fn parse_roster(contents: &str) -> Result<Vec<Student>, RosterError> {
    let mut students = Vec::new();
    let mut fields: HashMap<&str, &str> = HashMap::new();

    for line in contents.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if line == BLOCK_HEADER {
            if !fields.is_empty() {
                students.push(student_from_fields(&fields, students.len() + 1)?);
                fields.clear();
            }
            continue;
        }

        match line.split_once(':') {
            Some((key, value)) => {
                fields.insert(key.trim(), value.trim());
            }
            None => tracing::debug!("Skipping roster line without a field: {}", line),
        }
    }

    if !fields.is_empty() {
        students.push(student_from_fields(&fields, students.len() + 1)?);
    }

    Ok(students)
}

fn student_from_fields(fields: &HashMap<&str, &str>, entry: usize) -> Result<Student, RosterError> {
    let field = |key: &'static str| {
        fields
            .get(key)
            .copied()
            .ok_or(RosterError::MissingField { field: key, entry })
    };

    let name = field("Name")?;
    let age = field("Age")?;
    let gender = field("Gender")?;
    let year = field("Year")?;
    let major = field("Major")?;
    let gpa = field("GPA")?;
    let preferences = field("RoommatePreferences")?;
    let internships = field("PreviousInternships")?;

    let invalid = |field: &'static str, value: &str| RosterError::InvalidNumber {
        field,
        value: value.to_string(),
        name: name.to_string(),
    };

    let age_value = age.parse().map_err(|_| invalid("age", age))?;
    let year_value = year.parse().map_err(|_| invalid("year", year))?;
    let gpa_value = gpa.parse().map_err(|_| invalid("GPA", gpa))?;

    let previous_internships = if internships.eq_ignore_ascii_case("none") {
        Vec::new()
    } else {
        split_list(internships)
    };

    Ok(Student::new(
        name,
        age_value,
        gender,
        year_value,
        major,
        gpa_value,
        split_list(preferences),
        previous_internships,
    ))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
