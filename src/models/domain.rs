use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Stable index of a student inside a [`StudentRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub usize);

impl StudentId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Personal and academic attributes of a student
///
/// Records are immutable once registered. The roommate slot lives in the
/// registry so that pairings stay symmetric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub year: u32,
    pub major: String,
    pub gpa: f64,
    /// Preferred roommates by name, most preferred first
    #[serde(rename = "roommatePreferences", default)]
    pub roommate_preferences: Vec<String>,
    #[serde(rename = "previousInternships", default)]
    pub previous_internships: Vec<String>,
}

impl Student {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        year: u32,
        major: impl Into<String>,
        gpa: f64,
        roommate_preferences: Vec<String>,
        previous_internships: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
            year,
            major: major.into(),
            gpa,
            roommate_preferences,
            previous_internships,
        }
    }

    /// Position of `name` in this student's roommate preferences (0 = most preferred)
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.roommate_preferences.iter().position(|p| p == name)
    }

    pub fn prefers(&self, name: &str) -> bool {
        self.rank_of(name).is_some()
    }

    /// Case-insensitive (Unicode) check against the internship history
    pub fn has_worked_at(&self, company: &str) -> bool {
        let target = company.to_lowercase();
        self.previous_internships
            .iter()
            .any(|c| c.to_lowercase() == target)
    }
}

/// Errors raised while assembling a registry
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("Duplicate student name: {0}")]
    DuplicateName(String),
}

/// Owns every student of a run plus their roommate assignments
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: Vec<Student>,
    roommates: Vec<Option<StudentId>>,
    by_name: HashMap<String, StudentId>,
}

impl StudentRegistry {
    /// Register students in order; ids follow input order
    pub fn new(students: Vec<Student>) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::with_capacity(students.len());
        for (index, student) in students.iter().enumerate() {
            if by_name.insert(student.name.clone(), StudentId(index)).is_some() {
                return Err(RegistryError::DuplicateName(student.name.clone()));
            }
        }

        Ok(Self {
            roommates: vec![None; students.len()],
            students,
            by_name,
        })
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = StudentId> + '_ {
        (0..self.students.len()).map(StudentId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StudentId, &Student)> + '_ {
        self.students
            .iter()
            .enumerate()
            .map(|(index, student)| (StudentId(index), student))
    }

    /// Panics if `id` did not come from this registry
    pub fn student(&self, id: StudentId) -> &Student {
        &self.students[id.index()]
    }

    pub fn lookup(&self, name: &str) -> Option<StudentId> {
        self.by_name.get(name).copied()
    }

    pub fn roommate_of(&self, id: StudentId) -> Option<StudentId> {
        self.roommates[id.index()]
    }

    /// Pair two students, detaching whoever either of them was paired with
    pub fn pair(&mut self, a: StudentId, b: StudentId) {
        self.unpair(a);
        self.unpair(b);
        self.roommates[a.index()] = Some(b);
        self.roommates[b.index()] = Some(a);
    }

    /// Clear a student's roommate on both sides; returns the former roommate
    pub fn unpair(&mut self, id: StudentId) -> Option<StudentId> {
        let former = self.roommates[id.index()].take()?;
        self.roommates[former.index()] = None;
        Some(former)
    }

    /// Every current pair once, lower id first, ordered by that id
    pub fn roommate_pairs(&self) -> Vec<(StudentId, StudentId)> {
        self.roommates
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Some(other) if index < other.index() => Some((StudentId(index), *other)),
                _ => None,
            })
            .collect()
    }
}

/// Connection strength bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionWeights {
    pub roommate: u32,
    pub shared_internship: u32,
    pub same_major: u32,
    pub same_age: u32,
}

impl Default for ConnectionWeights {
    fn default() -> Self {
        Self {
            roommate: 4,
            shared_internship: 3,
            same_major: 2,
            same_age: 1,
        }
    }
}
