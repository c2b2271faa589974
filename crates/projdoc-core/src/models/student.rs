use serde::{Deserialize, Serialize};

/// Most students a single project report lists.
pub const MAX_STUDENTS: usize = 4;

/// Rendered in place of the student summary when no entry survives filtering.
pub const UNKNOWN_STUDENTS: &str = "Unknown";

/// A (name, registration number) pair as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub registration: String,
}

impl StudentEntry {
    pub fn new(name: impl Into<String>, registration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registration: registration.into(),
        }
    }

    /// `"name registration"` with both sides trimmed, or `None` when either
    /// side is blank.
    pub fn display(&self) -> Option<String> {
        let name = self.name.trim();
        let registration = self.registration.trim();
        if name.is_empty() || registration.is_empty() {
            return None;
        }
        Some(format!("{name} {registration}"))
    }
}

/// Join students into one line: `"A 1"`, `"A 1 & B 2"`, `"A 1, B 2 & C 3"`.
///
/// Entries with a blank name or registration are skipped. Falls back to
/// [`UNKNOWN_STUDENTS`] when nothing is left.
pub fn format_students(students: &[StudentEntry]) -> String {
    let mut parts: Vec<String> = students.iter().filter_map(StudentEntry::display).collect();

    match parts.len() {
        0 => UNKNOWN_STUDENTS.to_string(),
        1 => parts.remove(0),
        _ => {
            let last = parts.pop().unwrap_or_default();
            format!("{} & {last}", parts.join(", "))
        }
    }
}
