//! Fixed choice lists offered by the intake form.

pub const DEGREES: &[&str] = &["BACHELOR OF ENGINEERING", "BACHELOR OF TECHNOLOGY"];

pub const DEPARTMENTS: &[&str] = &[
    "COMPUTER SCIENCE AND ENGINEERING",
    "INFORMATION TECHNOLOGY",
    "ELECTRONICS AND COMMUNICATION ENGINEERING",
];

pub const DESIGNATIONS: &[&str] = &["Assistant Professor", "Associate Professor", "Professor"];

/// Department of the HoD and supervisor, in title case.
pub const FACULTY_DEPARTMENTS: &[&str] = &[
    "Computer Science and Engineering",
    "Artificial Intelligence And Data Science",
    "Information Technology",
    "Electronics And Communication Engineering",
    "Electrical And Electronics Engineering",
    "Bio-Technology",
    "Mechanical Engineering",
    "Mechatronics Engineering",
    "Civil Engineering",
];
