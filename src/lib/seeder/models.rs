use std::path::PathBuf;

use clap::{command, Parser};
use serde::{Deserialize, Serialize};

pub mod listing_model;

/// A model for describing one seeded account.
/// Consists of:
/// 1. Display name, shown by the school interface
/// 2. Password, which in the seed set doubles as the role name
/// 3. Email address, the natural key the backend lists the account under
#[derive(Debug, Deserialize, Serialize)]
pub struct UserSeed {
    pub name: String,
    pub password: String,
    pub email: String,
}

/// A model for describing one seeded class.
/// Consists of:
/// 1. Class name, the natural key the backend lists the class under
/// 2. Emails of member students, enrolled in declaration order
/// 3. Email of the teacher owning the class
#[derive(Debug, Deserialize, Serialize)]
pub struct ClassSeed {
    pub name: String,
    pub students: Vec<String>,
    pub teacher: String,
}

/// Members of a subject: either a whole class by name, or an explicit list
/// of student emails. Mirrors the two shapes the `students` field may carry
/// in a fixtures.json file.
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SubjectMembers {
    Class(String),
    Students(Vec<String>),
}

impl SubjectMembers {
    pub fn bound_class(&self) -> Option<&str> {
        match self {
            SubjectMembers::Class(name) => Some(name),
            SubjectMembers::Students(_) => None,
        }
    }
}

/// A model for describing one seeded subject.
/// Consists of:
/// 1. Short subject code, the natural key the backend lists the subject under
/// 2. Long display name
/// 3. Members, either a bound class name or explicit student emails
/// 4. Email of the teacher owning the subject
/// 5. Graded flag (class period subjects are not graded)
#[derive(Debug, Deserialize, Serialize)]
pub struct SubjectSeed {
    pub name: String,
    pub long_name: String,
    pub students: SubjectMembers,
    pub teacher: String,
    pub is_graded: bool,
}

/// The whole fixture set pushed to the backend in one run.
#[derive(Debug, Deserialize, Serialize)]
pub struct SeedData {
    pub users: Vec<UserSeed>,
    pub classes: Vec<ClassSeed>,
    pub subjects: Vec<SubjectSeed>,
}

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the backend and school parameters.
/// 2. Optional path to a fixtures.json, that replaces the built-in seed set.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "FILE")]
    pub fixtures_json_path: Option<PathBuf>,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Base URL of the MeetPlan backend, with a trailing slash
/// 2. Domain appended to every built-in fixture email
/// 3. School year label stamped on every created class
#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub email_domain: String,
    pub school_year: String,
}
