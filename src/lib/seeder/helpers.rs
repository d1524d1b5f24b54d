use std::{collections::HashMap, error::Error, fs::File, io::BufReader};

use log::{debug, info, warn};

use crate::seeder::{
    fixtures,
    models::{Args, Config, SeedData, UserSeed},
};

pub fn log_all_seeds(seed: &SeedData) -> () {
    for user in seed.users.iter() {
        debug!(
            "Seeding user {} <{}> with role {}",
            user.name, user.email, user.password
        );
    }
    for class in seed.classes.iter() {
        debug!(
            "Seeding class {} of {} with {} students",
            class.name,
            class.teacher,
            class.students.len()
        );
    }
    for subject in seed.subjects.iter() {
        debug!(
            "Seeding subject {} ({}) of {}",
            subject.name, subject.long_name, subject.teacher
        );
    }
}

/// Returns the seed set for the run: the fixtures.json given on the command
/// line, or the built-in school when no file was given.
pub fn get_fixtures(args: &Args, config: &Config) -> Result<SeedData, Box<dyn Error>> {
    let seed = match &args.fixtures_json_path {
        Some(path) => {
            info!(
                "Reading fixtures from {}",
                std::path::absolute(path)?.display()
            );
            let fixtures_file = BufReader::new(File::open(path)?);
            serde_json::from_reader(fixtures_file)?
        }
        None => fixtures::default_fixtures(config),
    };
    log_all_seeds(&seed);
    Ok(seed)
}

/// Builds the natural key to backend id map in one pass over a listing.
pub fn index_listing<R>(records: &[R], key: impl Fn(&R) -> (&str, i64)) -> HashMap<String, i64> {
    records
        .iter()
        .map(|record| {
            let (natural_key, id) = key(record);
            (natural_key.to_owned(), id)
        })
        .collect()
}

/// Looks up every fixture in an indexed listing. A fixture the backend did
/// not list is reported and left out of the returned map, so every later
/// call meets an explicit miss instead of an empty id.
pub fn resolve_ids<S>(
    seeds: &[S],
    index: &HashMap<String, i64>,
    key: impl Fn(&S) -> &str,
    kind: &str,
) -> HashMap<String, i64> {
    let mut resolved = HashMap::new();
    for seed in seeds.iter() {
        let natural_key = key(seed);
        match index.get(natural_key) {
            Some(&id) => {
                resolved.insert(natural_key.to_owned(), id);
            }
            None => warn!("No {} in the backend listing matched {}", kind, natural_key),
        }
    }
    resolved
}

/// Finds the backend id of the teacher owning a class or subject. Only users
/// seeded with the "teacher" role count, even when another user has the email.
pub fn find_teacher_id(
    users: &[UserSeed],
    user_ids: &HashMap<String, i64>,
    teacher_email: &str,
) -> Option<i64> {
    users
        .iter()
        .find(|user| user.password == "teacher" && user.email == teacher_email)
        .and_then(|user| user_ids.get(&user.email).copied())
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
