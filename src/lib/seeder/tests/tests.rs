use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
};

use crate::seeder::fixtures::default_fixtures;
use crate::seeder::models::{listing_model::UserRecord, Args, Config, SubjectMembers};

use super::*;

fn test_config() -> Config {
    Config {
        base_url: "http://localhost:8000/".to_owned(),
        email_domain: "testschool.si".to_owned(),
        school_year: "2022/2023".to_owned(),
    }
}

fn test_args(fixtures_json: Option<&str>) -> Args {
    Args {
        config_json_path: PathBuf::from("example.config.json"),
        fixtures_json_path: fixtures_json.map(PathBuf::from),
    }
}

#[test]
fn get_fixtures_valid_json() {
    let args = test_args(Some("tests/test.fixtures.json"));
    let seed = get_fixtures(&args, &test_config()).unwrap();

    assert_eq!(seed.users.len(), 4);
    assert_eq!(seed.users[0].name, "Administrator");
    assert_eq!(seed.users[0].password, "admin");
    assert_eq!(seed.users[0].email, "admin@testschool.si");

    assert_eq!(seed.classes.len(), 1);
    assert_eq!(seed.classes[0].name, "8.a");
    assert_eq!(seed.classes[0].teacher, "teacher1@testschool.si");
    assert_eq!(
        seed.classes[0].students,
        vec!["student1@testschool.si", "student2@testschool.si"]
    );

    /* The "students" field parses both as a bound class name and as a list */
    assert_eq!(seed.subjects.len(), 2);
    assert_eq!(seed.subjects[0].students.bound_class(), Some("8.a"));
    assert!(!seed.subjects[0].is_graded);
    assert!(
        matches!(&seed.subjects[1].students, SubjectMembers::Students(students) if students.len() == 2)
    );
    assert!(seed.subjects[1].is_graded);
}

#[test]
fn get_fixtures_builtin_when_no_file_given() {
    let seed = get_fixtures(&test_args(None), &test_config()).unwrap();
    assert_eq!(seed.users.len(), 31);
    assert_eq!(seed.classes.len(), 4);
    assert_eq!(seed.subjects.len(), 56);
    assert_eq!(seed.users[0].password, "admin");
    assert_eq!(seed.users[0].email, "admin@testschool.si");
}

#[test]
fn builtin_fixture_references_resolve() {
    let seed = default_fixtures(&test_config());

    let emails = seed
        .users
        .iter()
        .map(|user| user.email.as_str())
        .collect::<HashSet<_>>();
    let teachers = seed
        .users
        .iter()
        .filter(|user| user.password == "teacher")
        .map(|user| user.email.as_str())
        .collect::<HashSet<_>>();
    let class_names = seed
        .classes
        .iter()
        .map(|class| class.name.as_str())
        .collect::<HashSet<_>>();

    for class in seed.classes.iter() {
        assert!(
            teachers.contains(class.teacher.as_str()),
            "class {} is owned by an unknown teacher",
            class.name
        );
        for student in class.students.iter() {
            assert!(
                emails.contains(student.as_str()),
                "class {} contains an unknown student {}",
                class.name,
                student
            );
        }
    }

    for subject in seed.subjects.iter() {
        assert!(
            teachers.contains(subject.teacher.as_str()),
            "subject {} is owned by an unknown teacher",
            subject.name
        );
        match &subject.students {
            SubjectMembers::Class(name) => assert!(
                class_names.contains(name.as_str()),
                "subject {} is bound to an unknown class {}",
                subject.name,
                name
            ),
            SubjectMembers::Students(students) => {
                for student in students.iter() {
                    assert!(
                        emails.contains(student.as_str()),
                        "subject {} contains an unknown student {}",
                        subject.name,
                        student
                    );
                }
            }
        }
    }
}

#[test]
fn index_listing_builds_key_map() {
    let listing = vec![
        UserRecord {
            id: 3,
            email: "admin@testschool.si".to_owned(),
        },
        UserRecord {
            id: 7,
            email: "math@testschool.si".to_owned(),
        },
    ];
    let index = index_listing(&listing, |record| (record.email.as_str(), record.id));
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("admin@testschool.si"), Some(&3));
    assert_eq!(index.get("math@testschool.si"), Some(&7));
}

#[test]
fn resolve_ids_leaves_unlisted_seeds_out() {
    let args = test_args(Some("tests/test.fixtures.json"));
    let seed = get_fixtures(&args, &test_config()).unwrap();

    let mut index = HashMap::new();
    index.insert("admin@testschool.si".to_owned(), 1);
    index.insert("teacher1@testschool.si".to_owned(), 2);

    let resolved = resolve_ids(&seed.users, &index, |user| user.email.as_str(), "user");
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved.get("admin@testschool.si"), Some(&1));
    assert_eq!(resolved.get("teacher1@testschool.si"), Some(&2));
    assert_eq!(resolved.get("student1@testschool.si"), None);
}

#[test]
fn find_teacher_id_requires_teacher_role() {
    let args = test_args(Some("tests/test.fixtures.json"));
    let seed = get_fixtures(&args, &test_config()).unwrap();

    let mut user_ids = HashMap::new();
    for (n, user) in seed.users.iter().enumerate() {
        user_ids.insert(user.email.clone(), n as i64 + 1);
    }

    assert_eq!(
        find_teacher_id(&seed.users, &user_ids, "teacher1@testschool.si"),
        Some(2)
    );
    /* The administrator's email resolves, but its role is not "teacher" */
    assert_eq!(
        find_teacher_id(&seed.users, &user_ids, "admin@testschool.si"),
        None
    );
    assert_eq!(
        find_teacher_id(&seed.users, &user_ids, "ghost@testschool.si"),
        None
    );
}

#[test]
fn find_teacher_id_without_backend_id_gives_none() {
    let args = test_args(Some("tests/test.fixtures.json"));
    let seed = get_fixtures(&args, &test_config()).unwrap();

    /* The teacher is seeded but the listing never returned it */
    let user_ids = HashMap::new();
    assert_eq!(
        find_teacher_id(&seed.users, &user_ids, "teacher1@testschool.si"),
        None
    );
}
