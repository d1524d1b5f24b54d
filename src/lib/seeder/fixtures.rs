//! The built-in seed set, modelled on a small Slovenian primary school: two
//! eighth and two ninth grade classes, one teacher per subject area, nine
//! students and a few parents. Emails take their domain from the config.

use super::models::{ClassSeed, Config, SeedData, SubjectMembers, SubjectSeed, UserSeed};

fn user(name: &str, role: &str, email: String) -> UserSeed {
    UserSeed {
        name: name.to_owned(),
        password: role.to_owned(),
        email,
    }
}

fn class(name: &str, students: &[String], teacher: String) -> ClassSeed {
    ClassSeed {
        name: name.to_owned(),
        students: students.to_vec(),
        teacher,
    }
}

fn class_subject(
    name: &str,
    long_name: &str,
    class_name: &str,
    teacher: String,
    is_graded: bool,
) -> SubjectSeed {
    SubjectSeed {
        name: name.to_owned(),
        long_name: long_name.to_owned(),
        students: SubjectMembers::Class(class_name.to_owned()),
        teacher,
        is_graded,
    }
}

fn group_subject(name: &str, long_name: &str, students: &[String], teacher: String) -> SubjectSeed {
    SubjectSeed {
        name: name.to_owned(),
        long_name: long_name.to_owned(),
        students: SubjectMembers::Students(students.to_vec()),
        teacher,
        is_graded: true,
    }
}

pub fn default_fixtures(config: &Config) -> SeedData {
    let at = |local: &str| format!("{}@{}", local, config.email_domain);

    /* The first user must stay the administrator, the whole run logs in as it */
    let users = vec![
        user("Administrator", "admin", at("admin")),
        user("Ravnatelj", "principal", at("principal")),
        user(
            "Pomočnik ravnatelja",
            "principal assistant",
            at("principalassistant"),
        ),
        user(
            "Šolski psiholog",
            "school psychologist",
            at("schoolpsychologist"),
        ),
        user("Organizator šolske prehrane", "food", at("food")),
        user("Učitelj jezikov 1", "teacher", at("lang1")),
        user("Učitelj jezikov 2", "teacher", at("lang2")),
        user("Učitelj jezikov 3", "teacher", at("lang3")),
        user("Učitelj matematike", "teacher", at("math")),
        user("Učitelj biologije", "teacher", at("biology")),
        user("Učitelj kemije", "teacher", at("chemistry")),
        user("Učitelj fizike", "teacher", at("physics")),
        user("Učitelj naravoslovnih predmetov", "teacher", at("naturalsci")),
        user("Učitelj geografije", "teacher", at("geography")),
        user("Učitelj zgodovine", "teacher", at("history")),
        user("Učitelj likovne umetnosti", "teacher", at("art")),
        user("Učitelj glasbe", "teacher", at("music")),
        user("Učitelj športa", "teacher", at("sports")),
        user("Učenec 1", "student", at("student1")),
        user("Učenec 2", "student", at("student2")),
        user("Učenec 3", "student", at("student3")),
        user("Učenec 4", "student", at("student4")),
        user("Učenec 5", "student", at("student5")),
        user("Učenec 6", "student", at("student6")),
        user("Učenec 7", "student", at("student7")),
        user("Učenec 8", "student", at("student8")),
        user("Učenec 9", "student", at("student9")),
        user("Starš 1", "parent", at("parent1")),
        user("Starš 2", "parent", at("parent2")),
        user("Starš 3", "parent", at("parent3")),
        user("Starš 4", "parent", at("parent4")),
    ];

    let classes = vec![
        class("8.a", &[at("student1"), at("student2")], at("lang1")),
        class("8.b", &[at("student3"), at("student4")], at("biology")),
        class("9.a", &[at("student5"), at("student6")], at("chemistry")),
        class(
            "9.b",
            &[at("student7"), at("student8"), at("student9")],
            at("art"),
        ),
    ];

    let subjects = vec![
        /* 8.a */
        class_subject("RU8a", "razredna ura", "8.a", at("lang1"), false),
        class_subject("LUM8a", "likovna umetnost", "8.a", at("art"), true),
        class_subject("GUM8a", "glasbena umetnost", "8.a", at("music"), true),
        class_subject("GEO8a", "geografija", "8.a", at("geography"), true),
        class_subject("ZGO8a", "zgodovina", "8.a", at("history"), true),
        class_subject(
            "DKE8a",
            "domovinska in državljanska kultura ter etika",
            "8.a",
            at("geography"),
            true,
        ),
        class_subject("FIZ8a", "fizika", "8.a", at("physics"), true),
        class_subject("KEM8a", "kemija", "8.a", at("chemistry"), true),
        class_subject("BIO8a", "biologija", "8.a", at("biology"), true),
        class_subject(
            "TIT8a",
            "tehnika in tehnologija",
            "8.a",
            at("naturalsci"),
            true,
        ),
        class_subject("ŠPO8a", "šport", "8.a", at("sports"), true),
        /* 8.b */
        class_subject("RU8b", "razredna ura", "8.b", at("biology"), false),
        class_subject("LUM8b", "likovna umetnost", "8.b", at("art"), true),
        class_subject("GUM8b", "glasbena umetnost", "8.b", at("music"), true),
        class_subject("GEO8b", "geografija", "8.b", at("geography"), true),
        class_subject("ZGO8b", "zgodovina", "8.b", at("history"), true),
        class_subject(
            "DKE8b",
            "domovinska in državljanska kultura ter etika",
            "8.b",
            at("history"),
            true,
        ),
        class_subject("FIZ8b", "fizika", "8.b", at("physics"), true),
        class_subject("KEM8b", "kemija", "8.b", at("chemistry"), true),
        class_subject("BIO8b", "biologija", "8.b", at("biology"), true),
        class_subject(
            "TIT8b",
            "tehnika in tehnologija",
            "8.b",
            at("naturalsci"),
            true,
        ),
        class_subject("ŠPO8b", "šport", "8.b", at("sports"), true),
        /* Mešane skupine 8. razreda */
        group_subject(
            "MAT8a",
            "matematika",
            &[at("student1"), at("student3")],
            at("math"),
        ),
        group_subject(
            "MAT8b",
            "matematika",
            &[at("student2"), at("student4")],
            at("naturalsci"),
        ),
        group_subject(
            "SLJ8a",
            "slovenščina",
            &[at("student1"), at("student3")],
            at("lang2"),
        ),
        group_subject(
            "SLJ8b",
            "slovenščina",
            &[at("student2"), at("student4")],
            at("lang3"),
        ),
        group_subject(
            "TJA8a",
            "angleščina",
            &[at("student1"), at("student3")],
            at("lang1"),
        ),
        group_subject(
            "TJA8b",
            "angleščina",
            &[at("student2"), at("student4")],
            at("lang3"),
        ),
        /* 9.a */
        class_subject("RU9a", "razredna ura", "9.a", at("chemistry"), false),
        class_subject("LUM9a", "likovna umetnost", "9.a", at("art"), true),
        class_subject("GUM9a", "glasbena umetnost", "9.a", at("music"), true),
        class_subject("GEO9a", "geografija", "9.a", at("geography"), true),
        class_subject("ZGO9a", "zgodovina", "9.a", at("history"), true),
        class_subject("FIZ9a", "fizika", "9.a", at("physics"), true),
        class_subject("KEM9a", "kemija", "9.a", at("chemistry"), true),
        class_subject("BIO9a", "biologija", "9.a", at("biology"), true),
        class_subject("ŠPO9a", "šport", "9.a", at("sports"), true),
        /* 9.b */
        class_subject("RU9b", "razredna ura", "9.b", at("art"), false),
        class_subject("LUM9b", "likovna umetnost", "9.b", at("art"), true),
        class_subject("GUM9b", "glasbena umetnost", "9.b", at("music"), true),
        class_subject("GEO9b", "geografija", "9.b", at("geography"), true),
        class_subject("ZGO9b", "zgodovina", "9.b", at("history"), true),
        class_subject("FIZ9b", "fizika", "9.b", at("physics"), true),
        class_subject("KEM9b", "kemija", "9.b", at("chemistry"), true),
        class_subject("BIO9b", "biologija", "9.b", at("biology"), true),
        class_subject("ŠPO9b", "šport", "9.b", at("sports"), true),
        /* Mešane skupine 9. razreda */
        group_subject(
            "MAT9a",
            "matematika",
            &[at("student5"), at("student9")],
            at("math"),
        ),
        group_subject(
            "MAT9b",
            "matematika",
            &[at("student6"), at("student7"), at("student8")],
            at("naturalsci"),
        ),
        group_subject(
            "SLJ9a",
            "slovenščina",
            &[at("student5"), at("student9")],
            at("lang2"),
        ),
        group_subject(
            "SLJ9b",
            "slovenščina",
            &[at("student6"), at("student7"), at("student8")],
            at("lang3"),
        ),
        group_subject(
            "TJA9a",
            "angleščina",
            &[at("student5"), at("student9")],
            at("lang1"),
        ),
        group_subject(
            "TJA9b",
            "angleščina",
            &[at("student6"), at("student7"), at("student8")],
            at("lang3"),
        ),
        /* Neobvezni izbirni predmeti */
        group_subject(
            "NEM8",
            "nemščina",
            &[at("student1"), at("student4")],
            at("lang1"),
        ),
        group_subject(
            "NEM9",
            "nemščina",
            &[
                at("student5"),
                at("student6"),
                at("student8"),
                at("student9"),
            ],
            at("lang1"),
        ),
        group_subject(
            "MME",
            "multimedija",
            &[at("student1"), at("student2"), at("student3")],
            at("physics"),
        ),
        group_subject(
            "ROM",
            "računalniška omrežja",
            &[
                at("student5"),
                at("student6"),
                at("student7"),
                at("student9"),
            ],
            at("naturalsci"),
        ),
    ];

    SeedData {
        users,
        classes,
        subjects,
    }
}
