use std::{collections::HashMap, error::Error, time::Instant};

use log::{debug, info, warn};
use reqwest::StatusCode;

use super::{
    api::{SchoolBackend, Session},
    helpers::{find_teacher_id, index_listing, resolve_ids},
    models::{SeedData, SubjectMembers},
};

/// Creates every account, logs in as the first (administrator) account and
/// hands every account its role. Returns the session and the resolved user
/// ids, which every later phase needs.
pub async fn provision_users<B: SchoolBackend>(
    backend: &B,
    seed: &SeedData,
) -> Result<(Session, HashMap<String, i64>), Box<dyn Error>> {
    let tstart = Instant::now();
    for user in seed.users.iter() {
        let outcome = backend.create_user(user).await?;
        if outcome.status == StatusCode::CREATED {
            info!("User {} has been created successfully", user.name);
        } else {
            warn!("User {} creation failed: {}", user.name, outcome.body);
        }
    }
    info!("User creation has completed in {:.2?}", tstart.elapsed());

    /* From now on, we manage all our users as administrators */
    let admin = seed.users.first().ok_or("the fixture set has no users")?;
    let session = backend.login(&admin.email, &admin.password).await?;

    /* Map all backend ids to our users */
    let listing = backend.get_all_users(&session).await?;
    let user_index = index_listing(&listing, |record| (record.email.as_str(), record.id));
    let user_ids = resolve_ids(&seed.users, &user_index, |user| user.email.as_str(), "user");

    let tstart = Instant::now();
    for user in seed.users.iter() {
        let Some(&user_id) = user_ids.get(&user.email) else {
            warn!("User {} has no backend id, role update skipped", user.name);
            continue;
        };
        // Conveniently, our passwords are same as roles
        let outcome = backend.update_role(&session, user_id, &user.password).await?;
        if outcome.status == StatusCode::OK {
            info!(
                "User {}'s role has been successfully changed to {}",
                user.name, user.password
            );
        } else {
            warn!(
                "User {}'s role hasn't been changed to {}: {}",
                user.name, user.password, outcome.body
            );
        }
    }
    info!("User role changing has completed in {:.2?}", tstart.elapsed());

    Ok((session, user_ids))
}

/// Creates every class under its teacher, resolves the backend ids of the
/// new classes and enrolls every declared member student.
pub async fn build_classes<B: SchoolBackend>(
    backend: &B,
    session: &Session,
    seed: &SeedData,
    user_ids: &HashMap<String, i64>,
) -> Result<(), Box<dyn Error>> {
    let tstart = Instant::now();
    for class in seed.classes.iter() {
        let teacher_id = find_teacher_id(&seed.users, user_ids, &class.teacher);
        if teacher_id.is_none() {
            /* The backend accepts an empty teacher id, so the class is still
            created and only the assignment is reported as failed */
            warn!(
                "Teacher {} couldn't be assigned to class {}",
                class.teacher, class.name
            );
        }
        let outcome = backend.create_class(session, teacher_id, class).await?;
        if outcome.status.is_success() {
            info!("Class {} has been created successfully", class.name);
        } else {
            warn!("Class {} creation failed: {}", class.name, outcome.body);
        }
    }

    let listing = backend.get_all_classes(session).await?;
    let class_index = index_listing(&listing, |record| (record.name.as_str(), record.id));
    let class_ids = resolve_ids(&seed.classes, &class_index, |class| class.name.as_str(), "class");

    for class in seed.classes.iter() {
        let Some(&class_id) = class_ids.get(&class.name) else {
            continue;
        };
        info!("Adding users to class {} ({})", class_id, class.name);
        for student in class.students.iter() {
            let Some(&user_id) = user_ids.get(student) else {
                warn!(
                    "No user record matched student {} of class {}",
                    student, class.name
                );
                continue;
            };
            let outcome = backend.add_user_to_class(session, class_id, user_id).await?;
            if outcome.status.is_success() {
                debug!("Added {} to class {}", student, class.name);
            } else {
                warn!(
                    "Couldn't add {} to class {}: {}",
                    student, class.name, outcome.body
                );
            }
        }
    }
    info!("Class creation has completed in {:.2?}", tstart.elapsed());

    Ok(())
}

/// Creates every subject under its teacher, resolves the backend ids of the
/// new subjects and enrolls the members of every subject with an explicit
/// student list. Class scoped subjects are left alone, the backend derives
/// their members from the class binding.
pub async fn build_subjects<B: SchoolBackend>(
    backend: &B,
    session: &Session,
    seed: &SeedData,
    user_ids: &HashMap<String, i64>,
) -> Result<(), Box<dyn Error>> {
    let tstart = Instant::now();
    for subject in seed.subjects.iter() {
        let teacher_id = find_teacher_id(&seed.users, user_ids, &subject.teacher);
        if teacher_id.is_none() {
            warn!(
                "Teacher {} couldn't be assigned to subject {}",
                subject.teacher, subject.name
            );
        }
        let outcome = backend.create_subject(session, teacher_id, subject).await?;
        if outcome.status.is_success() {
            info!("Subject {} has been created successfully", subject.name);
        } else {
            warn!("Subject {} creation failed: {}", subject.name, outcome.body);
        }
    }

    let listing = backend.get_all_subjects(session).await?;
    let subject_index = index_listing(&listing, |record| (record.name.as_str(), record.id));
    let subject_ids = resolve_ids(
        &seed.subjects,
        &subject_index,
        |subject| subject.name.as_str(),
        "subject",
    );

    for subject in seed.subjects.iter() {
        let SubjectMembers::Students(students) = &subject.students else {
            continue;
        };
        let Some(&subject_id) = subject_ids.get(&subject.name) else {
            continue;
        };
        info!("Adding users to subject {} ({})", subject_id, subject.name);
        for student in students.iter() {
            let Some(&user_id) = user_ids.get(student) else {
                warn!(
                    "No user record matched student {} of subject {}",
                    student, subject.name
                );
                continue;
            };
            let outcome = backend
                .add_user_to_subject(session, subject_id, user_id)
                .await?;
            if outcome.status.is_success() {
                debug!("Added {} to subject {}", student, subject.name);
            } else {
                warn!(
                    "Couldn't add {} to subject {}: {}",
                    student, subject.name, outcome.body
                );
            }
        }
    }
    info!("Subject creation has completed in {:.2?}", tstart.elapsed());

    Ok(())
}

/// Pushes the whole seed set to the backend, phase by phase. Per item
/// failures are reported and skipped over; only transport faults and a
/// malformed login payload abort the run.
pub async fn run<B: SchoolBackend>(backend: &B, seed: &SeedData) -> Result<(), Box<dyn Error>> {
    let (session, user_ids) = provision_users(backend, seed).await?;
    build_classes(backend, &session, seed, &user_ids).await?;
    build_subjects(backend, &session, seed, &user_ids).await?;
    Ok(())
}
