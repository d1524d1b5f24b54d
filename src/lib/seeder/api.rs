use std::error::Error;

use reqwest::{Client, StatusCode};

use super::models::{
    listing_model::{ApiResponse, ClassRecord, SubjectRecord, TokenData, UserRecord},
    ClassSeed, Config, SubjectSeed, UserSeed,
};

/* Realization hours and location defaults the backend requires on subject
creation. The seed set does not model either. */
const REALIZATION: &str = "160";
const LOCATION: &str = "50";

/// Bearer token obtained from the login endpoint. Carried explicitly into
/// every authenticated call instead of being mutated onto the shared client.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
}

/// Status and body of one backend call, enough for the per-item report lines.
#[derive(Debug)]
pub struct CallOutcome {
    pub status: StatusCode,
    pub body: String,
}

impl CallOutcome {
    async fn from_response(response: reqwest::Response) -> Result<CallOutcome, Box<dyn Error>> {
        let status = response.status();
        let body = response.text().await?;
        Ok(CallOutcome { status, body })
    }
}

/// A trait, necessary for every entity that will carry the seed calls to the
/// school backend.
#[allow(async_fn_in_trait)]
pub trait SchoolBackend {
    async fn create_user(&self, user: &UserSeed) -> Result<CallOutcome, Box<dyn Error>>;
    async fn login(&self, email: &str, password: &str) -> Result<Session, Box<dyn Error>>;
    async fn get_all_users(&self, session: &Session) -> Result<Vec<UserRecord>, Box<dyn Error>>;
    async fn update_role(
        &self,
        session: &Session,
        user_id: i64,
        role: &str,
    ) -> Result<CallOutcome, Box<dyn Error>>;
    async fn create_class(
        &self,
        session: &Session,
        teacher_id: Option<i64>,
        class: &ClassSeed,
    ) -> Result<CallOutcome, Box<dyn Error>>;
    async fn get_all_classes(&self, session: &Session) -> Result<Vec<ClassRecord>, Box<dyn Error>>;
    async fn add_user_to_class(
        &self,
        session: &Session,
        class_id: i64,
        user_id: i64,
    ) -> Result<CallOutcome, Box<dyn Error>>;
    async fn create_subject(
        &self,
        session: &Session,
        teacher_id: Option<i64>,
        subject: &SubjectSeed,
    ) -> Result<CallOutcome, Box<dyn Error>>;
    async fn get_all_subjects(
        &self,
        session: &Session,
    ) -> Result<Vec<SubjectRecord>, Box<dyn Error>>;
    async fn add_user_to_subject(
        &self,
        session: &Session,
        subject_id: i64,
        user_id: i64,
    ) -> Result<CallOutcome, Box<dyn Error>>;
}

/// Allows to reach a real MeetPlan backend over HTTP, reusing one Client for
/// every call of the run.
pub struct HttpBackend {
    client: Client,
    config: Config,
}

impl HttpBackend {
    pub fn new(client: Client, config: Config) -> HttpBackend {
        HttpBackend { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

impl SchoolBackend for HttpBackend {
    async fn create_user(&self, user: &UserSeed) -> Result<CallOutcome, Box<dyn Error>> {
        let response = self
            .client
            .post(self.url("user/new"))
            .form(&[
                ("email", user.email.as_str()),
                ("pass", user.password.as_str()),
                ("name", user.name.as_str()),
            ])
            .send()
            .await?;
        CallOutcome::from_response(response).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, Box<dyn Error>> {
        let response = self
            .client
            .post(self.url("user/login"))
            .form(&[("email", email), ("pass", password)])
            .send()
            .await?;
        let payload: ApiResponse<TokenData> = response.json().await?;
        Ok(Session {
            token: payload.data.token,
        })
    }

    async fn get_all_users(&self, session: &Session) -> Result<Vec<UserRecord>, Box<dyn Error>> {
        let response = self
            .client
            .get(self.url("users/get"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        let payload: ApiResponse<Vec<UserRecord>> = response.json().await?;
        Ok(payload.data)
    }

    async fn update_role(
        &self,
        session: &Session,
        user_id: i64,
        role: &str,
    ) -> Result<CallOutcome, Box<dyn Error>> {
        let response = self
            .client
            .post(self.url(&format!("user/role/update/{}", user_id)))
            .bearer_auth(&session.token)
            .form(&[("role", role)])
            .send()
            .await?;
        CallOutcome::from_response(response).await
    }

    async fn create_class(
        &self,
        session: &Session,
        teacher_id: Option<i64>,
        class: &ClassSeed,
    ) -> Result<CallOutcome, Box<dyn Error>> {
        let teacher_id = teacher_id.map(|id| id.to_string()).unwrap_or_default();
        let response = self
            .client
            .post(self.url("class/new"))
            .bearer_auth(&session.token)
            .form(&[
                ("teacher_id", teacher_id.as_str()),
                ("name", class.name.as_str()),
                ("class_year", self.config.school_year.as_str()),
            ])
            .send()
            .await?;
        CallOutcome::from_response(response).await
    }

    async fn get_all_classes(&self, session: &Session) -> Result<Vec<ClassRecord>, Box<dyn Error>> {
        let response = self
            .client
            .get(self.url("classes/get"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        let payload: ApiResponse<Vec<ClassRecord>> = response.json().await?;
        Ok(payload.data)
    }

    async fn add_user_to_class(
        &self,
        session: &Session,
        class_id: i64,
        user_id: i64,
    ) -> Result<CallOutcome, Box<dyn Error>> {
        let response = self
            .client
            .post(self.url(&format!("class/get/{}/add_user/{}", class_id, user_id)))
            .bearer_auth(&session.token)
            .send()
            .await?;
        CallOutcome::from_response(response).await
    }

    async fn create_subject(
        &self,
        session: &Session,
        teacher_id: Option<i64>,
        subject: &SubjectSeed,
    ) -> Result<CallOutcome, Box<dyn Error>> {
        let teacher_id = teacher_id.map(|id| id.to_string()).unwrap_or_default();
        let is_graded = subject.is_graded.to_string();
        let response = self
            .client
            .post(self.url("subject/new"))
            .bearer_auth(&session.token)
            .form(&[
                ("teacher_id", teacher_id.as_str()),
                ("name", subject.name.as_str()),
                ("long_name", subject.long_name.as_str()),
                ("class_id", subject.students.bound_class().unwrap_or("")),
                ("realization", REALIZATION),
                ("is_graded", is_graded.as_str()),
                ("location", LOCATION),
            ])
            .send()
            .await?;
        CallOutcome::from_response(response).await
    }

    async fn get_all_subjects(
        &self,
        session: &Session,
    ) -> Result<Vec<SubjectRecord>, Box<dyn Error>> {
        let response = self
            .client
            .get(self.url("subjects/get"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        let payload: ApiResponse<Vec<SubjectRecord>> = response.json().await?;
        Ok(payload.data)
    }

    async fn add_user_to_subject(
        &self,
        session: &Session,
        subject_id: i64,
        user_id: i64,
    ) -> Result<CallOutcome, Box<dyn Error>> {
        let response = self
            .client
            .post(self.url(&format!("subject/get/{}/add_user/{}", subject_id, user_id)))
            .bearer_auth(&session.token)
            .send()
            .await?;
        CallOutcome::from_response(response).await
    }
}
