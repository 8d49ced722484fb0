//! Project Endpoints
//!
//! CRUD against `/projects`. Task mutations are committed as a full-list
//! overwrite through `update_project_tasks`; there is no per-task route.

use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;

use super::{api_base, decode, expect_ok, ApiError};
use crate::models::{Project, Task};
use crate::session::Session;

/// Attach the bearer credential while one is held
fn authorized(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    match session.token_untracked() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[derive(Serialize)]
struct CreateProjectBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct TasksBody<'a> {
    tasks: &'a [Task],
}

#[derive(Serialize)]
struct CompletedBody {
    #[serde(rename = "isCompleted")]
    is_completed: bool,
}

pub async fn list_projects(session: &Session) -> Result<Vec<Project>, ApiError> {
    let resp = authorized(Request::get(&format!("{}/projects", api_base())), session)
        .send()
        .await?;
    decode(resp).await
}

pub async fn create_project(session: &Session, name: &str) -> Result<Project, ApiError> {
    let resp = authorized(Request::post(&format!("{}/projects", api_base())), session)
        .json(&CreateProjectBody { name })?
        .send()
        .await?;
    decode(resp).await
}

/// Replace the project's entire task sequence in one request
pub async fn update_project_tasks(session: &Session, project_id: &str, tasks: &[Task]) -> Result<Project, ApiError> {
    let resp = authorized(Request::put(&format!("{}/projects/{}", api_base(), project_id)), session)
        .json(&TasksBody { tasks })?
        .send()
        .await?;
    decode(resp).await
}

/// Partial update touching `isCompleted` only
pub async fn set_project_completed(session: &Session, project_id: &str, completed: bool) -> Result<Project, ApiError> {
    let resp = authorized(Request::put(&format!("{}/projects/{}", api_base(), project_id)), session)
        .json(&CompletedBody { is_completed: completed })?
        .send()
        .await?;
    decode(resp).await
}

pub async fn delete_project(session: &Session, project_id: &str) -> Result<(), ApiError> {
    let resp = authorized(Request::delete(&format!("{}/projects/{}", api_base(), project_id)), session)
        .send()
        .await?;
    expect_ok(resp).await
}
