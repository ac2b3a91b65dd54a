//! User page handlers.
//!
//! ```text
//! GET  /                        list page
//! POST /users/add               create from form fields, redirect to /
//! POST /users/{id}/delete       delete, redirect to /
//! GET  /users/{id}/edit         pre-filled edit form
//! POST /users/{id}/update       field-wise partial update, redirect to /
//! ```
//!
//! Every mutation redirects back to the list page; missing records surface
//! as 404 via [`PageError`](super::error::PageError).

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use tracing::debug;

use crate::domain::{DomainError, UserId};
use crate::inbound::http::PageResult;
use crate::inbound::http::forms::UserForm;
use crate::inbound::http::pages;
use crate::inbound::http::state::HttpState;

/// 302 redirect back to the list page, shared by all mutations.
fn redirect_to_index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// Parse a path id, mapping non-positive values to not-found.
fn parse_user_id(raw: i32) -> Result<UserId, DomainError> {
    UserId::new(raw).map_err(|_| DomainError::not_found(format!("no user with id {raw}")))
}

/// List all users.
#[get("/")]
pub async fn list_users(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let users = state.users.list().await?;
    Ok(HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(pages::list_page(&users)))
}

/// Create a user from the submitted form fields.
///
/// A form with a missing or empty field is ignored: the operation is a
/// no-op but still redirects to the list page, so the browser flow never
/// breaks on an empty submit.
#[post("/users/add")]
pub async fn add_user(
    state: web::Data<HttpState>,
    form: web::Form<UserForm>,
) -> PageResult<HttpResponse> {
    match form.into_inner().try_into_draft() {
        Ok(draft) => {
            state.users.add(draft).await?;
        }
        Err(err) => {
            debug!(error = %err, "ignoring invalid add-user form");
        }
    }
    Ok(redirect_to_index())
}

/// Delete a user; 404 when the id is unknown.
#[post("/users/{user_id}/delete")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> PageResult<HttpResponse> {
    let id = parse_user_id(path.into_inner())?;
    state.users.remove(id).await?;
    Ok(redirect_to_index())
}

/// Show the edit form pre-filled with the stored values; 404 when unknown.
#[get("/users/{user_id}/edit")]
pub async fn edit_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> PageResult<HttpResponse> {
    let id = parse_user_id(path.into_inner())?;
    let user = state.users.get(id).await?;
    Ok(HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(pages::edit_page(&user)))
}

/// Apply a field-wise partial update; 404 when the id is unknown.
///
/// Fields absent from the form keep their stored values.
#[post("/users/{user_id}/update")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    form: web::Form<UserForm>,
) -> PageResult<HttpResponse> {
    let id = parse_user_id(path.into_inner())?;
    state.users.update(id, form.into_inner().into_changes()).await?;
    Ok(redirect_to_index())
}
