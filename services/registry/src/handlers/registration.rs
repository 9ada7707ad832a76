use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::error::RegistryError;
use crate::state::AppState;
use crate::usecase::registration::{
    CreateRegistrationInput, CreateRegistrationUseCase, DeleteRegistrationInput,
    DeleteRegistrationUseCase, ListRegistrationsUseCase, UpdateEmailInput, UpdateEmailUseCase,
};
use crate::view::{self, Page};

pub const CREATED: &str = "User Created successfully";
pub const DUPLICATE: &str = "Email or Name already on record";
pub const UPDATED: &str = "Update Successful";
pub const EMAIL_NOT_FOUND: &str = "Email not found or on file";
pub const DELETED: &str = "User deleted successfully";
pub const ID_NOT_FOUND: &str = "ID not found";
pub const INVALID_FORM: &str = "Invalid form submission";

/// Render `page` with the outcome of a form submission.
///
/// Missing fields report their own message. Store errors report the route's
/// `failure` message; internal errors are logged first so the real cause is
/// not lost behind it.
fn render_outcome(
    page: Page,
    result: Result<(), RegistryError>,
    success: &str,
    failure: &str,
) -> Response {
    let err = match result {
        Ok(()) => return view::render(page, StatusCode::OK, Some(success)),
        Err(err) => err,
    };
    let message = match &err {
        RegistryError::MissingField(_) => err.to_string(),
        RegistryError::DuplicateRecord | RegistryError::RegistrationNotFound => failure.to_owned(),
        RegistryError::Internal(e) => {
            tracing::error!(error = %e, kind = err.kind(), "internal error");
            failure.to_owned()
        }
    };
    view::render(page, err.status(), Some(&message))
}

/// Unreadable submissions (wrong content type, repeated fields) still get the
/// input page, with the rejection's status.
fn render_rejection(page: Page, rejection: FormRejection) -> Response {
    tracing::debug!(error = %rejection, "form submission rejected");
    view::render(page, rejection.status(), Some(INVALID_FORM))
}

// ── /create/ ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRegistrationForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

pub async fn create_form() -> Response {
    view::render(Page::Create, StatusCode::OK, None)
}

pub async fn create_registration(
    State(state): State<AppState>,
    form: Result<Form<CreateRegistrationForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return render_rejection(Page::Create, rejection),
    };
    let usecase = CreateRegistrationUseCase {
        repo: state.registration_repo(),
        audit: state.audit_log(),
    };
    let result = usecase
        .execute(CreateRegistrationInput {
            email: form.email,
            name: form.name,
            password: form.password,
        })
        .await
        .map(|_| ());
    render_outcome(Page::Create, result, CREATED, DUPLICATE)
}

// ── GET /all/ ────────────────────────────────────────────────────────────────

pub async fn list_registrations(State(state): State<AppState>) -> Response {
    let usecase = ListRegistrationsUseCase {
        repo: state.registration_repo(),
    };
    match usecase.execute().await {
        Ok(registrations) => view::render_list(StatusCode::OK, &registrations),
        Err(err) => {
            tracing::error!(error = %err, kind = err.kind(), "failed to list registrations");
            view::render_list(err.status(), &[])
        }
    }
}

// ── /update/ ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateEmailForm {
    #[serde(default, rename = "cemail")]
    pub current_email: String,
    #[serde(default, rename = "nemail")]
    pub new_email: String,
}

pub async fn update_form() -> Response {
    view::render(Page::Update, StatusCode::OK, None)
}

pub async fn update_email(
    State(state): State<AppState>,
    form: Result<Form<UpdateEmailForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return render_rejection(Page::Update, rejection),
    };
    let usecase = UpdateEmailUseCase {
        repo: state.registration_repo(),
    };
    let result = usecase
        .execute(UpdateEmailInput {
            current_email: form.current_email,
            new_email: form.new_email,
        })
        .await;
    render_outcome(Page::Update, result, UPDATED, EMAIL_NOT_FOUND)
}

// ── /delete/ ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeleteRegistrationForm {
    #[serde(default)]
    pub del_id: String,
}

pub async fn delete_form() -> Response {
    view::render(Page::Delete, StatusCode::OK, None)
}

pub async fn delete_registration(
    State(state): State<AppState>,
    form: Result<Form<DeleteRegistrationForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return render_rejection(Page::Delete, rejection),
    };
    let usecase = DeleteRegistrationUseCase {
        repo: state.registration_repo(),
    };
    let result = usecase
        .execute(DeleteRegistrationInput { id: form.del_id })
        .await;
    render_outcome(Page::Delete, result, DELETED, ID_NOT_FOUND)
}
