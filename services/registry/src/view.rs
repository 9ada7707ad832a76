//! Askama page templates (`templates/*.html`). Interpolated values are
//! HTML-escaped by askama.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::domain::types::Registration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Create,
    Update,
    Delete,
}

impl Page {
    fn title(self) -> &'static str {
        match self {
            Self::Index => "Registrations",
            Self::Create => "Create User",
            Self::Update => "Update Email",
            Self::Delete => "Delete User",
        }
    }
}

pub struct FormInput {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
}

const CREATE_INPUTS: &[FormInput] = &[
    FormInput { name: "email", label: "Email", kind: "email" },
    FormInput { name: "name", label: "Name", kind: "text" },
    FormInput { name: "password", label: "Password", kind: "password" },
];
const UPDATE_INPUTS: &[FormInput] = &[
    FormInput { name: "cemail", label: "Current Email", kind: "email" },
    FormInput { name: "nemail", label: "New Email", kind: "email" },
];
const DELETE_INPUTS: &[FormInput] = &[FormInput { name: "del_id", label: "ID", kind: "text" }];

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    title: &'a str,
    message: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "form.html")]
struct FormPage<'a> {
    title: &'a str,
    message: Option<&'a str>,
    action: &'a str,
    inputs: &'a [FormInput],
    submit: &'a str,
}

#[derive(Template)]
#[template(path = "all.html")]
struct ListPage<'a> {
    title: &'a str,
    message: Option<&'a str>,
    registrations: &'a [Registration],
}

/// HTML for `page`, with the outcome message of the request if there is one.
pub fn page_html(page: Page, message: Option<&str>) -> Result<String, askama::Error> {
    let title = page.title();
    let (action, inputs, submit) = match page {
        Page::Index => return IndexPage { title, message }.render(),
        Page::Create => ("/create/", CREATE_INPUTS, "Create"),
        Page::Update => ("/update/", UPDATE_INPUTS, "Update"),
        Page::Delete => ("/delete/", DELETE_INPUTS, "Delete"),
    };
    FormPage {
        title,
        message,
        action,
        inputs,
        submit,
    }
    .render()
}

/// HTML table of every registration, in the order given. Passwords are not shown.
pub fn list_html(registrations: &[Registration]) -> Result<String, askama::Error> {
    ListPage {
        title: "All Users",
        message: None,
        registrations,
    }
    .render()
}

pub fn render(page: Page, status: StatusCode, message: Option<&str>) -> Response {
    respond(status, page_html(page, message))
}

pub fn render_list(status: StatusCode, registrations: &[Registration]) -> Response {
    respond(status, list_html(registrations))
}

fn respond(status: StatusCode, html: Result<String, askama::Error>) -> Response {
    match html {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
