//! Askama templates for the users page

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::SecondsFormat;

use super::control::PaginationControl;
use crate::users::User;

/// Table row with display-ready values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub email: String,
    pub updated_at: String,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            phone: user.phone,
            email: user.email,
            updated_at: user.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// `GET /` page: either the error banner or the table with pagination
#[derive(Template)]
#[template(path = "users/index.html")]
pub struct IndexTemplate {
    pub error_status: Option<u16>,
    pub rows: Vec<UserRow>,
    pub pagination: Option<PaginationControl>,
}

impl IndexTemplate {
    pub fn listing(users: Vec<User>, control: PaginationControl) -> Self {
        Self {
            error_status: None,
            rows: users.into_iter().map(UserRow::from).collect(),
            pagination: Some(control),
        }
    }

    pub fn failed(status: u16) -> Self {
        Self {
            error_status: Some(status),
            rows: Vec::new(),
            pagination: None,
        }
    }
}

/// Renders a template as an HTML response
///
/// Render failures are logged and turned into a bare 500.
pub struct HtmlTemplate<T: Template> {
    template: T,
}

impl<T: Template> HtmlTemplate<T> {
    #[must_use]
    pub fn new(template: T) -> Self {
        Self { template }
    }
}

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Template rendering error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<!-- Template error -->".to_string()),
                )
                    .into_response()
            }
        }
    }
}
