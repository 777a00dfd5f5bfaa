//! src/routes/interest/post.rs
use crate::dialog::{ConfirmOutcome, EmailPromptDialog};
use crate::domain::PromptError;
use crate::navigation::PendingRedirect;
use crate::routes::{render_dialog, PromptTarget};
use crate::store::RestEmailStore;
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct FormData {
    #[serde(default)]
    email: String,
}

#[tracing::instrument(
    name = "Saving an interested email",
    skip(form, store, target),
    fields(
        request_id = %Uuid::new_v4(),
        email = %form.email
    )
)]
pub async fn confirm_interest(
    form: web::Form<FormData>,
    store: web::Data<RestEmailStore>,
    target: web::Data<PromptTarget>,
) -> HttpResponse {
    let redirect = PendingRedirect::default();
    let dialog = prompt(store.get_ref(), &redirect, &target);
    dialog.set_email(form.into_inner().email);

    match dialog.confirm().await {
        ConfirmOutcome::Navigated => see_other(&redirect, &target),
        ConfirmOutcome::Rejected(e) => HttpResponse::build(status_for(e))
            .content_type(ContentType::html())
            .body(render_dialog(&dialog.view())),
        ConfirmOutcome::Ignored => HttpResponse::Conflict().finish(),
    }
}

#[tracing::instrument(
    name = "Declining the email prompt",
    skip(store, target),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn decline_interest(
    store: web::Data<RestEmailStore>,
    target: web::Data<PromptTarget>,
) -> HttpResponse {
    let redirect = PendingRedirect::default();
    let dialog = prompt(store.get_ref(), &redirect, &target);

    dialog.decline();
    see_other(&redirect, &target)
}

fn prompt<'a>(
    store: &'a RestEmailStore,
    redirect: &'a PendingRedirect,
    target: &PromptTarget,
) -> EmailPromptDialog<&'a RestEmailStore, &'a PendingRedirect> {
    EmailPromptDialog::new(store, redirect)
        .with_table(target.table.as_str())
        .with_home_path(target.home_path.as_str())
}

fn see_other(redirect: &PendingRedirect, target: &PromptTarget) -> HttpResponse {
    let location = redirect
        .location()
        .unwrap_or_else(|| target.home_path.clone());

    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

fn status_for(e: PromptError) -> StatusCode {
    match e {
        PromptError::EmptyInput | PromptError::InvalidFormat => StatusCode::BAD_REQUEST,
        PromptError::SubmissionFailed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
