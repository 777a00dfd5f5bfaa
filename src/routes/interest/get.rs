//! src/routes/interest/get.rs
use crate::dialog::DialogView;
use actix_web::{http::header::ContentType, HttpResponse};

pub async fn interest_form() -> HttpResponse {
    let view = DialogView {
        email: String::new(),
        error: None,
        is_loading: false,
        is_open: true,
    };

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_dialog(&view))
}

/// Renders the prompt as a page. A closed dialog renders an empty page.
pub fn render_dialog(view: &DialogView) -> String {
    if !view.is_open {
        return r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Thank you for your Interest</title>
</head>
<body></body>
</html>"#
            .to_string();
    }

    let error_html = match &view.error {
        Some(error) => format!(
            r#"<p class="error">{}</p>"#,
            htmlescape::encode_minimal(error)
        ),
        None => "".into(),
    };
    let email = htmlescape::encode_attribute(&view.email);
    let disabled = if view.is_loading { " disabled" } else { "" };
    let confirm_label = if view.is_loading {
        "Saving..."
    } else {
        "Interested"
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Thank you for your Interest</title>
</head>
<body>
    <dialog open>
        <h2>Thank you for your Interest</h2>
        <p>Please provide your email if you are interested in receiving education material from us</p>
        <form action="/interest" method="post" novalidate>
            <label for="email">Email</label>
            <input
                id="email"
                type="email"
                placeholder="Enter your email"
                name="email"
                value="{email}"{disabled}
            >
            {error_html}
            <button type="submit" formaction="/interest/decline" formnovalidate{disabled}>Not Interested</button>
            <button type="submit"{disabled}>{confirm_label}</button>
        </form>
    </dialog>
</body>
</html>"#
    )
}
