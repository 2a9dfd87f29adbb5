//! Server-rendered pages

pub mod dashboard;
pub mod home;
pub mod task;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use task::TaskPage;

use crate::components::Header;
use axum::response::Html;
use leptos::prelude::*;
use tarefas_types::UserIdentity;

/// Wrap a page body in the HTML document shell
pub fn render_document(
    title: &'static str,
    user: Option<UserIdentity>,
    body: impl IntoView,
) -> Html<String> {
    let body = Owner::new().with(|| {
        view! {
            <Header user=user />
            {body}
        }
        .to_html()
    });

    Html(format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"pt-BR\">",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{}</title>",
            "<link rel=\"stylesheet\" href=\"/assets/style.css\">",
            "</head>",
            "<body>{}</body>",
            "</html>"
        ),
        title, body
    ))
}
