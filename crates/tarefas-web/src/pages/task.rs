//! Public task detail with its comments

use crate::components::{CommentCard, Textarea};
use leptos::prelude::*;
use tarefas_types::{Comment, TaskDetail};

pub const TITLE: &str = "Detalhes da tarefa";

/// `viewer` is the email of the signed-in user, if any
#[component]
pub fn TaskPage(
    detail: TaskDetail,
    comments: Vec<Comment>,
    viewer: Option<String>,
) -> impl IntoView {
    let comment_action = format!("/task/{}/comments", detail.task_id);

    let submit = if viewer.is_some() {
        view! { <button class="button" type="submit">"Enviar comentário"</button> }.into_any()
    } else {
        view! {
            <button class="button" type="submit" disabled="disabled">"Enviar comentário"</button>
        }
        .into_any()
    };

    let empty = comments.is_empty().then(|| {
        view! { <span>"Nenhum comentário foi encontrado..."</span> }
    });

    let comment_list = comments
        .into_iter()
        .map(|comment| {
            let can_delete = viewer
                .as_deref()
                .is_some_and(|email| comment.is_authored_by(email));
            view! { <CommentCard comment=comment can_delete=can_delete /> }
        })
        .collect_view();

    view! {
        <div class="container">
            <main class="main">
                <h1>"Tarefa"</h1>
                <article class="task">
                    <p>{detail.content}</p>
                    <span class="created">"Criada em " {detail.created}</span>
                </article>
            </main>

            <section class="comments-container">
                <h2>"Deixar comentário"</h2>
                <form method="post" action=comment_action>
                    <Textarea name="content" placeholder="Digite seu comentário..." />
                    {submit}
                </form>
            </section>

            <section class="comments-container">
                <h2>"Todos comentários"</h2>
                {empty}
                {comment_list}
            </section>
        </div>
    }
}
