//! One entry of the dashboard task list

use leptos::prelude::*;
use tarefas_types::Task;

/// `share_url` is set for public tasks only
#[component]
pub fn TaskCard(task: Task, share_url: Option<String>) -> impl IntoView {
    let delete_action = format!("/dashboard/tasks/{}/delete", task.id);

    let tag = share_url.map(|url| {
        view! {
            <div class="tag-container">
                <label class="tag">"PÚBLICO"</label>
                <a class="share-button" href=url title="Copiar link da tarefa">"Compartilhar"</a>
            </div>
        }
    });

    let content = if task.public {
        let href = task.detail_path();
        view! {
            <a href=href>
                <p>{task.content}</p>
            </a>
        }
        .into_any()
    } else {
        view! { <p>{task.content}</p> }.into_any()
    };

    view! {
        <article class="task">
            {tag}
            <div class="task-content">
                {content}
                <form method="post" action=delete_action>
                    <button class="trash-button" type="submit" title="Excluir tarefa">"Excluir"</button>
                </form>
            </div>
        </article>
    }
}
