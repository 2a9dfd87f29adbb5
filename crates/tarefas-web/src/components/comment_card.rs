use leptos::prelude::*;
use tarefas_types::Comment;

/// `can_delete` is true when the viewer wrote the comment
#[component]
pub fn CommentCard(comment: Comment, can_delete: bool) -> impl IntoView {
    let delete_action = format!(
        "/task/{}/comments/{}/delete",
        comment.task_id, comment.id
    );

    let delete = can_delete.then(|| {
        view! {
            <form method="post" action=delete_action>
                <button class="button-trash" type="submit" title="Excluir comentário">"Excluir"</button>
            </form>
        }
    });

    view! {
        <article class="comment">
            <div class="head-comment">
                <label class="comments-label">{comment.name}</label>
                {delete}
            </div>
            <p>{comment.content}</p>
        </article>
    }
}
