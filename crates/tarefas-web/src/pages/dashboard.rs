//! Dashboard: create form plus the signed-in user's task list

use crate::components::{TaskCard, Textarea};
use leptos::prelude::*;
use tarefas_types::Task;

pub const TITLE: &str = "Meu painel de tarefas";

/// A task ready for display, with its share link when public
pub struct DashboardItem {
    pub task: Task,
    pub share_url: Option<String>,
}

#[component]
pub fn DashboardPage(items: Vec<DashboardItem>) -> impl IntoView {
    let empty = items.is_empty().then(|| {
        view! { <span class="empty">"Nenhuma tarefa cadastrada..."</span> }
    });

    view! {
        <div class="container">
            <main class="main">
                <section class="content">
                    <div class="content-form">
                        <h1 class="title">"Qual sua tarefa?"</h1>
                        <form method="post" action="/dashboard/tasks">
                            <Textarea name="content" placeholder="Digite sua tarefa..." />
                            <div class="checkbox-area">
                                <label>
                                    <input class="checkbox" type="checkbox" name="public" />
                                    " Deixar tarefa pública?"
                                </label>
                            </div>
                            <button class="button" type="submit">"Registrar Tarefa"</button>
                        </form>
                    </div>
                </section>

                <section class="task-container">
                    <h1>"Minhas tarefas"</h1>
                    <div id="task-list">
                        {empty}
                        {items
                            .into_iter()
                            .map(|item| view! { <TaskCard task=item.task share_url=item.share_url /> })
                            .collect_view()}
                    </div>
                </section>
            </main>
            <script src="/assets/dashboard.js"></script>
        </div>
    }
}
