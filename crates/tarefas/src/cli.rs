//! Terminal output for the admin commands

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use tarefas_core::{AppConfig, StoreCounts};
use tarefas_types::{Comment, Task};

/// Format tasks as table (human) or JSON
pub fn format_task_table(tasks: &[Task], json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(tasks).unwrap_or_else(|_| "[]".to_string());
    }

    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Created").fg(Color::Cyan),
        Cell::new("Public").fg(Color::Cyan),
        Cell::new("Task").fg(Color::Cyan),
    ]);

    for task in tasks {
        let created = task.created.format("%Y-%m-%d %H:%M").to_string();
        let public = if task.public { "yes" } else { "no" };
        let content = truncate(&single_line(&task.content), 60);

        table.add_row(Row::from(vec![task.id.as_str(), &created, public, &content]));
    }

    table.to_string()
}

/// Format comments as table (human) or JSON
pub fn format_comment_table(comments: &[Comment], json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(comments).unwrap_or_else(|_| "[]".to_string());
    }

    if comments.is_empty() {
        return "No comments found.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Created").fg(Color::Cyan),
        Cell::new("Author").fg(Color::Cyan),
        Cell::new("Comment").fg(Color::Cyan),
    ]);

    for comment in comments {
        let created = comment.created.format("%Y-%m-%d %H:%M").to_string();
        let author = format!("{} <{}>", comment.name, comment.user);
        let content = truncate(&single_line(&comment.content), 60);

        table.add_row(Row::from(vec![comment.id.as_str(), &created, &author, &content]));
    }

    table.to_string()
}

pub fn format_stats(config: &AppConfig, counts: &StoreCounts) -> String {
    let lines = [
        "Tarefas+ - Store Statistics".to_string(),
        "===========================".to_string(),
        String::new(),
        format!("Database:      {}", config.database_path.display()),
        format!("Tasks:         {}", counts.tasks),
        format!("  Public:      {}", counts.public_tasks),
        format!("  Private:     {}", counts.tasks.saturating_sub(counts.public_tasks)),
        format!("Comments:      {}", counts.comments),
        format!("Owners:        {}", counts.owners),
    ];
    lines.join("\n")
}

fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max - 1).collect::<String>() + "…"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, content: &str, public: bool) -> Task {
        Task {
            id: id.to_string(),
            user: "ana@example.com".to_string(),
            content: content.to_string(),
            created: Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap(),
            public,
        }
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ação", 10), "ação");
        assert_eq!(truncate("ãããããã", 4), "ããã…");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("linha um\n\nlinha  dois"), "linha um linha dois");
    }

    #[test]
    fn test_task_table() {
        let output = format_task_table(&[task("abc123", "Estudar Rust", true)], false);
        assert!(output.contains("abc123"));
        assert!(output.contains("2024-03-09 14:30"));
        assert!(output.contains("Estudar Rust"));
        assert!(output.contains("yes"));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_task_table(&[], false), "No tasks found.");
        assert_eq!(format_comment_table(&[], false), "No comments found.");
        assert_eq!(format_task_table(&[], true), "[]");
    }

    #[test]
    fn test_task_json() {
        let output = format_task_table(&[task("abc123", "Estudar", false)], true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["id"], "abc123");
        assert_eq!(value[0]["public"], false);
    }

    #[test]
    fn test_comment_table() {
        let comment = Comment {
            id: "c1".to_string(),
            task_id: "abc123".to_string(),
            content: "Boa ideia".to_string(),
            user: "bia@example.com".to_string(),
            name: "Bia".to_string(),
            created: Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap(),
        };
        let output = format_comment_table(&[comment], false);
        assert!(output.contains("Bia <bia@example.com>"));
        assert!(output.contains("Boa ideia"));
    }

    #[test]
    fn test_stats() {
        let counts = StoreCounts {
            tasks: 5,
            public_tasks: 2,
            comments: 7,
            owners: 3,
        };
        let output = format_stats(&AppConfig::default(), &counts);
        assert!(output.contains("Private:     3"));
        assert!(output.contains("Comments:      7"));
        assert!(output.contains("tarefas.db"));
    }
}
