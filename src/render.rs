//! Server-side HTML rendering of the todo page.
//!
//! The page is rebuilt from the store after every mutation; nothing here
//! holds state.

use crate::i18n::Language;
use crate::session::{Notice, NoticeKind};
use crate::store::{Task, TaskStore};
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #212529; }
.todo-item { background-color: #f8f9fa; padding: 1rem; border-radius: 8px; margin: 0.5rem 0; border-left: 4px solid #007bff; }
.completed { background-color: #d4edda; border-left-color: #28a745; opacity: 0.8; }
.completed-text { text-decoration: line-through; color: #6c757d; }
.translation { background-color: #e3f2fd; padding: 0.5rem; border-radius: 5px; margin-top: 0.5rem; font-style: italic; }
.caption { color: #6c757d; font-size: 0.85rem; }
.controls { display: flex; gap: 0.5rem; margin-top: 0.5rem; flex-wrap: wrap; }
.controls form { display: inline; }
.notice { padding: 0.75rem; border-radius: 5px; margin: 1rem 0; }
.notice-success { background-color: #d4edda; }
.notice-info { background-color: #e3f2fd; }
.notice-error { background-color: #f8d7da; }
"#;

/// Escape text for safe inclusion in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Render the full page for the current store contents.
pub fn render_page(store: &TaskStore, notice: Option<&Notice>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Simple AI Todo App</title>\n");
    let _ = writeln!(html, "<style>{}</style>", STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str("<h1>🤖 Simple AI Todo App</h1>\n");
    html.push_str("<p>Add tasks, translate them, and mark them done!</p>\n");

    if let Some(notice) = notice {
        html.push_str(&render_notice(notice));
        html.push('\n');
    }

    html.push_str("<h2>➕ Add New Task</h2>\n");
    html.push_str(
        "<form method=\"post\" action=\"/tasks\">\n\
         <input type=\"text\" name=\"text\" placeholder=\"Enter your task here...\" \
         aria-label=\"What do you need to do?\" required>\n\
         <button type=\"submit\">Add Task</button>\n</form>\n",
    );

    html.push_str("<h2>📝 Your Tasks</h2>\n");
    if store.is_empty() {
        html.push_str("<p class=\"notice notice-info\">No tasks yet! Add your first task above.</p>\n");
    } else {
        for task in store.tasks() {
            html.push_str(&render_task(task));
        }
        let _ = writeln!(
            html,
            "<p class=\"caption\">{} pending, {} completed</p>",
            store.pending_count(),
            store.completed_count()
        );
    }

    html.push_str("<hr>\n<p class=\"caption\">Built with axum and the OpenAI API</p>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice.kind {
        NoticeKind::Success => "notice-success",
        NoticeKind::Info => "notice-info",
        NoticeKind::Error => "notice-error",
    };
    format!(
        "<div class=\"notice {}\">{}</div>",
        class,
        escape_html(&notice.message)
    )
}

fn render_task(task: &Task) -> String {
    let mut html = String::new();
    let (item_class, text_class, status) = if task.completed {
        ("todo-item completed", "completed-text", "✅ Completed")
    } else {
        ("todo-item", "", "⏳ Pending")
    };

    let _ = writeln!(html, "<div class=\"{}\" id=\"task-{}\">", item_class, task.id);
    let _ = writeln!(
        html,
        "<p class=\"{}\"><strong>{}</strong></p>",
        text_class,
        escape_html(&task.text)
    );
    let _ = writeln!(
        html,
        "<p class=\"caption\">{} | Created: {}</p>",
        status,
        task.created_at_display()
    );

    html.push_str("<div class=\"controls\">\n");
    html.push_str(&render_language_form(task));
    let _ = writeln!(
        html,
        "<form method=\"post\" action=\"/tasks/{}/translate\"><button type=\"submit\">🌐 Translate</button></form>",
        task.id
    );
    if task.completed {
        let _ = writeln!(
            html,
            "<form method=\"post\" action=\"/tasks/{}/undo\"><button type=\"submit\">↩️ Undo</button></form>",
            task.id
        );
    } else {
        let _ = writeln!(
            html,
            "<form method=\"post\" action=\"/tasks/{}/complete\"><button type=\"submit\">✅ Complete</button></form>",
            task.id
        );
    }
    html.push_str("</div>\n");

    if let Some(translation) = &task.translation {
        let _ = writeln!(
            html,
            "<div class=\"translation\">🌐 {}: {}</div>",
            task.selected_language.name(),
            escape_html(translation)
        );
    }

    html.push_str("</div>\n");
    html
}

fn render_language_form(task: &Task) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        "<form method=\"post\" action=\"/tasks/{}/language\">\n<select name=\"language\" aria-label=\"Translation Language\">",
        task.id
    );
    for language in Language::all() {
        let selected = if language == task.selected_language {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"{name}\"{selected}>{name}</option>",
            name = language.name(),
            selected = selected
        );
    }
    html.push_str("</select>\n<button type=\"submit\">Set</button>\n</form>\n");
    html
}
