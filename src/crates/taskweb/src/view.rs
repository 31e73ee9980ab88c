//! Server-side HTML rendering of the task list
//!
//! The page template lives here as code: a shell, an add form, and one
//! row per task with inline update and delete forms. All task-sourced
//! text passes through [`escape_html`] before it reaches the page.

use std::fmt::Write;

use crate::client::messages::Task;

/// Escape text for safe interpolation into HTML body and attribute
/// positions
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the index page for the given task list
pub fn render_index(tasks: &[Task]) -> String {
    let mut page = String::new();

    page.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Task List</title>\n\
         </head>\n\
         <body>\n\
         <h1>Task List</h1>\n",
    );

    // Add form
    page.push_str(
        "<form action=\"/add\" method=\"post\">\n\
         <input type=\"text\" name=\"title\" placeholder=\"Title\">\n\
         <input type=\"text\" name=\"description\" placeholder=\"Description\">\n\
         <input type=\"date\" name=\"due_date\">\n\
         <select name=\"priority\">\n\
         <option value=\"low\">low</option>\n\
         <option value=\"medium\">medium</option>\n\
         <option value=\"high\">high</option>\n\
         </select>\n\
         <button type=\"submit\">Add task</button>\n\
         </form>\n",
    );

    page.push_str("<ul>\n");
    for task in tasks {
        render_task_row(&mut page, task);
    }
    page.push_str("</ul>\n</body>\n</html>\n");

    page
}

fn render_task_row(page: &mut String, task: &Task) {
    let checked = if task.completed { " checked" } else { "" };

    // write! into a String cannot fail.
    let _ = write!(
        page,
        "<li>\n\
         <form action=\"/update\" method=\"post\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <input type=\"text\" name=\"title\" value=\"{title}\">\n\
         <input type=\"text\" name=\"description\" value=\"{description}\">\n\
         <input type=\"date\" name=\"due_date\" value=\"{due_date}\">\n\
         <input type=\"text\" name=\"priority\" value=\"{priority}\">\n\
         <input type=\"checkbox\" name=\"completed\"{checked}>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <form action=\"/delete\" method=\"post\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <button type=\"submit\">Delete</button>\n\
         </form>\n\
         </li>\n",
        id = task.id,
        title = escape_html(&task.title),
        description = escape_html(&task.description),
        due_date = escape_html(&task.due_date),
        priority = escape_html(&task.priority),
        checked = checked,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, completed: bool) -> Task {
        Task {
            id: 1,
            title: title.to_string(),
            description: "desc".to_string(),
            due_date: "2024-01-01".to_string(),
            priority: "low".to_string(),
            completed,
        }
    }

    #[test]
    fn test_empty_list_renders_page_shell() {
        let html = render_index(&[]);
        assert!(html.contains("<h1>Task List</h1>"));
        assert!(html.contains("action=\"/add\""));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_task_row_contains_fields_and_forms() {
        let html = render_index(&[task("Buy milk", false)]);
        assert!(html.contains("value=\"Buy milk\""));
        assert!(html.contains("action=\"/update\""));
        assert!(html.contains("action=\"/delete\""));
        assert!(html.contains("name=\"id\" value=\"1\""));
    }

    #[test]
    fn test_completed_checkbox_state() {
        let done = render_index(&[task("t", true)]);
        assert!(done.contains("name=\"completed\" checked"));

        let open = render_index(&[task("t", false)]);
        assert!(!open.contains("name=\"completed\" checked"));
    }

    #[test]
    fn test_task_text_is_escaped() {
        let html = render_index(&[task("<script>alert('x')</script>", false)]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html_covers_quotes() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
        assert_eq!(escape_html("a&b"), "a&amp;b");
    }
}
