//! HTML rendering for the browser routes
//!
//! The page layout is fixed; only student names are interpolated, and
//! always through [`escape_html`].

use std::fmt::Write;

use crate::db::Student;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

/// Render the student list page with the add-student form.
pub fn student_list_page(students: &[Student]) -> String {
    let mut body = String::from("<h1>Students</h1>\n");

    if students.is_empty() {
        body.push_str("<p class=\"empty\">No students yet.</p>\n");
    } else {
        body.push_str("<ul id=\"students\">\n");
        for student in students {
            // Writing to a String cannot fail
            let _ = writeln!(
                body,
                "<li data-id=\"{}\">{}</li>",
                student.id,
                escape_html(&student.name)
            );
        }
        body.push_str("</ul>\n");
    }

    body.push_str(
        r#"<form method="post" action="/student">
<label for="student">Name</label>
<input type="text" id="student" name="student" maxlength="255" required>
<button type="submit">Add student</button>
</form>"#,
    );

    layout("Students", &body)
}

/// Render a minimal error page.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Something went wrong</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to students</a></p>",
        escape_html(message)
    );
    layout("Error", &body)
}
