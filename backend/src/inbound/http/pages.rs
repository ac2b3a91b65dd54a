//! Server-side HTML rendering for the user pages.
//!
//! The contract here is deliberately small: render the list page given the
//! users, or the edit page given one user. All user-controlled text is
//! HTML-escaped before interpolation.

use std::fmt::Write as _;

use crate::domain::User;

/// Escape text for safe interpolation into HTML bodies and attributes.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Render the list page: every user plus the add form.
pub fn list_page(users: &[User]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Users</h1>\n<ul>\n");
    for user in users {
        let id = user.id();
        let name = escape_html(user.name().as_ref());
        let email = escape_html(user.email().as_ref());
        let _ = writeln!(
            body,
            "<li>{name} &lt;{email}&gt; \
             <a href=\"/users/{id}/edit\">edit</a> \
             <form method=\"post\" action=\"/users/{id}/delete\" style=\"display:inline\">\
             <button type=\"submit\">delete</button></form></li>"
        );
    }
    body.push_str("</ul>\n");
    body.push_str(
        "<h2>Add user</h2>\n\
         <form method=\"post\" action=\"/users/add\">\n\
         <label>Name <input name=\"name\"></label>\n\
         <label>Email <input name=\"email\"></label>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
    );
    page("Users", &body)
}

/// Render the edit page: a form pre-filled with the user's current values.
pub fn edit_page(user: &User) -> String {
    let id = user.id();
    let name = escape_html(user.name().as_ref());
    let email = escape_html(user.email().as_ref());
    let body = format!(
        "<h1>Edit user {id}</h1>\n\
         <form method=\"post\" action=\"/users/{id}/update\">\n\
         <label>Name <input name=\"name\" value=\"{name}\"></label>\n\
         <label>Email <input name=\"email\" value=\"{email}\"></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <a href=\"/\">Back</a>\n"
    );
    page("Edit user", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, UserId, UserName};

    fn user(id: i32, name: &str, email: &str) -> User {
        User::new(
            UserId::new(id).expect("id"),
            UserName::new(name).expect("name"),
            EmailAddress::new(email).expect("email"),
        )
    }

    #[test]
    fn list_page_contains_each_user_and_the_add_form() {
        let users = vec![user(1, "alice", "alice@x.com"), user(2, "bob", "bob@x.com")];

        let html = list_page(&users);
        assert!(html.contains("alice"));
        assert!(html.contains("bob@x.com"));
        assert!(html.contains("action=\"/users/add\""));
        assert!(html.contains("href=\"/users/1/edit\""));
        assert!(html.contains("action=\"/users/2/delete\""));
    }

    #[test]
    fn edit_page_prefills_current_values() {
        let html = edit_page(&user(7, "alice", "alice@x.com"));
        assert!(html.contains("action=\"/users/7/update\""));
        assert!(html.contains("value=\"alice\""));
        assert!(html.contains("value=\"alice@x.com\""));
    }

    #[test]
    fn user_text_is_html_escaped() {
        let html = list_page(&[user(1, "<script>alert(1)</script>", "a&b@x.com")]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a&amp;b@x.com"));
    }
}
