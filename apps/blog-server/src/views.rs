//! Server-rendered HTML views: index, new, show, edit.

use blog_core::Post;
use std::fmt::Write;

pub fn index(posts: &[Post]) -> String {
    let mut content = String::from("<h1>Blog Party</h1>\n<p><a href=\"/new\">Write a post</a></p>\n");

    if posts.is_empty() {
        content.push_str("<p>No posts yet.</p>\n");
    } else {
        content.push_str("<ul class=\"posts\">\n");
        for post in posts {
            let _ = writeln!(
                content,
                "  <li><a href=\"/{id}\">{title}</a> by {author}</li>",
                id = escape(&post.id),
                title = escape(&post.title),
                author = escape(&post.author),
            );
        }
        content.push_str("</ul>\n");
    }

    layout("Blog Party", &content)
}

pub fn new_form() -> String {
    let content = format!(
        "<h1>New post</h1>\n\
         <form action=\"/\" method=\"post\">\n{fields}\
         \x20 <label>Tags <input name=\"tags\" placeholder=\"comma, separated\"></label>\n\
         \x20 <button type=\"submit\">Publish</button>\n\
         </form>\n",
        fields = post_fields("", "", ""),
    );
    layout("New post", &content)
}

pub fn show(post: &Post) -> String {
    let mut content = String::new();
    let _ = write!(
        content,
        "<article>\n\
         \x20 <h1>{title}</h1>\n\
         \x20 <p class=\"meta\">by {author} &middot; {created} (updated {updated})</p>\n\
         \x20 <div class=\"body\">{body}</div>\n",
        title = escape(&post.title),
        author = escape(&post.author),
        created = post.created_at.format("%Y-%m-%d %H:%M"),
        updated = post.updated_at.format("%Y-%m-%d %H:%M"),
        body = escape(&post.body),
    );
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| escape(t)).collect();
        let _ = writeln!(content, "  <p class=\"tags\">{}</p>", tags.join(", "));
    }
    let _ = write!(
        content,
        "</article>\n\
         <p><a href=\"/{id}/edit\">Edit</a> &middot; <a href=\"/\">Back</a></p>\n\
         <form action=\"/{id}?_method=DELETE\" method=\"post\">\n\
         \x20 <button type=\"submit\">Delete</button>\n\
         </form>\n",
        id = escape(&post.id),
    );

    layout(&post.title, &content)
}

pub fn edit(post: &Post) -> String {
    let content = format!(
        "<h1>Edit post</h1>\n\
         <form action=\"/{id}?_method=PUT\" method=\"post\">\n{fields}\
         \x20 <button type=\"submit\">Save</button>\n\
         </form>\n",
        id = escape(&post.id),
        fields = post_fields(&post.author, &post.title, &post.body),
    );
    layout(&format!("Edit {}", post.title), &content)
}

fn post_fields(author: &str, title: &str, body: &str) -> String {
    format!(
        "  <label>Author <input name=\"author\" value=\"{}\"></label>\n\
         \x20 <label>Title <input name=\"title\" value=\"{}\"></label>\n\
         \x20 <label>Body <textarea name=\"blog_body\">{}</textarea></label>\n",
        escape(author),
        escape(title),
        escape(body),
    )
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n{}</body>\n\
         </html>\n",
        escape(title),
        content
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
