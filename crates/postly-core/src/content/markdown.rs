//! Simple-editor Markdown to HTML conversion.
//!
//! Only the subset the plain-text editor advertises is understood. There is
//! no escaping, nesting or block structure; list items are emitted without a
//! surrounding `<ul>`/`<ol>`. Output that differs from CommonMark is expected.

use std::sync::LazyLock;

use regex::Regex;

static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static STRONG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static EM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());
static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> (.*)$").unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.*)$").unwrap());
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\d+\. (.*)$").unwrap());
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Convert simple-editor Markdown into an HTML fragment.
pub fn markdown_to_html(source: &str) -> String {
    // Application order matters: later rules must not re-match tags produced
    // by earlier ones.
    let rules: [(&Regex, &str); 10] = [
        (&*H3, "<h3>${1}</h3>"),
        (&*H2, "<h2>${1}</h2>"),
        (&*H1, "<h1>${1}</h1>"),
        (&*STRONG, "<strong>${1}</strong>"),
        (&*EM, "<em>${1}</em>"),
        (&*CODE, "<code>${1}</code>"),
        (&*QUOTE, "<blockquote>${1}</blockquote>"),
        (&*BULLET, "<li>${1}</li>"),
        (&*NUMBERED, "<li>${1}</li>"),
        (&*LINK, r#"<a href="${2}">${1}</a>"#),
    ];

    let mut html = source.replace("\r\n", "\n");
    for (pattern, replacement) in rules {
        html = pattern.replace_all(&html, replacement).into_owned();
    }

    html.replace('\n', "<br>")
}
