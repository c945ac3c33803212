//! HTML page handlers and renderers.
//!
//! Pages are built from string templates around a shared [`layout`]. The
//! renderers are plain functions over already-fetched data so they can be
//! unit-tested without a backend; the axum handlers only fetch and delegate.
//!
//! Every record field is HTML-escaped before interpolation — project data
//! comes from the backend and contact form echoes come from the visitor.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::config::SiteConfig;
use crate::models::{ContactForm, Project};

use super::AppState;

// ── Page chrome ───────────────────────────────────────────────────────────────

const STYLE: &str = r#"
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: system-ui, -apple-system, sans-serif;
      background: #0f0f0f; color: #e0e0e0;
      max-width: 64rem; margin: 0 auto; padding: 2rem 1rem;
    }
    nav { margin-bottom: 3rem; }
    nav a { color: #c0c0e0; text-decoration: none; margin-right: 1.5rem; }
    nav a:hover { text-decoration: underline; }
    h1 { font-size: 2rem; margin-bottom: 0.5rem; }
    h2 { font-size: 1.2rem; margin-bottom: 0.5rem; }
    .tagline { color: #888; margin-bottom: 2rem; }
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
    .card {
      padding: 1.5rem; border: 1px solid #333; border-radius: 12px; background: #1a1a1a;
    }
    .card p { font-size: 0.9rem; color: #aaa; margin-bottom: 1rem; }
    .tags { list-style: none; margin-bottom: 1rem; }
    .tags li {
      display: inline-block; font-size: 0.75rem; color: #c0c0e0;
      background: #2a2a3a; border-radius: 8px; padding: 0.2rem 0.6rem;
      margin: 0 0.3rem 0.3rem 0;
    }
    .links a { color: #8ab4f8; font-size: 0.85rem; margin-right: 1rem; }
    .panel {
      padding: 1.5rem; border-radius: 12px; border: 1px solid #333;
      background: #1a1a1a; max-width: 28rem;
    }
    .panel.error { border-color: #663333; background: #1f1414; color: #e0a0a0; }
    .empty { color: #888; padding: 2rem 0; }
    form label { display: block; margin-bottom: 1rem; font-size: 0.9rem; }
    form input, form textarea {
      display: block; width: 100%; margin-top: 0.3rem; padding: 0.5rem;
      background: #1a1a1a; border: 1px solid #333; border-radius: 8px; color: #e0e0e0;
    }
    form button {
      padding: 0.5rem 1.5rem; border: none; border-radius: 8px;
      background: #2a2a3a; color: #c0c0e0; cursor: pointer;
    }
    form button:hover { background: #3a3a5a; }
"#;

/// Wrap `body` in the shared document shell.
fn layout(site: &SiteConfig, page_title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{page_title} | {site_title}</title>
  <style>{STYLE}</style>
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/projects">Projects</a>
    <a href="/about">About</a>
    <a href="/contact">Contact</a>
  </nav>
{body}
</body>
</html>
"#,
        page_title = escape(page_title),
        site_title = escape(&site.title),
    )
}

/// Minimal HTML escaping for text and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

// ── Renderers ─────────────────────────────────────────────────────────────────

pub(super) fn render_home(site: &SiteConfig) -> String {
    let body = format!(
        r#"  <h1>Hi, I'm {owner}</h1>
  <p class="tagline">{tagline}</p>
  <p><a href="/projects">View my work &rarr;</a></p>
"#,
        owner = escape(&site.owner),
        tagline = escape(&site.tagline),
    );
    layout(site, "Home", &body)
}

pub(super) fn render_about(site: &SiteConfig) -> String {
    let body = format!(
        r#"  <h1>About Me</h1>
  <p class="tagline">{tagline}</p>
  <div class="panel">
    <p>I build web applications end to end, from backend services to the
    pages that present them. This site is a small example: server-rendered
    pages over a JSON API.</p>
  </div>
"#,
        tagline = escape(&site.tagline),
    );
    layout(site, "About", &body)
}

/// Projects page with one card per record, in the order returned.
pub(super) fn render_projects(site: &SiteConfig, projects: &[Project]) -> String {
    let mut body = String::from("  <h1>Projects</h1>\n  <p class=\"tagline\">Showcasing my latest work</p>\n");
    if projects.is_empty() {
        body.push_str("  <p class=\"empty\">No projects found.</p>\n");
    } else {
        body.push_str("  <div class=\"grid\">\n");
        for project in projects {
            body.push_str(&render_card(project));
        }
        body.push_str("  </div>\n");
    }
    layout(site, "Projects", &body)
}

fn render_card(project: &Project) -> String {
    let mut tags = String::new();
    for tag in &project.tags {
        tags.push_str(&format!("<li>{}</li>", escape(tag)));
    }

    let mut links = String::new();
    for (href, label) in [
        (&project.links.github, "GitHub"),
        (&project.links.live, "Live"),
        (&project.links.demo, "Demo"),
    ] {
        if let Some(url) = href {
            links.push_str(&format!(r#"<a href="{}">{label}</a> "#, escape(url)));
        }
    }

    format!(
        r#"    <article class="card" data-id="{id}">
      <h2>{title}</h2>
      <p>{summary}</p>
      <ul class="tags">{tags}</ul>
      <p class="links">{links}</p>
    </article>
"#,
        id = escape(&project.id),
        title = escape(&project.title),
        summary = escape(&project.summary),
    )
}

/// Static error panel shown when the project fetch fails and no fallback
/// applies. Deliberately generic — no partial list is attempted.
pub(super) fn render_projects_error(site: &SiteConfig) -> String {
    let body = r#"  <h1>Projects</h1>
  <div class="panel error">
    <p>Failed to load projects.</p>
    <p>Please try again later or check your connection.</p>
  </div>
"#;
    layout(site, "Projects", body)
}

pub(super) fn render_contact(site: &SiteConfig) -> String {
    let body = r#"  <h1>Get In Touch</h1>
  <form method="post" action="/contact">
    <label>Name<input name="name" required /></label>
    <label>Email<input name="email" type="email" required /></label>
    <label>Message<textarea name="message" rows="6" required></textarea></label>
    <button type="submit">Send</button>
  </form>
"#;
    layout(site, "Contact", body)
}

pub(super) fn render_contact_sent(site: &SiteConfig, form: &ContactForm) -> String {
    let body = format!(
        r#"  <h1>Message Sent</h1>
  <div class="panel">
    <p>Thank you, {name}! I'll get back to you soon.</p>
  </div>
"#,
        name = escape(&form.name),
    );
    layout(site, "Contact", &body)
}

pub(super) fn render_contact_failed(site: &SiteConfig) -> String {
    let body = r#"  <h1>Message Not Sent</h1>
  <div class="panel error">
    <p>Failed to send your message.</p>
    <p>Please try again later.</p>
  </div>
"#;
    layout(site, "Contact", body)
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /
pub(super) async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_home(&state.site))
}

/// GET /about
pub(super) async fn about(State(state): State<AppState>) -> Html<String> {
    Html(render_about(&state.site))
}

/// GET /projects — one outstanding fetch per render; the error panel is the
/// only degraded state (the dev-mode stub substitution happens inside the
/// client and looks like success here).
pub(super) async fn projects(State(state): State<AppState>) -> Html<String> {
    match state.client.get_projects().await {
        Ok(projects) => Html(render_projects(&state.site, &projects)),
        Err(e) => {
            warn!("projects page degraded to error panel: {e}");
            Html(render_projects_error(&state.site))
        }
    }
}

/// GET /contact
pub(super) async fn contact(State(state): State<AppState>) -> Html<String> {
    Html(render_contact(&state.site))
}

/// POST /contact — submit the form to the backend. Failures always surface
/// to the visitor; there is no fallback for writes.
pub(super) async fn contact_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Response {
    match state.client.send_contact(&form).await {
        Ok(()) => Html(render_contact_sent(&state.site, &form)).into_response(),
        Err(e) => {
            warn!("contact submission failed: {e}");
            (StatusCode::BAD_GATEWAY, Html(render_contact_failed(&state.site))).into_response()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::stub_projects;
    use crate::models::ProjectLinks;

    fn site() -> SiteConfig {
        SiteConfig {
            title: "Portfolio".into(),
            owner: "Test Owner".into(),
            tagline: "test tagline".into(),
        }
    }

    fn card_count(html: &str) -> usize {
        html.matches("<article class=\"card\"").count()
    }

    #[test]
    fn escape_replaces_special_chars() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn zero_projects_shows_empty_state() {
        let html = render_projects(&site(), &[]);
        assert!(html.contains("No projects found."));
        assert_eq!(card_count(&html), 0);
    }

    #[test]
    fn one_card_per_project_in_order() {
        let projects = stub_projects();
        let html = render_projects(&site(), &projects);
        assert_eq!(card_count(&html), projects.len());
        let first = html.find("Portfolio Website").unwrap();
        let second = html.find("E-commerce Platform").unwrap();
        let third = html.find("Task Management App").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn card_shows_only_present_links() {
        let mut project = stub_projects().remove(1);
        project.links = ProjectLinks {
            github: Some("https://github.com/example/x".into()),
            live: None,
            demo: None,
        };
        let html = render_card(&project);
        assert!(html.contains(">GitHub</a>"));
        assert!(!html.contains(">Live</a>"));
        assert!(!html.contains(">Demo</a>"));
    }

    #[test]
    fn record_fields_are_escaped() {
        let project = Project {
            id: "x".into(),
            title: "<script>alert(1)</script>".into(),
            summary: "a & b".into(),
            tags: vec!["<b>".into()],
            links: ProjectLinks::default(),
        };
        let html = render_card(&project);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn error_panel_is_generic() {
        let html = render_projects_error(&site());
        assert!(html.contains("Failed to load projects."));
        assert_eq!(card_count(&html), 0);
    }

    #[test]
    fn home_shows_owner() {
        let html = render_home(&site());
        assert!(html.contains("Test Owner"));
        assert!(html.contains("test tagline"));
    }

    #[test]
    fn contact_sent_echoes_escaped_name() {
        let form = ContactForm {
            name: "<A>".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        };
        let html = render_contact_sent(&site(), &form);
        assert!(html.contains("&lt;A&gt;"));
        assert!(!html.contains("<A>"));
    }
}
