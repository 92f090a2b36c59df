use askama::Template;
use axum::extract::Query;
use axum::response::Response;
use chrono::{Datelike, Utc};

use crate::content::{
    self, Category, NavLink, Project, Service, TimelineEntry, NAV_LINKS, SERVICES, TIMELINE,
};
use crate::routes::render;

// ── Template structs ──────────────────────────────────────────────────────────

/// Portfolio card flattened for askama template use.
pub struct ProjectView {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
}

impl From<&'static Project> for ProjectView {
    fn from(p: &'static Project) -> Self {
        Self {
            title: p.title,
            category: p.category.slug(),
            description: p.description,
            image_url: p.image_url,
            tags: p.tags,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    app_name: &'static str,
    tagline: &'static str,
    contact_email: &'static str,
    year: i32,
    nav_links: &'static [NavLink],
    services: &'static [Service],
    timeline: &'static [TimelineEntry],
    // Included portfolio grid
    projects: Vec<ProjectView>,
    active_filter: String,
    // Included contact form, blank on the full page
    name: String,
    email: String,
    message: String,
    name_error: Option<&'static str>,
    email_error: Option<&'static str>,
    message_error: Option<&'static str>,
    banner: Option<String>,
}

#[derive(Template)]
#[template(path = "portfolio_grid.html")]
struct PortfolioGridTemplate {
    projects: Vec<ProjectView>,
    active_filter: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET `/` — the whole single-page site.
pub async fn index_handler() -> Response {
    let tmpl = IndexTemplate {
        app_name: content::APP_NAME,
        tagline: content::TAGLINE,
        contact_email: content::CONTACT_EMAIL,
        year: Utc::now().year(),
        nav_links: NAV_LINKS,
        services: SERVICES,
        timeline: TIMELINE,
        projects: project_views(None),
        active_filter: "all".to_string(),
        name: String::new(),
        email: String::new(),
        message: String::new(),
        name_error: None,
        email_error: None,
        message_error: None,
        banner: None,
    };
    render(tmpl)
}

#[derive(serde::Deserialize)]
pub struct PortfolioQuery {
    #[serde(default)]
    pub filter: String,
}

/// GET `/portfolio?filter=` — filtered grid (HTMX swap into `#portfolio-grid`).
pub async fn portfolio_handler(Query(query): Query<PortfolioQuery>) -> Response {
    let filter = Category::from_filter(&query.filter);
    let tmpl = PortfolioGridTemplate {
        projects: project_views(filter),
        active_filter: filter
            .map(|c| c.slug().to_string())
            .unwrap_or_else(|| "all".to_string()),
    };
    render(tmpl)
}

fn project_views(filter: Option<Category>) -> Vec<ProjectView> {
    content::filtered_projects(filter)
        .into_iter()
        .map(ProjectView::from)
        .collect()
}
