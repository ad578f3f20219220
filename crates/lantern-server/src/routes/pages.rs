//! Page handlers. Each one names a template and hands it to the renderer.

use crate::render::TemplateData;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};

/// Suffix appended to a URL segment to find its page template.
pub const PAGE_SUFFIX: &str = ".page.html";

/// Template rendered for `/`.
pub const HOME_PAGE: &str = "home.page.html";

pub(super) async fn home(State(state): State<AppState>) -> Response {
    let data = TemplateData::new()
        .with("title", "Home")
        .with("year", chrono::Utc::now().format("%Y").to_string());

    state.renderer.render(HOME_PAGE, Some(data)).await
}

/// `/about` renders `about.page.html`. Names escaping the template root
/// (e.g. an encoded `../`) are rejected by the renderer with a 400.
pub(super) async fn page(State(state): State<AppState>, Path(page): Path<String>) -> Response {
    let name = format!("{page}{PAGE_SUFFIX}");
    let data = TemplateData::new()
        .with("page", page)
        .with("year", chrono::Utc::now().format("%Y").to_string());

    state.renderer.render(&name, Some(data)).await
}
