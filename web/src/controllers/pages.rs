use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use common::{SeoMeta, SiteIdentity, TermsOfUse};
use log::error;

use super::AppState;

/// Max width of the centered page container ("6xl").
pub const CONTAINER_MAX_WIDTH: &str = "72rem";

#[derive(Template)]
#[template(path = "terms_of_use.html")]
pub struct TermsOfUsePage {
    pub seo: SeoMeta,
    pub terms: TermsOfUse,
    pub container_max_width: &'static str,
}

impl TermsOfUsePage {
    pub fn new(identity: &SiteIdentity, base_url: Option<&str>) -> Self {
        TermsOfUsePage {
            seo: SeoMeta::terms_of_use(&identity.company_name, base_url),
            terms: TermsOfUse::for_site(identity),
            container_max_width: CONTAINER_MAX_WIDTH,
        }
    }
}

pub async fn terms_of_use(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let page = TermsOfUsePage::new(&state.identity, state.config.base_url.as_deref());
    let html = page.render().map_err(|e| {
        error!("Failed to render terms of use page: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Html(html))
}
