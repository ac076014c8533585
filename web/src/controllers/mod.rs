use common::SiteIdentity;

pub mod pages;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::Config,
    pub identity: SiteIdentity,
}
