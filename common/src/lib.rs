pub mod seo;
pub mod terms;

pub use seo::{canonical_url, SeoMeta, TERMS_OF_USE_PATH};
pub use terms::{TermsOfUse, TermsSection};

pub const COMPANY_NAME: &str = "workplacify";
pub const COMPANY_EMAIL: &str = "kevinigeligeligel@gmail.com";

/// Who the marketing pages speak for. Shared by the metadata and the legal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub company_name: String,
    pub company_email: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        SiteIdentity {
            company_name: COMPANY_NAME.to_string(),
            company_email: COMPANY_EMAIL.to_string(),
        }
    }
}
