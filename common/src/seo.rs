pub const TERMS_OF_USE_PATH: &str = "/terms-of-use";

/// Metadata emitted into the page head for search engines and link previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub noindex: bool,
}

impl SeoMeta {
    pub fn terms_of_use(company_name: &str, base_url: Option<&str>) -> Self {
        SeoMeta {
            title: format!("Terms of use of {}", company_name),
            description: format!(
                "Terms of use of {}. Here we describe the rules of using hackathon.camp. Using this tool comes with requirements for your business to consider.",
                company_name
            ),
            canonical: canonical_url(base_url, TERMS_OF_USE_PATH),
            noindex: true,
        }
    }

    /// Directive for the `robots` and `googlebot` meta tags.
    pub fn robots(&self) -> &'static str {
        if self.noindex {
            "noindex,follow"
        } else {
            "index,follow"
        }
    }
}

/// Joins the public base URL and a page path with a single slash.
///
/// Without a base URL the bare path is returned; the link is then relative
/// but the page still renders.
pub fn canonical_url(base_url: Option<&str>, path: &str) -> String {
    let path = path.trim_start_matches('/');
    match base_url.map(|b| b.trim_end_matches('/')) {
        Some(base) if !base.is_empty() => format!("{}/{}", base, path),
        _ => {
            log::debug!("No base URL for canonical link of /{}", path);
            format!("/{}", path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_follows_company_name() {
        let meta = SeoMeta::terms_of_use("workplacify", Some("https://workplacify.com"));
        assert_eq!(meta.title, "Terms of use of workplacify");

        let meta = SeoMeta::terms_of_use("Acme", None);
        assert_eq!(meta.title, "Terms of use of Acme");
    }

    #[test]
    fn description_mentions_company() {
        let meta = SeoMeta::terms_of_use("workplacify", None);
        assert!(meta.description.contains("workplacify"));
        assert!(meta.description.starts_with("Terms of use of workplacify."));
    }

    #[test]
    fn terms_page_is_never_indexed() {
        let meta = SeoMeta::terms_of_use("workplacify", Some("https://workplacify.com"));
        assert!(meta.noindex);
        assert_eq!(meta.robots(), "noindex,follow");
    }

    #[test]
    fn indexable_page_gets_index_directive() {
        let meta = SeoMeta {
            noindex: false,
            ..SeoMeta::terms_of_use("workplacify", None)
        };
        assert_eq!(meta.robots(), "index,follow");
    }

    #[test]
    fn canonical_joins_with_single_slash() {
        assert_eq!(
            canonical_url(Some("https://workplacify.com"), "/terms-of-use"),
            "https://workplacify.com/terms-of-use"
        );
        assert_eq!(
            canonical_url(Some("https://workplacify.com/"), "terms-of-use"),
            "https://workplacify.com/terms-of-use"
        );
    }

    #[test]
    fn canonical_without_base_url_is_relative() {
        assert_eq!(canonical_url(None, "/terms-of-use"), "/terms-of-use");
        assert_eq!(canonical_url(Some(""), "/terms-of-use"), "/terms-of-use");
    }
}
