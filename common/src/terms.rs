use crate::SiteIdentity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsSection {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

impl TermsSection {
    fn new(heading: &str, paragraphs: Vec<String>) -> Self {
        TermsSection {
            heading: heading.to_string(),
            paragraphs,
        }
    }
}

/// Legal text of the terms of use, parameterized by the company it is issued by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsOfUse {
    pub company_name: String,
    pub company_email: String,
    pub sections: Vec<TermsSection>,
}

impl TermsOfUse {
    pub fn new(company_name: &str, company_email: &str) -> Self {
        TermsOfUse {
            company_name: company_name.to_string(),
            company_email: company_email.to_string(),
            sections: build_sections(company_name, company_email),
        }
    }

    pub fn for_site(identity: &SiteIdentity) -> Self {
        Self::new(&identity.company_name, &identity.company_email)
    }
}

fn build_sections(name: &str, email: &str) -> Vec<TermsSection> {
    vec![
        TermsSection::new(
            "Introduction",
            vec![
                format!(
                    "These terms of use govern your use of {name} and all related services. By accessing or using {name} you accept these terms in full. If you disagree with any part of them, you must not use {name}."
                ),
                format!(
                    "{name} is intended for use by businesses. You must be at least 18 years old and authorized to act on behalf of your organization to accept these terms."
                ),
            ],
        ),
        TermsSection::new(
            "Accounts",
            vec![
                "You are responsible for keeping your login credentials confidential and for all activity that happens under your account.".to_string(),
                format!(
                    "Notify {name} immediately at {email} if you become aware of any unauthorized use of your account."
                ),
            ],
        ),
        TermsSection::new(
            "Intellectual property rights",
            vec![format!(
                "Other than the content you own, {name} and its licensors own all intellectual property rights and materials contained in the service. You are granted a limited license only for purposes of using the service in accordance with these terms."
            )],
        ),
        TermsSection::new(
            "Restrictions",
            vec![
                "You are specifically restricted from publishing, selling, sublicensing or otherwise commercializing any material of the service; using the service in any way that is or may be damaging to it; using the service contrary to applicable laws and regulations; and engaging in any data mining, scraping or similar activity in relation to the service.".to_string(),
                format!(
                    "{name} may restrict your access to any area of the service at any time, at its sole discretion."
                ),
            ],
        ),
        TermsSection::new(
            "Your content",
            vec![format!(
                "Your content is any text, data or other material you submit to the service. By submitting it you grant {name} a non-exclusive, worldwide license to host, process and display it solely to operate the service for you. Your content must be your own and must not infringe the rights of any third party. {name} may remove any of your content at any time without notice."
            )],
        ),
        TermsSection::new(
            "No warranties",
            vec![format!(
                "The service is provided \"as is\", with all faults, and {name} makes no express or implied representations or warranties of any kind related to it. Nothing in the service shall be interpreted as advice to you."
            )],
        ),
        TermsSection::new(
            "Limitation of liability",
            vec![format!(
                "In no event shall {name}, nor any of its officers, directors and employees, be held liable for anything arising out of or in any way connected with your use of the service. {name} shall not be held liable for any indirect, consequential or special liability arising out of or in any way related to your use of the service."
            )],
        ),
        TermsSection::new(
            "Indemnification",
            vec![format!(
                "You hereby indemnify {name} to the fullest extent from and against any and all liabilities, costs, demands, causes of action, damages and expenses arising in any way related to your breach of any of the provisions of these terms."
            )],
        ),
        TermsSection::new(
            "Severability",
            vec!["If any provision of these terms is found to be invalid under any applicable law, such provision shall be deleted without affecting the remaining provisions herein.".to_string()],
        ),
        TermsSection::new(
            "Variation of terms",
            vec![format!(
                "{name} is permitted to revise these terms at any time as it sees fit. By using the service you are expected to review these terms on a regular basis."
            )],
        ),
        TermsSection::new(
            "Assignment",
            vec![format!(
                "{name} is allowed to assign, transfer and subcontract its rights and obligations under these terms without any notification. You are not allowed to assign, transfer or subcontract any of your rights or obligations under these terms."
            )],
        ),
        TermsSection::new(
            "Entire agreement",
            vec![format!(
                "These terms constitute the entire agreement between {name} and you in relation to your use of the service, and supersede all prior agreements and understandings."
            )],
        ),
        TermsSection::new(
            "Contact",
            vec![format!(
                "If you have any questions about these terms, contact {name} at {email}."
            )],
        ),
    ]
}
