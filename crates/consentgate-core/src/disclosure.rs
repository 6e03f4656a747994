//! Disclosure document shown inside the consent modal.
//!
//! The gate treats the content as opaque; this module only gives it a shape
//! the view can render and a JSON form hosts can ship alongside the binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};

/// Long-form legal text with a header and ordered sections
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Disclosure {
    /// Modal title
    pub title: String,
    /// Short instruction under the title
    #[serde(default)]
    pub subtitle: String,
    /// Bold lead line at the top of the scrollable text
    #[serde(default)]
    pub heading: String,
    /// Paragraphs before the first section
    #[serde(default)]
    pub intro: Vec<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Titled block of paragraphs followed by an optional list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

/// List entry, optionally led by a bold label ("Contact details: ...")
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

impl ListItem {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    pub fn labelled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }
}

impl Section {
    fn new(title: &str, paragraphs: &[&str], items: Vec<ListItem>) -> Self {
        Self {
            title: title.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
            items,
        }
    }

    fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.trim().is_empty()) && self.items.is_empty()
    }
}

impl Disclosure {
    /// Load a disclosure from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> GateResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let disclosure: Disclosure = serde_json::from_str(&raw)?;
        disclosure.validate()?;
        tracing::debug!(
            path = %path.display(),
            sections = disclosure.sections.len(),
            "Loaded disclosure"
        );
        Ok(disclosure)
    }

    /// Reject documents the modal cannot meaningfully present.
    pub fn validate(&self) -> GateResult<()> {
        if self.title.trim().is_empty() {
            return Err(GateError::InvalidDisclosure("empty title".to_string()));
        }
        let has_intro = self.intro.iter().any(|p| !p.trim().is_empty());
        let has_sections = self.sections.iter().any(|s| !s.is_empty());
        if !has_intro && !has_sections {
            return Err(GateError::InvalidDisclosure("no content".to_string()));
        }
        Ok(())
    }

    /// Bundled personal-data processing notice.
    pub fn builtin() -> Self {
        Self {
            title: "Personal Data Notice".to_string(),
            subtitle: "Please read and approve".to_string(),
            heading: "NOTICE ON THE PROCESSING OF PERSONAL DATA UNDER THE PERSONAL DATA PROTECTION LAW"
                .to_string(),
            intro: vec![
                "As data controller, we take the security of your personal data with the utmost care. \
                 We process and retain the personal data of everyone who uses the platform in accordance \
                 with the applicable data protection law, its secondary regulations and the decisions of \
                 the supervisory authority."
                    .to_string(),
            ],
            sections: vec![
                Section::new(
                    "1. Data Controller",
                    &["Under the applicable data protection law, your personal data may be processed by \
                       the platform operator (the \"Company\") as data controller within the scope \
                       described below."],
                    Vec::new(),
                ),
                Section::new(
                    "2. Purposes of Processing",
                    &["Collected personal data is processed so that you can use the platform services, \
                       to run job search and hiring processes, to match candidates with employers, to \
                       tailor and recommend our products and services to your preferences, usage habits \
                       and needs, and to define and carry out the Company's commercial strategies."],
                    Vec::new(),
                ),
                Section::new(
                    "3. Personal Data Processed",
                    &[],
                    vec![
                        ListItem::labelled("Identity:", "Name, surname, date of birth."),
                        ListItem::labelled(
                            "Contact:",
                            "E-mail address, phone number, city, district, address details.",
                        ),
                        ListItem::labelled(
                            "Professional experience:",
                            "Work history, education, certificates, skills, languages.",
                        ),
                        ListItem::labelled("Visual data:", "Profile photo."),
                        ListItem::labelled(
                            "Transaction security:",
                            "IP address, log records, device information.",
                        ),
                    ],
                ),
                Section::new(
                    "4. Transfer of Personal Data",
                    &["With your explicit consent, your personal data may be transferred to employers \
                       you agree to be contacted by through the platform, and to legally authorised \
                       public institutions and private parties to fulfil our legal obligations, within \
                       the processing conditions set out in the law."],
                    Vec::new(),
                ),
                Section::new(
                    "5. Method and Legal Basis of Collection",
                    &["Your personal data is collected electronically during registration, profile \
                       creation and your activity on the platform. It is processed on the legal bases of \
                       being directly related to the formation or performance of a contract, the \
                       legitimate interest of the data controller, and the explicit consent of the data \
                       subject."],
                    Vec::new(),
                ),
                Section::new(
                    "6. Rights of the Data Subject",
                    &["Under the law, data subjects have the right to:"],
                    vec![
                        ListItem::plain("learn whether their personal data is processed,"),
                        ListItem::plain("request information if their personal data has been processed,"),
                        ListItem::plain(
                            "learn the purpose of processing and whether data is used in line with it,",
                        ),
                        ListItem::plain(
                            "know the third parties to whom personal data is transferred at home or abroad,",
                        ),
                        ListItem::plain(
                            "request correction of personal data that is incomplete or inaccurate.",
                        ),
                    ],
                ),
            ],
        }
    }
}
