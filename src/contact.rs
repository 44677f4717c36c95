//! Contact records as delivered by a data source.
use serde::{Deserialize, Serialize};

/// One contact's displayable attributes. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(rename = "firstNameLastName")]
    pub name: String,
    #[serde(rename = "emailAddress")]
    pub email: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
}

impl Contact {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        job_title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            job_title: job_title.into(),
        }
    }

    /// Avatar initials: first letter of the first two words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// One batch of contacts plus the total number of contacts the source knows of.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub total: usize,
}
