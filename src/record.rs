use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub text: Option<String>,
}

impl ResumeRecord {
    pub fn new(name: &str, email: &str, text: &str) -> Self {
        ResumeRecord {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            text: Some(text.to_string()),
        }
    }
}
