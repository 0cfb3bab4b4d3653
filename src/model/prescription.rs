use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub resource_id: String,
    #[serde(default)]
    pub drug_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Prescription {
    pub fn new(resource_id: impl Into<String>, drug_name: Option<&str>) -> Self {
        Self {
            resource_id: resource_id.into(),
            drug_name: drug_name.map(str::to_string),
            status: None,
        }
    }
}

/// A prescriber returned by the prescriber search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescriber {
    pub resource_id: String,
    pub last_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Landing-page alert grouping prescriptions that need the same follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionAlert {
    pub status: String,
    pub count: u32,
    #[serde(default)]
    pub prescription: Option<Prescription>,
}
