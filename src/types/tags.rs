//! Contract tag output record

use serde::{Deserialize, Serialize};

/// One registry entry describing a pool contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTag {
    #[serde(rename = "Contract Address")]
    pub contract_address: String,
    #[serde(rename = "Public Name Tag")]
    pub public_name_tag: String,
    #[serde(rename = "Project Name")]
    pub project_name: String,
    #[serde(rename = "UI/Website Link")]
    pub ui_website_link: String,
    #[serde(rename = "Public Note")]
    pub public_note: String,
}
