use serde::{Deserialize, Serialize};

/// Single record of site metadata. All fields are optional free text; the
/// substitution engine draws static placeholder values from here. Survives
/// workflow resets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub logo_url: String,
    pub our_domain: String,
    pub general_competitors: String,
    pub brand_voice: String,
    pub social_handles: String,
    pub sitemap_url: String,
    pub wp_admin_url: String,
}
