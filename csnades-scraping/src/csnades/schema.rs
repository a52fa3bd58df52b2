use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NadeType {
    Smoke,
    Molotov,
    Flashbang,
    He,
}

impl NadeType {
    /// URL path segment of the per-category pages; `None` means the category
    /// cannot be fetched and the record has to surface as an error instead.
    pub fn category_path(self) -> Option<&'static str> {
        use NadeType::*;
        Some(match self {
            Smoke => "smokes",
            Molotov => "molotovs",
            Flashbang => "flashbangs",
            He => "hes",
        })
    }

    pub fn label(self) -> &'static str {
        use NadeType::*;
        match self {
            Smoke => "SMOKE",
            Molotov => "MOLOTOV",
            Flashbang => "FLASHBANG",
            He => "HE",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Ct,
    T,
}

impl Team {
    pub fn label(self) -> &'static str {
        match self {
            Team::Ct => "CT",
            Team::T => "T",
        }
    }
}

/// One nade as discovered on the map listing page.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, CopyGetters, Serialize, Deserialize)]
pub struct NadeSummary {
    // The nominal id varies across deployments of the site; it is carried
    // for diagnostics only and never takes part in identity.
    #[getset(get = "pub")]
    id: String,
    #[getset(get = "pub")]
    slug: String,
    #[getset(get_copy = "pub")]
    nade_type: NadeType,
    #[getset(get_copy = "pub")]
    team: Option<Team>,
    #[getset(get = "pub")]
    title_from: Option<String>,
    #[getset(get = "pub")]
    title_to: Option<String>,
}

impl NadeSummary {
    pub fn natural_key(&self) -> (NadeType, String) {
        (self.nade_type, self.slug.clone())
    }
}

/// Outcome of one scheduled detail-page job. At most one of `console_text`
/// and `error` is set; both absent means the page was fetched but carried no
/// embedded command.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NadeResult {
    pub summary: NadeSummary,
    pub console_text: Option<String>,
    pub error: Option<String>,
    pub source_url: Option<String>,
}
