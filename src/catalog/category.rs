use serde::{Deserialize, Serialize};

/// A browsable recipe category as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb")]
    pub thumbnail: String,
    #[serde(rename = "strCategoryDescription")]
    pub description: Option<String>,
}

/// A cuisine/origin name from the catalog's area listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    #[serde(rename = "strArea")]
    pub name: String,
}
