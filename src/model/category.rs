//! Browse category

use super::common::Image;
use serde::{Deserialize, Serialize};

/// Category object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Category {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub icons: Vec<Image>,
    pub id: String,
    pub name: String,
}
