use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    Wide,
    Centered,
}

/// Presentation metadata handed to the renderer untouched. It never changes
/// what the core resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameworkConfig {
    pub page_title: String,
    pub page_icon: String,
    pub layout: PageLayout,
    pub caption: String,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            page_title: "CD40 Systems Biology Framework".into(),
            page_icon: "🧬".into(),
            layout: PageLayout::Wide,
            caption: "Systems Biology Framework".into(),
        }
    }
}

impl FrameworkConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))
    }
}
