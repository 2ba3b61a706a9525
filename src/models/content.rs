//! Website content model for the marketing pages.

use serde::{Deserialize, Serialize};

/// Kind of a content block, serialized in lowercase as the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Hero,
    Text,
    Image,
    Testimonial,
    Features,
    Cta,
}

/// A sub-item inside a `features` or `testimonial` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A polymorphic content unit within a page.
///
/// Every field except `id` and `kind` is optional, and which fields are set
/// is an instance-level fact, not a per-kind schema: a hero block usually
/// carries a button, but nothing stops a text block from carrying one too.
/// Rendering and editing key off whichever fields are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    /// Unique within one content document.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<BlockItem>>,
}

/// Structured content for one marketing page, keyed by `page`.
///
/// Content documents are seeded at store initialization and afterwards only
/// ever updated; there is no create or delete over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteContent {
    pub page: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    pub updated_at: String,
}

impl WebsiteContent {
    /// Look up a block by its id.
    pub fn block(&self, block_id: &str) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    /// Mutable block lookup for the editable in-memory copy held by the UI.
    pub fn block_mut(&mut self, block_id: &str) -> Option<&mut ContentBlock> {
        self.blocks.iter_mut().find(|b| b.id == block_id)
    }
}

/// Request body for updating a page's content.
///
/// Same shallow-merge contract as package updates: an absent field keeps its
/// current value, a present `blocks` replaces the whole sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<ContentBlock>>,
}

impl UpdateContentRequest {
    /// Shallow-merge this patch onto an existing page document.
    /// `updated_at` is refreshed by the store, not here.
    pub fn merge_onto(&self, existing: &WebsiteContent) -> WebsiteContent {
        WebsiteContent {
            page: existing.page.clone(),
            title: self.title.clone().unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| existing.description.clone()),
            blocks: self
                .blocks
                .clone()
                .unwrap_or_else(|| existing.blocks.clone()),
            updated_at: existing.updated_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_page() -> WebsiteContent {
        WebsiteContent {
            page: "home".to_string(),
            title: "Home".to_string(),
            description: "Landing page".to_string(),
            blocks: vec![
                ContentBlock {
                    id: "home-hero-1".to_string(),
                    kind: BlockKind::Hero,
                    title: Some("Welcome".to_string()),
                    content: None,
                    image_url: None,
                    button_text: Some("Explore".to_string()),
                    button_link: Some("/packages".to_string()),
                    items: None,
                },
                ContentBlock {
                    id: "home-text-1".to_string(),
                    kind: BlockKind::Text,
                    title: None,
                    content: Some("Body copy".to_string()),
                    image_url: None,
                    button_text: None,
                    button_link: None,
                    items: None,
                },
            ],
            updated_at: "2023-06-15T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_block_lookup_by_id() {
        let mut content = home_page();
        assert!(content.block("home-hero-1").is_some());
        assert!(content.block("missing").is_none());

        let hero = content.block_mut("home-hero-1").unwrap();
        hero.title = Some("Updated".to_string());
        assert_eq!(
            content.block("home-hero-1").unwrap().title.as_deref(),
            Some("Updated")
        );
    }

    #[test]
    fn test_block_kind_serializes_as_lowercase_type() {
        let content = home_page();
        let value = serde_json::to_value(&content.blocks[0]).unwrap();
        assert_eq!(value["type"], "hero");
        // Unset fields are omitted, present ones keep camelCase names.
        assert!(value.get("content").is_none());
        assert_eq!(value["buttonText"], "Explore");
    }

    #[test]
    fn test_merge_replaces_blocks_wholesale() {
        let existing = home_page();
        let patch = UpdateContentRequest {
            title: Some("New title".to_string()),
            blocks: Some(vec![existing.blocks[1].clone()]),
            ..Default::default()
        };

        let merged = patch.merge_onto(&existing);
        assert_eq!(merged.title, "New title");
        assert_eq!(merged.description, existing.description);
        assert_eq!(merged.blocks.len(), 1);
        assert_eq!(merged.blocks[0].id, "home-text-1");
    }
}
