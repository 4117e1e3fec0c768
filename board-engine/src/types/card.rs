//! Card-level types: Card, Label, CardPatch

use super::ids::{CardId, LabelId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card is the leaf work item on the board.
///
/// `id` and `created_at` are fixed at creation and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Card {
    /// Create a new card with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: None,
            labels: Vec::new(),
            created_at: Utc::now(),
            background_color: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a label
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Set the background color
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Check whether a label with the given id is attached
    pub fn has_label(&self, id: &LabelId) -> bool {
        self.labels.iter().any(|l| &l.id == id)
    }

    /// Merge a patch into this card, leaving unspecified fields unchanged
    pub fn apply(&mut self, patch: CardPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(labels) = patch.labels {
            self.labels = labels;
        }
        if let Some(color) = patch.background_color {
            self.background_color = Some(color);
        }
    }
}

/// A named, colored tag. Value-like: each attachment is a full copy,
/// labels are not deduplicated across cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    /// Hex color code, e.g. "#3B82F6"
    pub color: String,
}

impl Label {
    /// Create a new label with a fresh id
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: LabelId::new(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Partial update for a card. Fields left as `None` are untouched;
/// `id` and `created_at` are deliberately not representable here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub labels: Option<Vec<Label>>,
    pub background_color: Option<String>,
}

impl CardPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the label set
    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set the background color
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}
