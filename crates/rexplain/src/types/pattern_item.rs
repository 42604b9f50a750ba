use std::fmt::{self, Display, Formatter};
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// One generated output unit: the source text a sentence covers and the
/// sentence itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternItem {
    /// The source substring this item describes.
    pub text: String,
    /// The generated English sentence, terminated by a single period.
    pub description: String,
    /// Comparison verdict; written only by [`crate::compare::are_equal`].
    #[serde(default)]
    pub is_ok: Option<bool>,
}

impl PatternItem {
    /// Create an item with no comparison verdict.
    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
            is_ok: None,
        }
    }
}

/// An ordered sequence of [`PatternItem`] forming one generated document.
///
/// Concatenating the item texts reproduces the source pattern exactly;
/// `Display` joins the descriptions into running prose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternItems(Vec<PatternItem>);

impl PatternItems {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one item.
    pub fn push(&mut self, item: PatternItem) {
        self.0.push(item);
    }

    /// The concatenation of every item's source text.
    pub fn text(&self) -> String {
        self.0.iter().map(|item| item.text.as_str()).collect()
    }
}

impl Deref for PatternItems {
    type Target = [PatternItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PatternItems {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<PatternItem>> for PatternItems {
    fn from(items: Vec<PatternItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<PatternItem> for PatternItems {
    fn from_iter<I: IntoIterator<Item = PatternItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PatternItems {
    type Item = PatternItem;
    type IntoIter = std::vec::IntoIter<PatternItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PatternItems {
    type Item = &'a PatternItem;
    type IntoIter = std::slice::Iter<'a, PatternItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for PatternItems {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&item.description)?;
        }
        Ok(())
    }
}
