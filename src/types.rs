// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a documentation search index.
//!
//! One [`IndexEntry`] per documented symbol: a type, a field, an enum value.
//! Entries arrive as a JSON array of fixed-position records produced at build
//! time, so the serde impls here are hand-written rather than derived:
//!
//! ```text
//! [ aliases[], name, kind ]                          top-level entry
//! [ aliases[], name, kind, parentName, parentKind ]  member entry
//! ```
//!
//! # Invariants
//!
//! - **Parent**: parent name and parent kind are present together or not at all.
//!   [`ParentRef`] bundles them so the half-present state can't be constructed.
//!   On the wire, `null` and `""` both count as absent.
//!
//! - **Aliases**: non-empty in well-formed data. The engine doesn't reject an
//!   empty list at decode time; scoring treats it as "no match" instead.

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::scoring::NO_MATCH;

// =============================================================================
// INDEX ENTRY
// =============================================================================

/// The entry that owns a member entry (the type a field belongs to).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParentRef {
    pub name: String,
    pub kind: String,
}

/// One documented symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexEntry {
    /// Every search key for this entry, usually the lowercased name plus variants.
    pub aliases: Vec<String>,
    /// Display name.
    pub name: String,
    /// Category tag ("object", "field", "enum_value", ...) used for linking.
    pub kind: String,
    /// Present when this entry is a member of another entry.
    pub parent: Option<ParentRef>,
}

impl IndexEntry {
    /// A top-level entry.
    pub fn new(
        aliases: impl IntoIterator<Item = impl Into<String>>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            aliases: aliases.into_iter().map(Into::into).collect(),
            name: name.into(),
            kind: kind.into(),
            parent: None,
        }
    }

    /// Attach this entry to a parent, turning it into a member entry.
    pub fn with_parent(mut self, name: impl Into<String>, kind: impl Into<String>) -> Self {
        self.parent = Some(ParentRef {
            name: name.into(),
            kind: kind.into(),
        });
        self
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.name.as_str())
    }

    pub fn parent_kind(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.kind.as_str())
    }

    pub fn is_member(&self) -> bool {
        self.parent.is_some()
    }

    /// Link target for this entry.
    ///
    /// Top-level entries get their own page (`{kind}.{name}.html`). Members
    /// live on the parent's page under an anchor
    /// (`{parentKind}.{parentName}.html#{kind}.{name}`).
    pub fn href(&self) -> String {
        match &self.parent {
            Some(parent) => format!(
                "{}.{}.html#{}.{}",
                parent.kind, parent.name, self.kind, self.name
            ),
            None => format!("{}.{}.html", self.kind, self.name),
        }
    }

    /// Link target for the parent segment of a member entry.
    pub fn parent_href(&self) -> Option<String> {
        self.parent
            .as_ref()
            .map(|parent| format!("{}.{}.html", parent.kind, parent.name))
    }
}

impl Serialize for IndexEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.parent.is_some() { 5 } else { 3 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.aliases)?;
        seq.serialize_element(&self.name)?;
        seq.serialize_element(&self.kind)?;
        if let Some(parent) = &self.parent {
            seq.serialize_element(&parent.name)?;
            seq.serialize_element(&parent.kind)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for IndexEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(IndexEntryVisitor)
    }
}

struct IndexEntryVisitor;

impl<'de> Visitor<'de> for IndexEntryVisitor {
    type Value = IndexEntry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an index record [aliases, name, kind, parentName?, parentKind?]")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<IndexEntry, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let aliases: Vec<String> = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let name: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let kind: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;

        // null, missing, and "" all mean "absent"
        let parent_name = non_empty(seq.next_element::<Option<String>>()?.flatten());
        let parent_kind = non_empty(seq.next_element::<Option<String>>()?.flatten());

        while seq.next_element::<IgnoredAny>()?.is_some() {}

        let parent = match (parent_name, parent_kind) {
            (Some(name), Some(kind)) => Some(ParentRef { name, kind }),
            (None, None) => None,
            (Some(_), None) => return Err(de::Error::invalid_length(4, &self)),
            (None, Some(_)) => {
                return Err(de::Error::custom(
                    "parentKind present without parentName",
                ))
            }
        };

        Ok(IndexEntry {
            aliases,
            name,
            kind,
            parent,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// An entry paired with its best distance to the current query.
///
/// Created fresh per search, dropped after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub distance: usize,
    pub entry: &'a IndexEntry,
}

impl ScoredEntry<'_> {
    /// False for entries that couldn't be scored (see [`NO_MATCH`]).
    pub fn is_match(&self) -> bool {
        self.distance != NO_MATCH
    }
}

/// Render-ready projection of a ranked entry.
///
/// This is everything the rendering layer needs: the display text, the
/// `kind` classes for styling, and both link targets for member entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedEntry {
    pub name: String,
    pub kind: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_href: Option<String>,
    /// `None` for an entry that couldn't be scored.
    pub distance: Option<usize>,
}

impl From<&ScoredEntry<'_>> for RenderedEntry {
    fn from(scored: &ScoredEntry<'_>) -> Self {
        let entry = scored.entry;
        RenderedEntry {
            name: entry.name.clone(),
            kind: entry.kind.clone(),
            href: entry.href(),
            parent_name: entry.parent_name().map(str::to_string),
            parent_kind: entry.parent_kind().map(str::to_string),
            parent_href: entry.parent_href(),
            distance: scored.is_match().then_some(scored.distance),
        }
    }
}

/// What the page is showing: the regular docs body, or search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Main,
    Search,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Main => "main",
            DisplayMode::Search => "search",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
