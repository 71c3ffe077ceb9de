// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slug codec: display names to URL-safe path segments and back.
//!
//! ## Encoding rules
//!
//! - Lowercase the name.
//! - Every whitespace character becomes a `-` separator.
//! - Characters outside `[A-Za-z0-9_-]` are dropped.
//! - A separator never directly follows another separator, even when dropped
//!   characters sat between them.
//!
//! The last rule keeps the codec stable under a round trip:
//! `encode(decode(encode(name))) == encode(name)` for every name.
//!
//! ## Paths
//!
//! A path is `/<categoryId>/<slug>`: exactly two non-empty segments after the
//! leading separator. The fragment form used in URLs prefixes it with `#`.

use alloc::borrow::ToOwned;
use alloc::string::String;

/// Fragment that addresses the menu.
pub const ROOT_FRAGMENT: &str = "#/";

/// Encode a display name into a lossy, URL-safe slug.
///
/// Distinct names may collide on the same slug; callers match by comparing
/// encoded names rather than by decoding.
///
/// ```
/// use folio_nav::encode;
///
/// assert_eq!(encode("Photo One"), "photo-one");
/// assert_eq!(encode("  Notes: 2024 / Q1 "), "-notes-2024-q1-");
/// assert_eq!(encode("snake_case-name"), "snake_case-name");
/// ```
pub fn encode(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        let mapped = if c.is_whitespace() || c == '-' {
            '-'
        } else if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            continue;
        };
        if mapped == '-' && out.ends_with('-') {
            continue;
        }
        out.push(mapped);
    }
    out
}

/// Best-effort display string for a slug: separators become spaces.
///
/// This is for display fallbacks only and is never an authoritative lookup key.
pub fn decode(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Build the `/<categoryId>/<slug>` path for an item.
pub fn build_path(category_id: &str, item_name: &str) -> String {
    let slug = encode(item_name);
    let mut path = String::with_capacity(category_id.len() + slug.len() + 2);
    path.push('/');
    path.push_str(category_id);
    path.push('/');
    path.push_str(&slug);
    path
}

/// Convert a path into its `#`-prefixed fragment form.
pub fn to_fragment(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    out.push('#');
    out.push_str(path);
    out
}

/// A path that split cleanly into a category and a slug.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParsedPath {
    /// Category identifier (first segment).
    pub category_id: String,
    /// Item slug (second segment), compared against `encode(name)` of known items.
    pub slug: String,
}

/// Why a path failed to parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The path did not begin with `/`.
    MissingLeadingSeparator,
    /// The path did not have exactly two segments after the leading separator.
    SegmentCount(usize),
    /// One of the two segments was empty.
    EmptySegment,
}

impl core::fmt::Display for PathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingLeadingSeparator => f.write_str("path does not start with '/'"),
            Self::SegmentCount(n) => write!(f, "expected 2 path segments, found {n}"),
            Self::EmptySegment => f.write_str("path has an empty segment"),
        }
    }
}

impl core::error::Error for PathError {}

/// Parse a `/<categoryId>/<slug>` path.
///
/// Valid only if the path splits into exactly two non-empty segments after the
/// leading separator. A trailing `/` counts as an extra (empty) segment.
pub fn parse_path(path: &str) -> Result<ParsedPath, PathError> {
    let rest = path
        .strip_prefix('/')
        .ok_or(PathError::MissingLeadingSeparator)?;
    let count = rest.split('/').count();
    if count != 2 {
        return Err(PathError::SegmentCount(count));
    }
    let Some((category_id, slug)) = rest.split_once('/') else {
        return Err(PathError::SegmentCount(1));
    };
    if category_id.is_empty() || slug.is_empty() {
        return Err(PathError::EmptySegment);
    }
    Ok(ParsedPath {
        category_id: category_id.to_owned(),
        slug: slug.to_owned(),
    })
}
