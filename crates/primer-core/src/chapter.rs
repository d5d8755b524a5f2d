//! Chapter identity and content.
//!
//! A chapter is one handbook page. Its stable key is derived from the page
//! metadata with the precedence id, then slug, then title; local files
//! without metadata fall back to a caller-provided key (the file stem).

use serde::{Deserialize, Serialize};

/// Metadata carried in a chapter file's front matter block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMeta {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ChapterMeta {
    /// The stable chapter key: id, else slug, else title. Empty values are
    /// treated as absent.
    pub fn chapter_key(&self) -> Option<&str> {
        non_empty(&self.id)
            .or_else(|| non_empty(&self.slug))
            .or_else(|| non_empty(&self.title))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A chapter: its metadata and its markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub meta: ChapterMeta,
    pub body: String,
}

impl Chapter {
    /// Parses a markdown source, splitting off a leading front matter block
    /// delimited by `---` lines when one is present.
    ///
    /// Only the `id`, `slug`, and `title` keys are recognized; everything
    /// else in the block is ignored. Sources without front matter become a
    /// chapter with empty metadata and the full source as body.
    pub fn parse(source: &str) -> Self {
        let Some(rest) = source.strip_prefix("---\n").or_else(|| source.strip_prefix("---\r\n"))
        else {
            return Self {
                meta: ChapterMeta::default(),
                body: source.to_string(),
            };
        };

        let Some(end) = rest.find("\n---") else {
            return Self {
                meta: ChapterMeta::default(),
                body: source.to_string(),
            };
        };

        let block = &rest[..end];
        let body = rest[end + 4..]
            .trim_start_matches('-')
            .trim_start_matches(['\r', '\n']);

        let mut meta = ChapterMeta::default();
        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim().trim_matches('"').trim_matches('\'');
            match key.trim() {
                "id" => meta.id = Some(value.to_string()),
                "slug" => meta.slug = Some(value.to_string()),
                "title" => meta.title = Some(value.to_string()),
                _ => {}
            }
        }

        Self {
            meta,
            body: body.to_string(),
        }
    }

    /// The chapter key, falling back to `fallback` when the metadata has none.
    pub fn key_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.meta.chapter_key().unwrap_or(fallback)
    }
}
