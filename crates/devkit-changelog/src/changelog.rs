use std::path::Path;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use pulldown_cmark_to_cmark::{Options as CmarkOptions, cmark_with_options};
use semver::Version;

use crate::error::ChangelogError;

fn render_options() -> CmarkOptions<'static> {
    CmarkOptions {
        list_token: '-',
        code_block_token_count: 3,
        ..CmarkOptions::default()
    }
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

#[derive(Debug)]
enum BlockKind {
    /// A depth-1 heading and the version its text parses as, if any.
    TopHeading(Option<Version>),
    Other,
}

/// One top-level block of the document: its opening event through the matching close.
#[derive(Debug)]
struct Block<'a> {
    kind: BlockKind,
    events: Vec<Event<'a>>,
}

#[derive(Debug, Clone)]
pub struct Changelog {
    content: String,
}

impl Changelog {
    #[must_use]
    pub fn parse(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ChangelogError> {
        let content = std::fs::read_to_string(path).map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { content })
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Versions of every version marker, in document order.
    #[must_use]
    pub fn versions(&self) -> Vec<Version> {
        self.blocks()
            .into_iter()
            .filter_map(|block| match block.kind {
                BlockKind::TopHeading(version) => version,
                BlockKind::Other => None,
            })
            .collect()
    }

    /// Extracts the notes for `version`: every block after its marker up to the
    /// next depth-1 heading, re-rendered as markdown.
    ///
    /// Returns `Ok(None)` when no marker matches.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::Render` if the section cannot be serialized.
    pub fn section(&self, version: &Version) -> Result<Option<String>, ChangelogError> {
        let blocks = self.blocks();

        let Some(marker) = blocks.iter().position(
            |block| matches!(&block.kind, BlockKind::TopHeading(Some(v)) if v == version),
        ) else {
            return Ok(None);
        };

        let events: Vec<&Event<'_>> = blocks[marker + 1..]
            .iter()
            .take_while(|block| matches!(block.kind, BlockKind::Other))
            .flat_map(|block| block.events.iter())
            .collect();

        let mut rendered = String::new();
        cmark_with_options(events.into_iter(), &mut rendered, render_options()).map_err(
            |source| ChangelogError::Render {
                version: version.to_string(),
                source,
            },
        )?;

        Ok(Some(rendered.trim().to_string()))
    }

    fn blocks(&self) -> Vec<Block<'_>> {
        let mut blocks = Vec::new();
        let mut current: Option<Block<'_>> = None;
        let mut heading_text: Option<String> = None;
        let mut depth = 0usize;

        for event in Parser::new_ext(&self.content, parser_options()) {
            match &event {
                Event::Start(tag) => {
                    if depth == 0 {
                        let is_top_heading = matches!(
                            tag,
                            Tag::Heading {
                                level: HeadingLevel::H1,
                                ..
                            }
                        );
                        heading_text = is_top_heading.then(String::new);
                        current = Some(Block {
                            kind: BlockKind::Other,
                            events: Vec::new(),
                        });
                    }
                    depth += 1;
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Text(text) | Event::Code(text) => {
                    if let Some(heading) = heading_text.as_mut() {
                        heading.push_str(text);
                    }
                }
                _ => {}
            }

            match current.as_mut() {
                Some(block) => block.events.push(event),
                None => blocks.push(Block {
                    kind: BlockKind::Other,
                    events: vec![event],
                }),
            }

            if depth == 0 {
                if let Some(mut block) = current.take() {
                    if let Some(text) = heading_text.take() {
                        block.kind = BlockKind::TopHeading(marker_version(&text));
                    }
                    blocks.push(block);
                }
            }
        }

        blocks
    }
}

/// Parses heading text as a version marker, ignoring decorative brackets.
fn marker_version(text: &str) -> Option<Version> {
    let text = text.trim();
    let text = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text)
        .trim();
    Version::parse(text).ok()
}
