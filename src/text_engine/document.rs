//! Page content: lines of text plus the links found in them

use unicode_width::UnicodeWidthChar;

/// Schemes recognized as link targets in page text
const LINK_SCHEMES: [&str; 5] = ["https://", "http://", "file:", "qrc:", "about:"];

/// Bare URL found in page text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column position (0-indexed, in characters not bytes)
    pub col: u16,
    /// Length in characters
    pub len: u16,
    pub target: String,
}

impl Link {
    pub fn contains(&self, line: u32, col: u16) -> bool {
        self.line == line && col >= self.col && col < self.col.saturating_add(self.len)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub lines: Vec<String>,
    pub links: Vec<Link>,
}

impl Document {
    /// Parses text; the title is the first `# ` heading, else `fallback_title`.
    pub fn parse(text: &str, fallback_title: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();

        let title = lines
            .iter()
            .find_map(|line| line.strip_prefix("# "))
            .map(|heading| heading.trim().to_string())
            .unwrap_or_else(|| fallback_title.to_string());

        let links = lines
            .iter()
            .enumerate()
            .flat_map(|(line_num, line)| find_links(line, line_num as u32))
            .collect();

        Self {
            title,
            lines,
            links,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn link_at(&self, line: u32, col: u16) -> Option<&Link> {
        self.links.iter().find(|link| link.contains(line, col))
    }

    /// Like `link_at`, but `column` is a display column on the drawn line
    pub fn link_at_column(&self, line: u32, column: u16) -> Option<&Link> {
        let text = self.lines.get(line as usize)?;
        let col = char_at_column(text, column)?;
        self.link_at(line, col)
    }
}

/// Index of the character drawn at display `column`.
/// Wide characters span two columns; zero-width ones are never hit.
fn char_at_column(line: &str, column: u16) -> Option<u16> {
    let column = column as usize;
    let mut start = 0usize;
    for (idx, ch) in line.chars().enumerate() {
        let end = start + ch.width().unwrap_or(0);
        if column >= start && column < end {
            return Some(idx as u16);
        }
        if start > column {
            break;
        }
        start = end;
    }
    None
}

/// Finds whitespace-separated tokens that start with a known scheme.
/// Surrounding brackets and trailing punctuation are not part of the link.
fn find_links(line: &str, line_num: u32) -> Vec<Link> {
    let mut links = Vec::new();
    let mut char_col = 0usize;

    for token in line.split_inclusive(char::is_whitespace) {
        let token_chars = token.chars().count();
        let word = token.trim_end();

        let leading = word
            .chars()
            .take_while(|c| matches!(c, '(' | '<' | '[' | '"' | '\''))
            .count();
        let candidate: String = word.chars().skip(leading).collect();
        let target = candidate.trim_end_matches(|c: char| {
            matches!(c, '.' | ',' | ';' | ':' | ')' | '>' | ']' | '"' | '\'' | '!' | '?')
        });

        let is_link = LINK_SCHEMES
            .iter()
            .any(|scheme| target.starts_with(scheme) && target.len() > scheme.len());
        if is_link {
            links.push(Link {
                line: line_num,
                col: (char_col + leading) as u16,
                len: target.chars().count() as u16,
                target: target.to_string(),
            });
        }

        char_col += token_chars;
    }

    links
}
