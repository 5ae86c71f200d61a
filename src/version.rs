//! Dictionary version metadata
//!
//! Standard files carry their release number inside the license comment
//! header ("... WordNet 3.0 ..."). Extraction runs once at store
//! construction, on a private cursor, so it never disturbs lookup state.

use std::fmt;

use crate::buffer::Buffer;
use crate::content::ContentType;

/// Marker preceding the release number in the comment header
const VERSION_MARKER: &str = "WordNet ";

/// A dictionary release number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub bugfix: u16,
}

impl Version {
    pub fn new(major: u16, minor: u16, bugfix: u16) -> Self {
        Self {
            major,
            minor,
            bugfix,
        }
    }

    /// Parse a dotted release number ("3.0", "2.1.1"); the bugfix component
    /// is optional and defaults to zero
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let bugfix = match parts.next() {
            Some(part) if !part.is_empty() => part.parse().ok()?,
            _ => 0,
        };
        Some(Self {
            major,
            minor,
            bugfix,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bugfix > 0 {
            write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
        } else {
            write!(f, "{}.{}", self.major, self.minor)
        }
    }
}

/// Scan the buffer's leading comment lines for a release marker.
///
/// Content types without a comment detector carry no header to scan, and
/// the scan stops at the first non-comment line.
pub(crate) fn extract_version(content: &ContentType, buffer: &Buffer) -> Option<Version> {
    let detector = content.detector()?;
    let mut cursor = buffer.cursor();

    while let Some(line) = cursor.read_line() {
        if !detector.is_comment_line(&line) {
            return None;
        }
        if let Some(version) = parse_marker_line(&line) {
            return Some(version);
        }
    }
    None
}

fn parse_marker_line(line: &str) -> Option<Version> {
    let idx = line.find(VERSION_MARKER)?;
    let rest = &line[idx + VERSION_MARKER.len()..];
    let token: String = rest
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    Version::parse(&token)
}
