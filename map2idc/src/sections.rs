use indexmap::IndexMap;

/// Title of the section listing the segments of the image.
pub const MEMORY_MAP: &str = "Memory map:";

/// Title of the section listing the symbols placed in `segment`.
pub fn layout_title(segment: &str) -> String {
    format!("{} section layout", segment)
}

// ----------------------------------------------------------------------------
// Sections

/// Map file body lines, keyed by the title line above them.
///
/// Keys stay in first-seen order. A title that shows up twice keeps the lines
/// of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections(IndexMap<String, Vec<String>>);

impl Sections {
    pub fn new() -> Self {
        Sections(IndexMap::new())
    }

    /// Splits raw map lines into titled blocks.
    ///
    /// - `""` ends the current block.
    /// - A line not starting with a space is a title.
    /// - Anything else is a body line and is kept verbatim.
    pub fn split<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sections = Sections::new();
        let mut title = String::new();
        let mut body: Vec<String> = vec![];

        for line in lines {
            let line = line.as_ref();
            if line.is_empty() {
                sections.commit(&title, &mut body);
            } else if !line.starts_with(' ') {
                // Lines gathered so far belong to the previous title
                sections.commit(&title, &mut body);
                title = line.trim().to_string();
            } else {
                body.push(line.to_string());
            }
        }
        sections.commit(&title, &mut body);

        sections
    }

    fn commit(&mut self, title: &str, body: &mut Vec<String>) {
        if !body.is_empty() {
            self.insert(title.to_string(), std::mem::take(body));
        }
    }

    fn insert(&mut self, title: String, lines: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(title, lines)
    }

    pub fn get(&self, title: &str) -> Option<&[String]> {
        self.0.get(title).map(|lines| lines.as_slice())
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::str::FromStr for Sections {
    type Err = std::convert::Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Sections::split(text.lines()))
    }
}
