/// Which image directory a topic's assets are resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Lithography,
    Characterization,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Lithography => "Lithography",
            Category::Characterization => "Characterization",
        }
    }
}

/// Identifies one openable popup topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicId {
    LithoProcess,
    CharProcess,
    LithoTechnique(usize),
    CharTechnique(usize),
}

/// One section of a popup: heading, body text, optional image file.
///
/// Immutable after construction; the popup never mutates section data.
#[derive(Clone, Debug)]
pub struct SectionRecord {
    pub heading: String,
    pub body: String,
    pub image: Option<String>,
}

impl SectionRecord {
    pub fn new(heading: &str, body: &str, image: Option<&str>) -> Self {
        Self {
            heading: heading.to_string(),
            body: body.to_string(),
            image: image.map(str::to_string),
        }
    }
}

/// A popup's worth of content: title plus ordered sections.
#[derive(Clone, Debug)]
pub struct Topic {
    pub title: String,
    pub category: Category,
    pub sections: Vec<SectionRecord>,
}
