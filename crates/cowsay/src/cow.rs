//! Composes bubble and cow into the final output.
use crate::{
    bubble::{Bubble, BubbleKind},
    face::Face,
    message::{Message, DEFAULT_WRAP},
    template::{ArtBody, TemplateResource},
    Result,
};

/// Substitutes the face and connector into `art` and puts `bubble` on top.
///
/// An empty bubble yields the art alone.
pub fn format_cow(art: &ArtBody, face: &Face, bubble: &Bubble) -> String {
    let cow = art.render(face, bubble.connector());
    if bubble.is_empty() {
        return cow;
    }
    let mut out = String::with_capacity(bubble.text().len() + 1 + cow.len());
    out.push_str(bubble.text());
    out.push('\n');
    out.push_str(&cow);
    out
}

/// Options for one render: mood, face overrides, bubble kind and wrap width.
#[derive(Clone, Debug)]
pub struct Cowsay {
    mood: Option<char>,
    eyes: Option<String>,
    tongue: Option<String>,
    kind: BubbleKind,
    wrap: usize,
}

impl Default for Cowsay {
    fn default() -> Self {
        Self {
            mood: None,
            eyes: None,
            tongue: None,
            kind: BubbleKind::Speech,
            wrap: DEFAULT_WRAP,
        }
    }
}

impl Cowsay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn think() -> Self {
        Self::default().with_kind(BubbleKind::Thought)
    }

    pub fn with_kind(mut self, kind: BubbleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_mood(mut self, mood: Option<char>) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_eyes(mut self, eyes: impl Into<String>) -> Self {
        self.eyes = Some(eyes.into());
        self
    }

    pub fn with_tongue(mut self, tongue: impl Into<String>) -> Self {
        self.tongue = Some(tongue.into());
        self
    }

    /// Wrap column, 0 disables wrapping.
    pub fn with_wrap(mut self, wrap: usize) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn face(&self) -> Result<Face> {
        Face::resolve(self.mood, self.eyes.as_deref(), self.tongue.as_deref())
    }

    /// Renders `message` with the cow from `resource`.
    ///
    /// An empty message renders to an empty string without touching the
    /// template. Parse errors carry the resource name.
    pub fn render(&self, resource: &TemplateResource, message: &str) -> Result<String> {
        let face = self.face()?;
        if message.is_empty() {
            return Ok(String::new());
        }
        let template = resource.parse()?;
        let bubble = Message::new(message, self.kind).with_wrap(self.wrap).bubble();
        Ok(format_cow(&template.body, &face, &bubble))
    }
}
