//! Speech and thought bubbles around already wrapped message lines.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub enum BubbleKind {
    #[default]
    Speech,
    Thought,
}

impl BubbleKind {
    /// Glyph drawn between the bubble and the cow (`$thoughts`).
    pub fn connector(self) -> &'static str {
        match self {
            BubbleKind::Speech => "\\",
            BubbleKind::Thought => "o",
        }
    }

    fn borders(self) -> &'static Borders {
        match self {
            BubbleKind::Speech => &SPEECH_BORDERS,
            BubbleKind::Thought => &THOUGHT_BORDERS,
        }
    }
}

/// Left/right glyph pairs per row position.
struct Borders {
    single: (char, char),
    first: (char, char),
    middle: (char, char),
    last: (char, char),
}

const SPEECH_BORDERS: Borders = Borders {
    single: ('<', '>'),
    first: ('/', '\\'),
    middle: ('|', '|'),
    last: ('\\', '/'),
};

const THOUGHT_BORDERS: Borders = Borders {
    single: ('(', ')'),
    first: ('(', ')'),
    middle: ('(', ')'),
    last: ('(', ')'),
};

const TOP_FILL: &str = "_";
const BOTTOM_FILL: &str = "-";

/// A rendered bubble plus the connector glyph linking it to the cow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bubble {
    text: String,
    kind: BubbleKind,
}

impl Bubble {
    pub fn new<S: AsRef<str>>(kind: BubbleKind, lines: &[S], width: usize) -> Self {
        Self {
            text: build(kind, lines, width),
            kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> BubbleKind {
        self.kind
    }

    pub fn connector(&self) -> &'static str {
        self.kind.connector()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub fn build_speech<S: AsRef<str>>(lines: &[S], width: usize) -> String {
    build(BubbleKind::Speech, lines, width)
}

pub fn build_thought<S: AsRef<str>>(lines: &[S], width: usize) -> String {
    build(BubbleKind::Thought, lines, width)
}

/// Draws the bubble. Rows are never truncated: when a line is wider than
/// `width` the whole bubble grows to that line's width.
fn build<S: AsRef<str>>(kind: BubbleKind, lines: &[S], width: usize) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let width = lines
        .iter()
        .map(|l| l.as_ref().chars().count())
        .fold(width, usize::max);
    let borders = kind.borders();
    let last = lines.len() - 1;

    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(format!(" {} ", TOP_FILL.repeat(width + 2)));
    for (i, line) in lines.iter().enumerate() {
        let (left, right) = if last == 0 {
            borders.single
        } else if i == 0 {
            borders.first
        } else if i == last {
            borders.last
        } else {
            borders.middle
        };
        let line = line.as_ref();
        let pad = " ".repeat(width - line.chars().count());
        rows.push(format!("{left} {line}{pad} {right}"));
    }
    rows.push(format!(" {} ", BOTTOM_FILL.repeat(width + 2)));
    rows.join("\n")
}
