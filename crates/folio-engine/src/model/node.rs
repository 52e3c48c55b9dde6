use serde::{Deserialize, Serialize};

/// Inline formatting marks a text run can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Superscript,
    Subscript,
}

impl Mark {
    pub const ALL: [Mark; 7] = [
        Mark::Bold,
        Mark::Italic,
        Mark::Underline,
        Mark::Strikethrough,
        Mark::Code,
        Mark::Superscript,
        Mark::Subscript,
    ];
}

/// Leaf node: literal text plus inline formatting.
///
/// Serialized in the editor's leaf shape, where every mark is a boolean key on
/// the text object (`{"text": "hi", "bold": true}`) and absent keys mean the
/// mark is off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub superscript: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub subscript: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        default,
        rename = "bgColor",
        alias = "backgroundColor",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    /// Symbolic size key, resolved through the font size lookup table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    /// Symbolic family key, resolved through the font family lookup table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn has_mark(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Strikethrough => self.strikethrough,
            Mark::Code => self.code,
            Mark::Superscript => self.superscript,
            Mark::Subscript => self.subscript,
        }
    }

    pub fn set_mark(&mut self, mark: Mark, on: bool) {
        let flag = match mark {
            Mark::Bold => &mut self.bold,
            Mark::Italic => &mut self.italic,
            Mark::Underline => &mut self.underline,
            Mark::Strikethrough => &mut self.strikethrough,
            Mark::Code => &mut self.code,
            Mark::Superscript => &mut self.superscript,
            Mark::Subscript => &mut self.subscript,
        };
        *flag = on;
    }

    /// Marks that are switched on, in `Mark::ALL` order
    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        Mark::ALL.into_iter().filter(|mark| self.has_mark(*mark))
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.set_mark(mark, true);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_font_size(mut self, key: impl Into<String>) -> Self {
        self.font_size = Some(key.into());
        self
    }

    pub fn with_font_family(mut self, key: impl Into<String>) -> Self {
        self.font_family = Some(key.into());
        self
    }
}

/// Semantic kind of a container node, with the attributes specific to it.
///
/// The `type` tag uses the editor's names; the hyphenated list/table names
/// also accept their camelCase spelling. Any other tag deserializes to
/// `Unknown` so a single unrecognized node never rejects a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementKind {
    Paragraph,
    HeadingOne,
    HeadingTwo,
    HeadingThree,
    Blockquote,
    AlignLeft,
    AlignCenter,
    AlignRight,
    OrderedList,
    UnorderedList,
    #[serde(rename = "list-item", alias = "listItem")]
    ListItem,
    Table,
    #[serde(rename = "table-row", alias = "tableRow")]
    TableRow,
    #[serde(rename = "table-cell", alias = "tableCell")]
    TableCell,
    Link {
        url: String,
    },
    Image {
        #[serde(alias = "url")]
        src: String,
    },
    Video {
        #[serde(alias = "url")]
        src: String,
    },
    Equation {
        #[serde(rename = "math", alias = "formula")]
        formula: String,
        #[serde(default)]
        inline: bool,
    },
    #[serde(other)]
    Unknown,
}

impl ElementKind {
    /// The editor's tag for this kind
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Paragraph => "paragraph",
            ElementKind::HeadingOne => "headingOne",
            ElementKind::HeadingTwo => "headingTwo",
            ElementKind::HeadingThree => "headingThree",
            ElementKind::Blockquote => "blockquote",
            ElementKind::AlignLeft => "alignLeft",
            ElementKind::AlignCenter => "alignCenter",
            ElementKind::AlignRight => "alignRight",
            ElementKind::OrderedList => "orderedList",
            ElementKind::UnorderedList => "unorderedList",
            ElementKind::ListItem => "list-item",
            ElementKind::Table => "table",
            ElementKind::TableRow => "table-row",
            ElementKind::TableCell => "table-cell",
            ElementKind::Link { .. } => "link",
            ElementKind::Image { .. } => "image",
            ElementKind::Video { .. } => "video",
            ElementKind::Equation { .. } => "equation",
            ElementKind::Unknown => "unknown",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ElementKind::OrderedList | ElementKind::UnorderedList)
    }

    /// Nodes that live inside a line of text rather than forming a block
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            ElementKind::Link { .. } | ElementKind::Equation { inline: true, .. }
        )
    }
}

/// Container node: a semantic kind and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(flatten)]
    pub kind: ElementKind,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(kind: ElementKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    /// An element holding a single empty text run
    pub fn empty(kind: ElementKind) -> Self {
        Self::new(kind, vec![Node::Text(TextRun::default())])
    }

    pub fn paragraph(runs: impl IntoIterator<Item = TextRun>) -> Self {
        Self::new(
            ElementKind::Paragraph,
            runs.into_iter().map(Node::Text).collect(),
        )
    }

    /// Table cell containing one empty paragraph
    pub fn table_cell() -> Self {
        Self::new(
            ElementKind::TableCell,
            vec![Element::empty(ElementKind::Paragraph).into()],
        )
    }

    /// Row of `width` empty cells
    pub fn table_row(width: usize) -> Self {
        Self::new(
            ElementKind::TableRow,
            (0..width).map(|_| Element::table_cell().into()).collect(),
        )
    }

    /// `rows` x `columns` table of empty cells
    pub fn table(rows: usize, columns: usize) -> Self {
        Self::new(
            ElementKind::Table,
            (0..rows).map(|_| Element::table_row(columns).into()).collect(),
        )
    }

    /// Concatenated text of every run below this element
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.push_text(&mut out);
        }
        out
    }
}

/// A block node: either a text leaf or a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(TextRun),
    Element(Element),
}

impl Node {
    pub fn kind(&self) -> Option<&ElementKind> {
        match self {
            Node::Element(element) => Some(&element.kind),
            Node::Text(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Node::Text(run) => Some(run),
            Node::Element(_) => None,
        }
    }

    /// Children of a container; text runs have none
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element(element) => Some(&mut element.children),
            Node::Text(_) => None,
        }
    }

    pub fn is_kind(&self, predicate: impl FnOnce(&ElementKind) -> bool) -> bool {
        self.kind().is_some_and(predicate)
    }

    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(run) => out.push_str(&run.text),
            Node::Element(element) => {
                for child in &element.children {
                    child.push_text(out);
                }
            }
        }
    }
}

impl From<TextRun> for Node {
    fn from(run: TextRun) -> Self {
        Node::Text(run)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
