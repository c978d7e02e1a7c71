use serde::Deserialize;

use super::node_kind::NodeKind;

/// Byte offsets of a token into the original query text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A leaf token produced by the external parser: raw source text plus span.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeafToken {
    pub text: String,
    #[serde(default)]
    pub span: Span,
}

impl LeafToken {
    pub fn new(text: impl Into<String>) -> Self {
        LeafToken {
            text: text.into(),
            span: Span::default(),
        }
    }
}

/// A grammar-rule node handed over by the external parser.
///
/// `errors` is non-empty only at the tree root, when the parse failed.
/// The tree is produced once and read-only for the whole compilation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParseNode {
    pub name: String,
    #[serde(default)]
    pub result: Vec<ParseChild>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One child of a [`ParseNode`].
///
/// The parser wraps every child in a `{node, children}` pair; when both
/// refer to the same leaf value the child is a terminal and its text is
/// emitted literally. Here that distinction is a closed enum. `token`
/// carries the raw source slice covered by a nested rule, used wherever
/// the compiler passes source text through verbatim (return items,
/// ORDER BY / SKIP / LIMIT, UNION keywords).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawChild")]
pub enum ParseChild {
    Terminal(LeafToken),
    Rule { token: LeafToken, tree: ParseNode },
}

/// Wire shape of a child wrapper in the parser's JSON output.
#[derive(Deserialize)]
struct RawChild {
    node: LeafToken,
    children: RawSubtree,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSubtree {
    Rule(ParseNode),
    Leaf(LeafToken),
}

impl From<RawChild> for ParseChild {
    fn from(raw: RawChild) -> Self {
        match raw.children {
            RawSubtree::Rule(tree) => ParseChild::Rule {
                token: raw.node,
                tree,
            },
            RawSubtree::Leaf(_) => ParseChild::Terminal(raw.node),
        }
    }
}

impl ParseNode {
    /// Build a rule node, mainly for assembling trees by hand.
    pub fn rule(name: impl Into<String>, result: Vec<ParseChild>) -> Self {
        ParseNode {
            name: name.into(),
            result,
            errors: Vec::new(),
        }
    }

    /// The grammar-rule kind of this node, if the name is a known rule.
    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::parse(&self.name)
    }

    /// Nested rule children, skipping terminals.
    pub fn rules(&self) -> impl Iterator<Item = &ParseNode> {
        self.result.iter().filter_map(ParseChild::as_rule)
    }

    /// First nested rule child, if any.
    pub fn first_rule(&self) -> Option<&ParseNode> {
        self.rules().next()
    }

    /// Raw source text covered by this node: every child's token text,
    /// in order.
    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        for child in &self.result {
            out.push_str(&child.token().text);
        }
        out
    }
}

impl ParseChild {
    /// Build a terminal child, mainly for assembling trees by hand.
    pub fn terminal(text: impl Into<String>) -> Self {
        ParseChild::Terminal(LeafToken::new(text))
    }

    /// Wrap a subtree, synthesizing the covering token from its leaves.
    pub fn rule(tree: ParseNode) -> Self {
        let token = LeafToken::new(tree.raw_text());
        ParseChild::Rule { token, tree }
    }

    /// Wrap a subtree with an explicit covering token text.
    pub fn rule_with_text(text: impl Into<String>, tree: ParseNode) -> Self {
        ParseChild::Rule {
            token: LeafToken::new(text),
            tree,
        }
    }

    pub fn as_rule(&self) -> Option<&ParseNode> {
        match self {
            ParseChild::Rule { tree, .. } => Some(tree),
            ParseChild::Terminal(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ParseChild::Terminal(_))
    }

    /// The token of this child: the leaf itself, or the covering token of
    /// a nested rule.
    pub fn token(&self) -> &LeafToken {
        match self {
            ParseChild::Terminal(token) => token,
            ParseChild::Rule { token, .. } => token,
        }
    }
}
