use lazy_static::lazy_static;
use std::collections::HashMap;

/// Every grammar rule the compiler has a translation rule for.
///
/// Dispatching on this closed set instead of raw rule names means each
/// dispatcher matches exhaustively; a name missing from the table (or a
/// kind the dispatcher has no arm for) surfaces as an unsupported
/// construct rather than silently falling through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Cypher,
    Statement,
    Query,
    RegularQuery,
    StandaloneQuery,
    Union,
    SingleQuery,
    SinglePartQuery,
    MultiPartQueries,
    ReadingClause,
    UpdatingClause,
    Match,
    Where,
    Pattern,
    PatternPart,
    AnonymousPatternPart,
    PatternElement,
    NodePattern,
    NodeLabels,
    NodeLabel,
    LabelName,
    Properties,
    MapLiteral,
    PatternElementChain,
    RelationshipPattern,
    RelationshipDetail,
    RelationshipTypes,
    RelTypeName,
    Dash,
    LeftArrowHead,
    RightArrowHead,
    Return,
    ReturnBody,
    ReturnItems,
    Order,
    Skip,
    Limit,
    Expression,
    OrExpression,
    XorExpression,
    AndExpression,
    NotExpression,
    ComparisonExpression,
    PartialComparisonExpression,
    AddOrSubtractExpression,
    MultiplyDivideModuloExpression,
    PowerOfExpression,
    UnaryAddOrSubtractExpression,
    StringListNullOperatorExpression,
    NullOperatorExpression,
    PropertyOrLabelsExpression,
    PropertyLookup,
    SchemaName,
    PropertyKeyName,
    Atom,
    FunctionInvocation,
    FunctionName,
    Literal,
    NumberLiteral,
    DoubleLiteral,
    IntegerLiteral,
    Variable,
    SymbolicName,
    ParenthesizedExpression,
}

/// Rule-name table, keyed by the grammar's tags.
const NAME_TABLE: &[(&str, NodeKind)] = &[
    ("Cypher", NodeKind::Cypher),
    ("Statement", NodeKind::Statement),
    ("Query", NodeKind::Query),
    ("RegularQuery", NodeKind::RegularQuery),
    ("StandaloneQuery", NodeKind::StandaloneQuery),
    ("Union", NodeKind::Union),
    ("SingleQuery", NodeKind::SingleQuery),
    ("SinglePartQuery", NodeKind::SinglePartQuery),
    ("MultiPartQueries", NodeKind::MultiPartQueries),
    ("ReadingClause", NodeKind::ReadingClause),
    ("UpdatingClause", NodeKind::UpdatingClause),
    ("Match", NodeKind::Match),
    ("Where", NodeKind::Where),
    ("Pattern", NodeKind::Pattern),
    ("PatternPart", NodeKind::PatternPart),
    ("AnonymousPatternPart", NodeKind::AnonymousPatternPart),
    ("PatternElement", NodeKind::PatternElement),
    ("NodePattern", NodeKind::NodePattern),
    ("NodeLabels", NodeKind::NodeLabels),
    ("NodeLabel", NodeKind::NodeLabel),
    ("LabelName", NodeKind::LabelName),
    ("Properties", NodeKind::Properties),
    ("MapLiteral", NodeKind::MapLiteral),
    ("PatternElementChain", NodeKind::PatternElementChain),
    ("RelationshipPattern", NodeKind::RelationshipPattern),
    ("RelationshipDetail", NodeKind::RelationshipDetail),
    ("RelationshipTypes", NodeKind::RelationshipTypes),
    ("RelTypeName", NodeKind::RelTypeName),
    ("Dash", NodeKind::Dash),
    ("LeftArrowHead", NodeKind::LeftArrowHead),
    ("RightArrowHead", NodeKind::RightArrowHead),
    ("Return", NodeKind::Return),
    ("ReturnBody", NodeKind::ReturnBody),
    ("ReturnItems", NodeKind::ReturnItems),
    ("Order", NodeKind::Order),
    ("Skip", NodeKind::Skip),
    ("Limit", NodeKind::Limit),
    ("Expression", NodeKind::Expression),
    ("OrExpression", NodeKind::OrExpression),
    ("XorExpression", NodeKind::XorExpression),
    ("AndExpression", NodeKind::AndExpression),
    ("NotExpression", NodeKind::NotExpression),
    ("ComparisonExpression", NodeKind::ComparisonExpression),
    ("PartialComparisonExpression", NodeKind::PartialComparisonExpression),
    ("AddOrSubtractExpression", NodeKind::AddOrSubtractExpression),
    (
        "MultiplyDivideModuloExpression",
        NodeKind::MultiplyDivideModuloExpression,
    ),
    ("PowerOfExpression", NodeKind::PowerOfExpression),
    (
        "UnaryAddOrSubtractExpression",
        NodeKind::UnaryAddOrSubtractExpression,
    ),
    (
        "StringListNullOperatorExpression",
        NodeKind::StringListNullOperatorExpression,
    ),
    ("NullOperatorExpression", NodeKind::NullOperatorExpression),
    (
        "PropertyOrLabelsExpression",
        NodeKind::PropertyOrLabelsExpression,
    ),
    ("PropertyLookup", NodeKind::PropertyLookup),
    ("SchemaName", NodeKind::SchemaName),
    ("PropertyKeyName", NodeKind::PropertyKeyName),
    ("Atom", NodeKind::Atom),
    ("FunctionInvocation", NodeKind::FunctionInvocation),
    ("FunctionName", NodeKind::FunctionName),
    ("Literal", NodeKind::Literal),
    ("NumberLiteral", NodeKind::NumberLiteral),
    ("DoubleLiteral", NodeKind::DoubleLiteral),
    ("IntegerLiteral", NodeKind::IntegerLiteral),
    ("Variable", NodeKind::Variable),
    ("SymbolicName", NodeKind::SymbolicName),
    ("ParenthesizedExpression", NodeKind::ParenthesizedExpression),
];

lazy_static! {
    static ref NODE_KINDS: HashMap<&'static str, NodeKind> =
        NAME_TABLE.iter().copied().collect();
}

impl NodeKind {
    /// Look up a grammar-rule tag. `None` means the construct has no
    /// translation rule anywhere in the compiler.
    pub fn parse(name: &str) -> Option<NodeKind> {
        NODE_KINDS.get(name).copied()
    }
}
