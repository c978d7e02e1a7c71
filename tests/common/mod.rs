//! Builders assembling parser-shaped trees for the integration tests.
//!
//! The shapes mirror what the external grammar emits: every wrapper level
//! is present, so the translator walks the same spines it would see in
//! production.

use gander::{ParseChild, ParseNode};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rule(name: &str, children: Vec<ParseChild>) -> ParseChild {
    ParseChild::rule(ParseNode::rule(name, children))
}

pub fn symbolic(text: &str) -> ParseNode {
    ParseNode::rule("SymbolicName", vec![ParseChild::terminal(text)])
}

pub fn variable(name: &str) -> ParseNode {
    ParseNode::rule("Variable", vec![ParseChild::rule(symbolic(name))])
}

fn schema_name(text: &str) -> ParseNode {
    ParseNode::rule("SchemaName", vec![ParseChild::rule(symbolic(text))])
}

/// `alias.key` down the Atom / PropertyLookup spine.
pub fn property_lookup(alias: &str, key: &str) -> ParseNode {
    ParseNode::rule(
        "PropertyOrLabelsExpression",
        vec![
            rule("Atom", vec![ParseChild::rule(variable(alias))]),
            rule(
                "PropertyLookup",
                vec![
                    ParseChild::terminal("."),
                    rule("PropertyKeyName", vec![ParseChild::rule(schema_name(key))]),
                ],
            ),
        ],
    )
}

pub fn integer(text: &str) -> ParseNode {
    ParseNode::rule(
        "PropertyOrLabelsExpression",
        vec![rule(
            "Atom",
            vec![rule(
                "Literal",
                vec![rule(
                    "NumberLiteral",
                    vec![rule("IntegerLiteral", vec![ParseChild::terminal(text)])],
                )],
            )],
        )],
    )
}

/// A double-quoted string literal as the parser delivers it.
pub fn string_literal(text: &str) -> ParseNode {
    ParseNode::rule(
        "PropertyOrLabelsExpression",
        vec![rule(
            "Atom",
            vec![rule(
                "Literal",
                vec![ParseChild::terminal(format!("\"{text}\""))],
            )],
        )],
    )
}

/// Wrap an operand or comparison in the boolean spine up to `Expression`.
pub fn expression(inner: ParseNode) -> ParseNode {
    let not = ParseNode::rule("NotExpression", vec![ParseChild::rule(inner)]);
    let and = ParseNode::rule("AndExpression", vec![ParseChild::rule(not)]);
    let xor = ParseNode::rule("XorExpression", vec![ParseChild::rule(and)]);
    let or = ParseNode::rule("OrExpression", vec![ParseChild::rule(xor)]);
    ParseNode::rule("Expression", vec![ParseChild::rule(or)])
}

/// `lhs op rhs [op rhs]...` as one comparison expression.
pub fn comparison(lhs: ParseNode, rest: Vec<(&str, ParseNode)>) -> ParseNode {
    let mut children = vec![ParseChild::rule(lhs)];
    for (operator, rhs) in rest {
        children.push(rule(
            "PartialComparisonExpression",
            vec![
                ParseChild::terminal(format!("{operator} ")),
                ParseChild::rule(rhs),
            ],
        ));
    }
    ParseNode::rule("ComparisonExpression", children)
}

/// `{key: value, ...}` wrapped as a `Properties` subtree.
pub fn properties(pairs: Vec<(&str, ParseNode)>) -> ParseNode {
    let mut children = vec![ParseChild::terminal("{")];
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            children.push(ParseChild::terminal(", "));
        }
        children.push(rule(
            "PropertyKeyName",
            vec![ParseChild::rule(schema_name(key))],
        ));
        children.push(ParseChild::terminal(": "));
        children.push(ParseChild::rule(expression(value)));
    }
    children.push(ParseChild::terminal("}"));
    let map = ParseNode::rule("MapLiteral", children);
    ParseNode::rule("Properties", vec![ParseChild::rule(map)])
}

pub fn node_pattern(
    var: Option<&str>,
    label: Option<&str>,
    props: Option<ParseNode>,
) -> ParseNode {
    let mut children = vec![ParseChild::terminal("(")];
    if let Some(var) = var {
        children.push(ParseChild::rule(variable(var)));
    }
    if let Some(label) = label {
        let node_label = ParseNode::rule(
            "NodeLabel",
            vec![
                ParseChild::terminal(":"),
                rule("LabelName", vec![ParseChild::rule(schema_name(label))]),
            ],
        );
        children.push(rule("NodeLabels", vec![ParseChild::rule(node_label)]));
    }
    if let Some(props) = props {
        children.push(ParseChild::rule(props));
    }
    children.push(ParseChild::terminal(")"));
    ParseNode::rule("NodePattern", children)
}

fn dash() -> ParseNode {
    ParseNode::rule("Dash", vec![ParseChild::terminal("-")])
}

pub fn relationship(
    var: Option<&str>,
    rel_type: Option<&str>,
    props: Option<ParseNode>,
) -> ParseNode {
    let mut detail = vec![ParseChild::terminal("[")];
    if let Some(var) = var {
        detail.push(ParseChild::rule(variable(var)));
    }
    if let Some(rel_type) = rel_type {
        let types = ParseNode::rule(
            "RelationshipTypes",
            vec![
                ParseChild::terminal(":"),
                rule("RelTypeName", vec![ParseChild::rule(schema_name(rel_type))]),
            ],
        );
        detail.push(ParseChild::rule(types));
    }
    if let Some(props) = props {
        detail.push(ParseChild::rule(props));
    }
    detail.push(ParseChild::terminal("]"));
    ParseNode::rule(
        "RelationshipPattern",
        vec![
            ParseChild::rule(dash()),
            rule("RelationshipDetail", detail),
            ParseChild::rule(dash()),
        ],
    )
}

/// A relationship carrying a right arrow head: `-[...]->`.
pub fn directed_relationship(rel_type: Option<&str>) -> ParseNode {
    let mut undirected = relationship(None, rel_type, None);
    undirected.result.push(ParseChild::rule(ParseNode::rule(
        "RightArrowHead",
        vec![ParseChild::terminal(">")],
    )));
    undirected
}

pub fn chain(rel: ParseNode, node: ParseNode) -> ParseNode {
    ParseNode::rule(
        "PatternElementChain",
        vec![ParseChild::rule(rel), ParseChild::rule(node)],
    )
}

pub fn pattern(head: ParseNode, chains: Vec<ParseNode>) -> ParseNode {
    let mut element = vec![ParseChild::rule(head)];
    element.extend(chains.into_iter().map(ParseChild::rule));
    let anonymous = ParseNode::rule(
        "AnonymousPatternPart",
        vec![rule("PatternElement", element)],
    );
    ParseNode::rule(
        "Pattern",
        vec![rule("PatternPart", vec![ParseChild::rule(anonymous)])],
    )
}

/// A pattern part of the form `p = (...)`, which the compiler rejects.
pub fn named_pattern(var: &str, head: ParseNode) -> ParseNode {
    let anonymous = ParseNode::rule(
        "AnonymousPatternPart",
        vec![rule("PatternElement", vec![ParseChild::rule(head)])],
    );
    let part = ParseNode::rule(
        "PatternPart",
        vec![
            ParseChild::rule(variable(var)),
            ParseChild::terminal(" = "),
            ParseChild::rule(anonymous),
        ],
    );
    ParseNode::rule("Pattern", vec![ParseChild::rule(part)])
}

pub fn where_clause(expr: ParseNode) -> ParseNode {
    ParseNode::rule(
        "Where",
        vec![
            ParseChild::terminal("WHERE"),
            ParseChild::terminal(" "),
            ParseChild::rule(expression(expr)),
        ],
    )
}

pub fn match_clause(pattern: ParseNode, filter: Option<ParseNode>) -> ParseNode {
    let mut children = vec![
        ParseChild::terminal("MATCH"),
        ParseChild::terminal(" "),
        ParseChild::rule(pattern),
    ];
    if let Some(filter) = filter {
        children.push(ParseChild::terminal(" "));
        children.push(ParseChild::rule(filter));
    }
    ParseNode::rule("Match", children)
}

pub fn optional_match_clause(pattern: ParseNode) -> ParseNode {
    ParseNode::rule(
        "Match",
        vec![
            ParseChild::terminal("OPTIONAL"),
            ParseChild::terminal(" "),
            ParseChild::terminal("MATCH"),
            ParseChild::terminal(" "),
            ParseChild::rule(pattern),
        ],
    )
}

/// `RETURN <items>` with optional verbatim modifiers such as
/// `("Order", "ORDER BY d.len")`.
pub fn return_clause(items: &str, modifiers: Vec<(&str, &str)>) -> ParseNode {
    let mut body = vec![rule("ReturnItems", vec![ParseChild::terminal(items)])];
    for (kind, text) in modifiers {
        body.push(ParseChild::terminal(" "));
        body.push(rule(kind, vec![ParseChild::terminal(text)]));
    }
    ParseNode::rule(
        "Return",
        vec![
            ParseChild::terminal("RETURN"),
            ParseChild::terminal(" "),
            rule("ReturnBody", body),
        ],
    )
}

pub fn reading_clause(match_clause: ParseNode) -> ParseChild {
    rule("ReadingClause", vec![ParseChild::rule(match_clause)])
}

pub fn single_part(clauses: Vec<ParseChild>) -> ParseNode {
    let mut children = Vec::new();
    for (i, clause) in clauses.into_iter().enumerate() {
        if i > 0 {
            children.push(ParseChild::terminal(" "));
        }
        children.push(clause);
    }
    ParseNode::rule("SinglePartQuery", children)
}

pub fn single_query(match_clause: ParseNode, return_clause: ParseNode) -> ParseNode {
    let part = single_part(vec![
        reading_clause(match_clause),
        ParseChild::rule(return_clause),
    ]);
    ParseNode::rule("SingleQuery", vec![ParseChild::rule(part)])
}

pub fn union_arm(query: ParseNode) -> ParseNode {
    ParseNode::rule(
        "Union",
        vec![
            ParseChild::terminal("UNION"),
            ParseChild::terminal(" "),
            ParseChild::rule(query),
        ],
    )
}

pub fn cypher_root(regular_query_children: Vec<ParseChild>) -> ParseNode {
    let regular = ParseNode::rule("RegularQuery", regular_query_children);
    let query = ParseNode::rule("Query", vec![ParseChild::rule(regular)]);
    let statement = ParseNode::rule("Statement", vec![ParseChild::rule(query)]);
    ParseNode::rule(
        "Cypher",
        vec![ParseChild::rule(statement), ParseChild::terminal(";")],
    )
}

/// A whole `MATCH ... RETURN ...` query under the full wrapper spine.
pub fn query(match_clause: ParseNode, return_clause: ParseNode) -> ParseNode {
    cypher_root(vec![ParseChild::rule(single_query(
        match_clause,
        return_clause,
    ))])
}
