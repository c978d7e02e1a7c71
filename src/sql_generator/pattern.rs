use crate::graph_catalog::GraphMetadata;
use crate::parse_tree::{NodeKind, ParseChild, ParseNode};

use super::alias::synthesized_alias;
use super::context::TranslationContext;
use super::errors::SqlGeneratorError;
use super::expression::translate_expression;

/// What a node pattern binds: `(var:Label {key: value, ...})`.
#[derive(Debug, Default)]
struct NodeParts {
    variable: Option<String>,
    label: Option<String>,
    properties: Vec<(String, String)>,
}

/// What a relationship pattern binds: `-[var:TYPE {key: value, ...}]-`.
#[derive(Debug, Default)]
struct RelationshipParts {
    variable: Option<String>,
    rel_type: Option<String>,
    properties: Vec<(String, String)>,
}

/// Compiles one MATCH pattern into a `FROM ... JOIN ... ON (...)`
/// fragment, resolving unlabeled relationships through the metadata
/// catalog and lowering inline property maps into the context's filter
/// accumulator.
pub(crate) struct PatternCompiler<'a> {
    metadata: &'a GraphMetadata,
    ctx: &'a mut TranslationContext,
}

impl<'a> PatternCompiler<'a> {
    pub fn new(metadata: &'a GraphMetadata, ctx: &'a mut TranslationContext) -> Self {
        PatternCompiler { metadata, ctx }
    }

    /// Entry point for a `Pattern` node: comma terminals pass through,
    /// each pattern part compiles to its own join chain.
    pub fn compile(&mut self, pattern: &ParseNode) -> Result<String, SqlGeneratorError> {
        let mut out = String::new();
        for child in &pattern.result {
            match child {
                ParseChild::Terminal(token) => out.push_str(&token.text),
                ParseChild::Rule { tree, .. } => out.push_str(&self.compile_part(tree)?),
            }
        }
        Ok(out)
    }

    fn compile_part(&mut self, part: &ParseNode) -> Result<String, SqlGeneratorError> {
        let mut out = String::new();
        for child in &part.result {
            match child {
                ParseChild::Terminal(token) => out.push_str(&token.text),
                ParseChild::Rule { tree, .. } => match tree.kind() {
                    // `p = (a)-[..]-(b)` binds the whole pattern to `p`.
                    Some(NodeKind::Variable) => {
                        return Err(SqlGeneratorError::VariablePatternAssignmentUnsupported)
                    }
                    Some(NodeKind::AnonymousPatternPart) => {
                        for element in tree.rules() {
                            out.push_str(&self.compile_element(element)?);
                        }
                    }
                    Some(NodeKind::PatternElement) => {
                        out.push_str(&self.compile_element(tree)?)
                    }
                    _ => return Err(SqlGeneratorError::unsupported(tree)),
                },
            }
        }
        Ok(out)
    }

    /// One pattern element: a head node followed by zero or more
    /// relationship+node segments.
    fn compile_element(&mut self, element: &ParseNode) -> Result<String, SqlGeneratorError> {
        let mut head = None;
        let mut segments = Vec::new();
        for tree in element.rules() {
            match tree.kind() {
                Some(NodeKind::NodePattern) if head.is_none() => {
                    head = Some(extract_node(tree)?);
                }
                Some(NodeKind::PatternElementChain) => segments.push(extract_chain(tree)?),
                _ => return Err(SqlGeneratorError::unsupported(tree)),
            }
        }
        let head = head.ok_or_else(|| SqlGeneratorError::unsupported(element))?;
        self.build_join_chain(head, segments)
    }

    fn build_join_chain(
        &mut self,
        head: NodeParts,
        segments: Vec<(RelationshipParts, NodeParts)>,
    ) -> Result<String, SqlGeneratorError> {
        let head_position = self.ctx.next_node_position();
        let head_label = head.label.ok_or(SqlGeneratorError::MissingNodeLabel)?;
        let head_alias = head
            .variable
            .unwrap_or_else(|| synthesized_alias(&head_label, head_position));
        self.lower_properties(&head_alias, head.properties);

        let mut fragment = format!("{head_label} AS {head_alias}");
        let mut prev_label = head_label;
        let mut prev_alias = head_alias;

        for (relationship, node) in segments {
            let rel_position = self.ctx.next_rel_position();
            let node_position = self.ctx.next_node_position();

            let node_label = node.label.ok_or(SqlGeneratorError::MissingNodeLabel)?;
            let node_alias = node
                .variable
                .unwrap_or_else(|| synthesized_alias(&node_label, node_position));

            let path = self.metadata.default_join_path(&prev_label, &node_label)?;
            let rel_type = relationship
                .rel_type
                .unwrap_or_else(|| path.edge_table.clone());
            let rel_alias = relationship
                .variable
                .unwrap_or_else(|| synthesized_alias(&rel_type, rel_position));

            self.lower_properties(&node_alias, node.properties);
            self.lower_properties(&rel_alias, relationship.properties);

            log::debug!(
                "joining '{prev_label}' to '{node_label}' through '{}'",
                path.edge_table
            );
            fragment.push_str(&format!(
                " JOIN {} AS {} ON ({}.{} = {}.{}) JOIN {} AS {} ON ({}.{} = {}.{})",
                path.edge_table,
                rel_alias,
                prev_alias,
                path.from_key,
                rel_alias,
                path.edge_from_key,
                node_label,
                node_alias,
                rel_alias,
                path.edge_to_key,
                node_alias,
                path.to_key,
            ));

            prev_label = node_label;
            prev_alias = node_alias;
        }
        Ok(fragment)
    }

    fn lower_properties(&mut self, alias: &str, properties: Vec<(String, String)>) {
        for (key, value) in properties {
            self.ctx.add_filter(format!("{alias}.{key}"), value);
        }
    }
}

/// Pull variable, label and property map out of a `NodePattern` subtree.
fn extract_node(node: &ParseNode) -> Result<NodeParts, SqlGeneratorError> {
    let mut parts = NodeParts::default();
    for tree in node.rules() {
        match tree.kind() {
            Some(NodeKind::Variable) => parts.variable = Some(translate_expression(tree)?),
            Some(NodeKind::NodeLabels) => parts.label = Some(extract_label(tree)?),
            Some(NodeKind::Properties) => parts.properties = extract_properties(tree)?,
            _ => return Err(SqlGeneratorError::unsupported(tree)),
        }
    }
    Ok(parts)
}

fn extract_label(labels: &ParseNode) -> Result<String, SqlGeneratorError> {
    let mut names = labels.rules();
    let first = names
        .next()
        .ok_or_else(|| SqlGeneratorError::unsupported(labels))?;
    if names.next().is_some() {
        return Err(SqlGeneratorError::MultipleNodeLabels);
    }
    // NodeLabel wraps a LabelName, which wraps the plain name.
    let label_name = first
        .first_rule()
        .ok_or_else(|| SqlGeneratorError::unsupported(first))?;
    let name = label_name
        .first_rule()
        .ok_or_else(|| SqlGeneratorError::unsupported(label_name))?;
    translate_expression(name)
}

/// Lower a `Properties` subtree (a map literal) to `(key, value-sql)`
/// pairs, values translated like any other expression.
fn extract_properties(
    properties: &ParseNode,
) -> Result<Vec<(String, String)>, SqlGeneratorError> {
    let map = properties
        .first_rule()
        .ok_or_else(|| SqlGeneratorError::unsupported(properties))?;
    if map.kind() != Some(NodeKind::MapLiteral) {
        return Err(SqlGeneratorError::unsupported(map));
    }
    let mut pairs = Vec::new();
    let mut key = None;
    for tree in map.rules() {
        match tree.kind() {
            Some(NodeKind::PropertyKeyName) => key = Some(translate_expression(tree)?),
            Some(NodeKind::Expression) => {
                if let Some(key) = key.take() {
                    pairs.push((key, translate_expression(tree)?));
                }
            }
            _ => return Err(SqlGeneratorError::unsupported(tree)),
        }
    }
    Ok(pairs)
}

/// One chain segment: the relationship and the node it reaches.
fn extract_chain(
    chain: &ParseNode,
) -> Result<(RelationshipParts, NodeParts), SqlGeneratorError> {
    let mut relationship = None;
    let mut node = None;
    for tree in chain.rules() {
        match tree.kind() {
            Some(NodeKind::RelationshipPattern) => {
                relationship = Some(extract_relationship(tree)?)
            }
            Some(NodeKind::NodePattern) => node = Some(extract_node(tree)?),
            _ => return Err(SqlGeneratorError::unsupported(tree)),
        }
    }
    match (relationship, node) {
        (Some(relationship), Some(node)) => Ok((relationship, node)),
        _ => Err(SqlGeneratorError::unsupported(chain)),
    }
}

fn extract_relationship(
    pattern: &ParseNode,
) -> Result<RelationshipParts, SqlGeneratorError> {
    let mut parts = RelationshipParts::default();
    for tree in pattern.rules() {
        match tree.kind() {
            Some(NodeKind::Dash) => {}
            Some(NodeKind::LeftArrowHead) | Some(NodeKind::RightArrowHead) => {
                return Err(SqlGeneratorError::DirectedEdgeUnsupported)
            }
            Some(NodeKind::RelationshipDetail) => parts = extract_detail(tree)?,
            _ => return Err(SqlGeneratorError::unsupported(tree)),
        }
    }
    Ok(parts)
}

fn extract_detail(detail: &ParseNode) -> Result<RelationshipParts, SqlGeneratorError> {
    let mut parts = RelationshipParts::default();
    for tree in detail.rules() {
        match tree.kind() {
            Some(NodeKind::Variable) => parts.variable = Some(translate_expression(tree)?),
            Some(NodeKind::RelationshipTypes) => {
                parts.rel_type = Some(extract_rel_type(tree)?)
            }
            Some(NodeKind::Properties) => parts.properties = extract_properties(tree)?,
            _ => return Err(SqlGeneratorError::unsupported(tree)),
        }
    }
    Ok(parts)
}

fn extract_rel_type(types: &ParseNode) -> Result<String, SqlGeneratorError> {
    let mut names = types.rules();
    let first = names
        .next()
        .ok_or_else(|| SqlGeneratorError::unsupported(types))?;
    if names.next().is_some() {
        return Err(SqlGeneratorError::MultipleRelationshipTypes);
    }
    let name = first
        .first_rule()
        .ok_or_else(|| SqlGeneratorError::unsupported(first))?;
    translate_expression(name)
}
