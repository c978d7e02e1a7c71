use crate::graph_catalog::GraphMetadata;
use crate::parse_tree::{NodeKind, ParseChild, ParseNode};

use super::context::TranslationContext;
use super::errors::SqlGeneratorError;
use super::expression::translate_expression;
use super::pattern::PatternCompiler;

/// Top-level dispatcher over the statement wrappers of the tree. Single
/// queries hand off to [`SingleQueryTranslator`], which owns the
/// per-query state.
pub(crate) struct QueryTranslator<'a> {
    metadata: &'a GraphMetadata,
}

impl<'a> QueryTranslator<'a> {
    pub fn new(metadata: &'a GraphMetadata) -> Self {
        QueryTranslator { metadata }
    }

    pub fn translate(&self, root: &ParseNode) -> Result<String, SqlGeneratorError> {
        if !root.errors.is_empty() {
            return Err(SqlGeneratorError::Parse(root.errors.clone()));
        }
        log::debug!("translating parse tree rooted at '{}'", root.name);
        self.process(root)
    }

    fn process(&self, node: &ParseNode) -> Result<String, SqlGeneratorError> {
        match node.kind() {
            Some(NodeKind::Cypher) => {
                for tree in node.rules() {
                    if tree.kind() == Some(NodeKind::Statement) {
                        return self.process(tree);
                    }
                }
                Err(SqlGeneratorError::unsupported(node))
            }
            Some(NodeKind::Statement) | Some(NodeKind::Query) => {
                let inner = node
                    .first_rule()
                    .ok_or_else(|| SqlGeneratorError::unsupported(node))?;
                self.process(inner)
            }
            Some(NodeKind::RegularQuery) => {
                let mut out = String::new();
                for tree in node.rules() {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    match tree.kind() {
                        Some(NodeKind::SingleQuery) => {
                            out.push_str(&self.translate_single_query(tree)?)
                        }
                        _ => out.push_str(&self.process(tree)?),
                    }
                }
                Ok(out)
            }
            Some(NodeKind::Union) => {
                // The UNION / UNION ALL keywords pass through verbatim;
                // only the final single query is compiled.
                let (last, keywords) = match node.result.split_last() {
                    Some(split) => split,
                    None => return Err(SqlGeneratorError::unsupported(node)),
                };
                let arm = last
                    .as_rule()
                    .ok_or_else(|| SqlGeneratorError::unsupported(node))?;
                let mut text = String::new();
                for child in keywords {
                    text.push_str(&child.token().text);
                }
                Ok(format!(
                    "{} {}",
                    text.trim(),
                    self.translate_single_query(arm)?
                ))
            }
            Some(NodeKind::SingleQuery) => self.translate_single_query(node),
            Some(NodeKind::MultiPartQueries) => Err(SqlGeneratorError::MultiPartQueryUnsupported),
            _ => Err(SqlGeneratorError::unsupported(node)),
        }
    }

    fn translate_single_query(&self, node: &ParseNode) -> Result<String, SqlGeneratorError> {
        SingleQueryTranslator::new(self.metadata).translate(node)
    }
}

/// Translates one single query with its own [`TranslationContext`]: the
/// match fragment, the WHERE clause folded with accumulated inline
/// filters, the projection, and the trailing output modifiers.
struct SingleQueryTranslator<'a> {
    metadata: &'a GraphMetadata,
    ctx: TranslationContext,
}

impl<'a> SingleQueryTranslator<'a> {
    fn new(metadata: &'a GraphMetadata) -> Self {
        SingleQueryTranslator {
            metadata,
            ctx: TranslationContext::new(),
        }
    }

    fn translate(mut self, node: &ParseNode) -> Result<String, SqlGeneratorError> {
        self.process(node)
    }

    fn process(&mut self, node: &ParseNode) -> Result<String, SqlGeneratorError> {
        match node.kind() {
            Some(NodeKind::SingleQuery) | Some(NodeKind::ReadingClause) => {
                let inner = node
                    .first_rule()
                    .ok_or_else(|| SqlGeneratorError::unsupported(node))?;
                self.process(inner)
            }
            Some(NodeKind::SinglePartQuery) => self.translate_single_part(node),
            Some(NodeKind::Match) => self.translate_match(node),
            Some(NodeKind::Where) => self.translate_where(node),
            Some(NodeKind::Pattern) => {
                PatternCompiler::new(self.metadata, &mut self.ctx).compile(node)
            }
            Some(NodeKind::Return) => self.translate_return(node),
            Some(NodeKind::ReturnBody) => self.translate_return_body(node),
            // The projection passes through as written.
            Some(NodeKind::ReturnItems) => Ok(node.raw_text()),
            Some(NodeKind::MultiPartQueries) => Err(SqlGeneratorError::MultiPartQueryUnsupported),
            _ => Err(SqlGeneratorError::unsupported(node)),
        }
    }

    fn translate_single_part(&mut self, node: &ParseNode) -> Result<String, SqlGeneratorError> {
        let mut read_part = String::new();
        let mut return_part = String::new();
        for tree in node.rules() {
            match tree.kind() {
                Some(NodeKind::UpdatingClause) => {
                    return Err(SqlGeneratorError::UpdatingClauseUnsupported)
                }
                Some(NodeKind::ReadingClause) => {
                    if !read_part.is_empty() {
                        return Err(SqlGeneratorError::MultipleMatchClauses);
                    }
                    read_part = self.process(tree)?;
                }
                _ => return_part = self.process(tree)?,
            }
        }
        Ok(format!(
            "{} {}{}",
            return_part,
            read_part,
            self.ctx.trailing_modifiers()
        ))
    }

    fn translate_match(&mut self, node: &ParseNode) -> Result<String, SqlGeneratorError> {
        // Leading keyword terminals, then the pattern.
        let mut keywords = String::new();
        let mut children = node.result.iter();
        let pattern = loop {
            match children.next() {
                Some(ParseChild::Terminal(token)) => keywords.push_str(&token.text),
                Some(ParseChild::Rule { tree, .. }) => break tree,
                None => return Err(SqlGeneratorError::unsupported(node)),
            }
        };
        if keywords.trim().to_uppercase().starts_with("OPTIONAL") {
            return Err(SqlGeneratorError::OptionalMatchUnsupported);
        }
        let pattern_sql = self.process(pattern)?;

        let mut where_clause = String::new();
        for child in children {
            if let Some(tree) = child.as_rule() {
                if tree.kind() == Some(NodeKind::Where) {
                    where_clause = self.process(tree)?;
                }
            }
        }

        let mut statement = format!("FROM {pattern_sql}");
        match self.ctx.filter_conjunction() {
            Some(filters) if where_clause.is_empty() => {
                statement.push_str(&format!(" WHERE {filters}"));
            }
            Some(filters) => {
                statement.push_str(&where_clause);
                statement.push_str(&format!(" AND {filters}"));
            }
            None => statement.push_str(&where_clause),
        }
        Ok(statement)
    }

    fn translate_where(&mut self, node: &ParseNode) -> Result<String, SqlGeneratorError> {
        let mut out = String::from(" ");
        for child in &node.result {
            match child {
                ParseChild::Terminal(token) => out.push_str(&token.text),
                ParseChild::Rule { tree, .. } => out.push_str(&translate_expression(tree)?),
            }
        }
        Ok(out)
    }

    fn translate_return(&mut self, node: &ParseNode) -> Result<String, SqlGeneratorError> {
        let mut out = String::from("SELECT ");
        // Skip the RETURN keyword itself; keep modifiers like DISTINCT.
        for child in node.result.iter().skip(1) {
            match child {
                ParseChild::Terminal(token) => {
                    let text = token.text.trim();
                    if !text.is_empty() {
                        out.push_str(text);
                        out.push(' ');
                    }
                }
                ParseChild::Rule { tree, .. } => out.push_str(&self.process(tree)?),
            }
        }
        Ok(out)
    }

    fn translate_return_body(&mut self, node: &ParseNode) -> Result<String, SqlGeneratorError> {
        let mut items = String::new();
        for child in &node.result {
            if let ParseChild::Rule { token, tree } = child {
                match tree.kind() {
                    Some(NodeKind::ReturnItems) => items = self.process(tree)?,
                    // Output modifiers are captured verbatim and appended
                    // after the match fragment in fixed order.
                    Some(NodeKind::Order) => self.ctx.set_order_by(token.text.clone()),
                    Some(NodeKind::Skip) => self.ctx.set_skip(token.text.clone()),
                    Some(NodeKind::Limit) => self.ctx.set_limit(token.text.clone()),
                    _ => return Err(SqlGeneratorError::unsupported(tree)),
                }
            }
        }
        Ok(items)
    }
}
