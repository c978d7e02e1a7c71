/// Mutable state scoped to one single query. Each query of a UNION gets
/// its own context, so nothing leaks between arms or between calls.
#[derive(Debug, Default)]
pub(crate) struct TranslationContext {
    // ORDER BY / SKIP / LIMIT captured verbatim from the return body.
    // The grammar yields each at most once per single query.
    order_by: Option<String>,
    skip: Option<String>,
    limit: Option<String>,
    // Equality pairs lowered from inline property maps, in the order the
    // pattern walk found them.
    filters: Vec<(String, String)>,
    // Structural positions for alias synthesis. Nodes and relationships
    // number independently, and bound elements advance the counters too,
    // so a synthesized alias depends only on (type, position).
    node_positions: usize,
    rel_positions: usize,
}

impl TranslationContext {
    pub fn new() -> Self {
        TranslationContext::default()
    }

    pub fn set_order_by(&mut self, text: String) {
        self.order_by = Some(text);
    }

    pub fn set_skip(&mut self, text: String) {
        self.skip = Some(text);
    }

    pub fn set_limit(&mut self, text: String) {
        self.limit = Some(text);
    }

    /// The captured output modifiers in their fixed SQL order, each with
    /// a leading space, ready to append after the match fragment.
    pub fn trailing_modifiers(&self) -> String {
        let mut out = String::new();
        for part in [&self.order_by, &self.skip, &self.limit].into_iter().flatten() {
            out.push(' ');
            out.push_str(part);
        }
        out
    }

    pub fn add_filter(&mut self, left: String, right: String) {
        self.filters.push((left, right));
    }

    /// All accumulated inline filters as one `a = b AND c = d` conjunction,
    /// in accumulation order. `None` when the pattern had no property maps.
    pub fn filter_conjunction(&self) -> Option<String> {
        if self.filters.is_empty() {
            return None;
        }
        Some(
            self.filters
                .iter()
                .map(|(left, right)| format!("{left} = {right}"))
                .collect::<Vec<_>>()
                .join(" AND "),
        )
    }

    pub fn next_node_position(&mut self) -> usize {
        let position = self.node_positions;
        self.node_positions += 1;
        position
    }

    pub fn next_rel_position(&mut self) -> usize {
        let position = self.rel_positions;
        self.rel_positions += 1;
        position
    }
}
