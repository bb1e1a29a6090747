/// Quasiquote level engine.
///
/// A template is walked with a nesting level that starts at 1. `quasiquote` inside the template raises the level,
/// `unquote`/`unquote-splicing` lower it. An escape whose level reaches 0 is analyzed as ordinary code; every other
/// part of the template, nested escapes included, stays literal data.
impl<'a> Parser<'a> {
    fn quasiquote(&mut self, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        expect_parts(KeywordId::Quasiquote, datum, elements)?;
        let template = self.template(&elements[1], 1)?;
        Ok(Node::Quasiquote(Box::new(template)))
    }

    fn template(&mut self, datum: &Datum, level: usize) -> Result<Node, SyntaxError> {
        self.descend(datum)?;
        let node = match datum.as_list() {
            None => self.literal(datum),
            Some(items) => match items.first().and_then(Datum::identifier).and_then(keywords::from_str) {
                Some(KeywordId::Quasiquote) => self.raise(datum, items, level),
                Some(id @ (KeywordId::Unquote | KeywordId::UnquoteSplicing)) => self.escape(id, datum, items, level - 1),
                _ => self.chain(KeywordId::Quasiquote, datum, items, |p, item| p.template(item, level)),
            },
        };
        self.ascend(node)
    }

    /// A `quasiquote` inside a template: one level deeper, kept as data.
    fn raise(&mut self, datum: &Datum, items: &[Datum], level: usize) -> Result<Node, SyntaxError> {
        expect_parts(KeywordId::Quasiquote, datum, items)?;
        tracing::trace!(level = level + 1, "nested quasiquote");
        let inner = self.template(&items[1], level + 1)?;
        Ok(Node::list(vec![keyword_name(KeywordId::Quasiquote), inner]))
    }

    /// An `unquote`/`unquote-splicing` form whose level has already been lowered to `level`.
    fn escape(&mut self, id: KeywordId, datum: &Datum, items: &[Datum], level: usize) -> Result<Node, SyntaxError> {
        expect_parts(id, datum, items)?;
        if level == 0 {
            tracing::trace!(form = keywords::as_str(id), "template escape");
            let expr = Box::new(self.analyze(&items[1])?);
            return Ok(match id {
                KeywordId::UnquoteSplicing => Node::UnquoteSplicing(expr),
                _ => Node::Unquote(expr),
            });
        }
        let inner = self.template(&items[1], level)?;
        Ok(Node::list(vec![keyword_name(id), inner]))
    }
}
