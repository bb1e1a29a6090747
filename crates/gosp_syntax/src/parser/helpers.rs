/// Shared parslet helpers: depth accounting, arity checks, sequences.
impl<'a> Parser<'a> {
    /// Enter one nesting level, failing once the configured depth is reached.
    ///
    /// Every successful call is paired with [`Parser::ascend`] in the same function, with no closure in between,
    /// so each level costs as few stack frames as possible.
    fn descend(&mut self, datum: &Datum) -> Result<(), SyntaxError> {
        if self.depth >= self.options.max_depth {
            return Err(SyntaxError::depth(self.options.max_depth).at(datum.span));
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend<T>(&mut self, result: T) -> T {
        self.depth -= 1;
        result
    }

    fn analyze_all(&mut self, datums: &[Datum]) -> Result<Vec<Node>, SyntaxError> {
        datums.iter().map(|datum| self.analyze(datum)).collect()
    }

    fn block(&mut self, datums: &[Datum]) -> Result<Block, SyntaxError> {
        self.analyze_all(datums).map(Block::new)
    }

    /// Forms with exactly one expression: `delay`, `force`, `go`.
    fn single(&mut self, id: KeywordId, datum: &Datum, elements: &[Datum]) -> Result<Box<Node>, SyntaxError> {
        expect_parts(id, datum, elements)?;
        Ok(Box::new(self.analyze(&elements[1])?))
    }
}

/// Check the number of parts after the keyword against the registry arity.
fn expect_parts(id: KeywordId, datum: &Datum, elements: &[Datum]) -> Result<(), SyntaxError> {
    let arity = keywords::arity(id);
    let parts = elements.len().saturating_sub(1);
    if arity.accepts(parts) {
        Ok(())
    } else {
        Err(SyntaxError::arity(keywords::as_str(id), arity, parts).with_datum(datum))
    }
}

/// Identifier spelling of `datum`, or a shape error attributed to `form`.
fn identifier(form: &str, datum: &Datum) -> Result<Ident, SyntaxError> {
    datum
        .identifier()
        .map(str::to_string)
        .ok_or_else(|| SyntaxError::shape(form, "not an identifier").with_datum(datum))
}

fn illegal_dot(form: &str, datum: &Datum) -> SyntaxError {
    SyntaxError::shape(form, "illegal use of `.`").with_datum(datum)
}

fn keyword_name(id: KeywordId) -> Node {
    Node::name(keywords::as_str(id))
}
