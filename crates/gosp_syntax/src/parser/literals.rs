/// `quote` and the list-literal expander shared with `quasiquote`.
impl<'a> Parser<'a> {
    fn quote(&mut self, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        expect_parts(KeywordId::Quote, datum, elements)?;
        Ok(Node::Quote(Box::new(self.literal(&elements[1])?)))
    }

    /// Convert a datum into literal data: lists become pair chains, atoms stay as they are.
    fn literal(&mut self, datum: &Datum) -> Result<Node, SyntaxError> {
        self.descend(datum)?;
        let node = match &datum.kind {
            DatumKind::Symbol(_) if datum.is_dot() => Err(illegal_dot(keywords::as_str(KeywordId::Quote), datum)),
            DatumKind::Symbol(name) => Ok(Node::Name(name.clone())),
            DatumKind::Literal(lit) => Ok(Node::Literal(lit.clone())),
            DatumKind::List(items) => self.chain(KeywordId::Quote, datum, items, |p, item| p.literal(item)),
        };
        self.ascend(node)
    }

    /// Build a pair chain from `items`, converting each element (and a dotted tail) with `each`.
    fn chain<F>(&mut self, form: KeywordId, datum: &Datum, items: &[Datum], mut each: F) -> Result<Node, SyntaxError>
    where
        F: FnMut(&mut Self, &Datum) -> Result<Node, SyntaxError>,
    {
        let (proper, tail) = split_dotted(form, datum, items)?;
        let mut heads = Vec::with_capacity(proper.len());
        for item in proper {
            heads.push(each(self, item)?);
        }
        let tail = match tail {
            Some(tail) => each(self, tail)?,
            None => Node::Nil,
        };
        Ok(Node::improper(heads, tail))
    }
}

/// Split `(a b . c)` into `[a, b]` and `c`. A `.` is only legal second-to-last with something before it.
fn split_dotted<'d>(
    form: KeywordId,
    datum: &Datum,
    items: &'d [Datum],
) -> Result<(&'d [Datum], Option<&'d Datum>), SyntaxError> {
    match items.iter().position(Datum::is_dot) {
        None => Ok((items, None)),
        Some(dot) if dot > 0 && dot + 2 == items.len() => Ok((&items[..dot], Some(&items[dot + 1]))),
        Some(_) => Err(illegal_dot(keywords::as_str(form), datum)),
    }
}
