/// `select` over channel operations.
impl<'a> Parser<'a> {
    fn select(&mut self, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        expect_parts(KeywordId::Select, datum, elements)?;
        let clauses = elements[1..]
            .iter()
            .map(|clause| self.select_clause(clause))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Node::Select(clauses))
    }

    fn select_clause(&mut self, clause: &Datum) -> Result<SelectClause, SyntaxError> {
        let form = keywords::as_str(KeywordId::Select);
        let Some(exprs) = clause.as_list() else {
            return Err(SyntaxError::select_clause(form, "bad syntax (clause is not a list)").with_datum(clause));
        };
        let Some((case, body)) = exprs.split_first() else {
            return Err(SyntaxError::select_clause(form, "bad syntax (missing select case)").with_datum(clause));
        };

        let case = match self.analyze(case)? {
            Node::Call(call) => channel_case(call, clause)?,
            Node::Name(name) if name == SELECT_DEFAULT => SelectCase::Default,
            _ => return Err(SyntaxError::select_clause(form, "bad syntax").with_datum(clause)),
        };
        let body = self.analyze_all(body)?;
        Ok(SelectClause { case, body })
    }
}

/// Turn an analyzed `(chan-send ch v)` / `(chan-recv ch)` head into a [`SelectCase`].
fn channel_case(call: Call, clause: &Datum) -> Result<SelectCase, SyntaxError> {
    let Call { callee, args } = call;
    let op = match callee.as_ref() {
        Node::Name(name) => name.as_str(),
        _ => "",
    };

    match op {
        CHAN_SEND => match <[Node; CHAN_SEND_ARGS]>::try_from(args) {
            Ok([chan, value]) => Ok(SelectCase::Send { chan, value }),
            Err(args) => Err(channel_arity(CHAN_SEND, CHAN_SEND_ARGS, args.len(), clause)),
        },
        CHAN_RECV => match <[Node; CHAN_RECV_ARGS]>::try_from(args) {
            Ok([chan]) => Ok(SelectCase::Recv { chan }),
            Err(args) => Err(channel_arity(CHAN_RECV, CHAN_RECV_ARGS, args.len(), clause)),
        },
        _ => Err(SyntaxError::select_clause(keywords::as_str(KeywordId::Select), "bad syntax").with_datum(clause)),
    }
}

fn channel_arity(op: &str, expected: usize, given: usize, clause: &Datum) -> SyntaxError {
    SyntaxError::new(
        SyntaxErrorKind::Arity,
        op,
        format!("arguments mismatch, expected {expected}, given {given}"),
    )
    .with_datum(clause)
}
