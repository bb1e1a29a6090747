/// Analyzer state and the special-form dispatcher.
///
/// ## Notes
/// - A `Parser` lives for a single call of the public entry points. It holds the options and the current nesting
///   depth, nothing else, so analyzing one top-level form never affects another.
/// - Every parslet returns `Result`; the first error aborts the enclosing top-level form.
pub struct Parser<'a> {
    options: &'a ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Analyze a batch of top-level forms according to [`ParseOptions::batch`].
    ///
    /// ## Errors
    /// - `BatchPolicy::Atomic`: the error of the first failing form.
    /// - `BatchPolicy::Collect`: the errors of every failing form, in source order.
    pub fn parse(mut self, datums: &[Datum]) -> Result<Vec<Node>, Vec<SyntaxError>> {
        match self.options.batch {
            BatchPolicy::Atomic => datums
                .iter()
                .map(|datum| self.analyze(datum))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| vec![err]),
            BatchPolicy::Collect => {
                let mut nodes = Vec::with_capacity(datums.len());
                let mut errors = Vec::new();
                for datum in datums {
                    match self.analyze(datum) {
                        Ok(node) => nodes.push(node),
                        Err(err) => errors.push(err),
                    }
                }
                if errors.is_empty() { Ok(nodes) } else { Err(errors) }
            }
        }
    }

    /// Analyze each top-level form independently, keeping successes next to failures.
    pub fn parse_each(mut self, datums: &[Datum]) -> Vec<Result<Node, SyntaxError>> {
        datums.iter().map(|datum| self.analyze(datum)).collect()
    }

    /// Convert one datum into one node.
    pub fn analyze(&mut self, datum: &Datum) -> Result<Node, SyntaxError> {
        self.descend(datum)?;
        let node = self.dispatch(datum);
        self.ascend(node)
    }

    fn dispatch(&mut self, datum: &Datum) -> Result<Node, SyntaxError> {
        let elements = match &datum.kind {
            DatumKind::Symbol(_) if datum.is_dot() => return Err(illegal_dot(APPLICATION, datum)),
            DatumKind::Symbol(name) => return Ok(Node::Name(name.clone())),
            DatumKind::Literal(lit) => return Ok(Node::Literal(lit.clone())),
            DatumKind::List(elements) => elements,
        };

        let Some(head) = elements.first() else {
            return Err(SyntaxError::shape(APPLICATION, "missing procedure expression").with_datum(datum));
        };

        match &head.kind {
            DatumKind::Symbol(name) => match keywords::from_str(name) {
                Some(id) => self.special_form(id, datum, elements),
                None => self.call(datum, elements),
            },
            // ((f x) y) applies the result of a call; ((lambda (x) x) 1) applies a closure.
            DatumKind::List(_) => self.call(datum, elements),
            DatumKind::Literal(_) => Err(SyntaxError::shape(APPLICATION, "not a procedure").with_datum(datum)),
        }
    }

    fn special_form(&mut self, id: KeywordId, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        tracing::trace!(form = keywords::as_str(id), depth = self.depth, "special form");
        match id {
            KeywordId::Define => self.define(datum, elements),
            KeywordId::Lambda => self.lambda(datum, elements).map(Node::Lambda),
            KeywordId::Begin => self.block(&elements[1..]).map(Node::Begin),
            KeywordId::Let => self.let_family(LetKind::Let, datum, elements),
            KeywordId::LetStar => self.let_family(LetKind::LetStar, datum, elements),
            KeywordId::LetRec => self.let_family(LetKind::LetRec, datum, elements),
            KeywordId::Set => self.set(datum, elements),
            KeywordId::If => self.if_expr(datum, elements),
            KeywordId::Apply => self.apply(datum, elements),
            KeywordId::Quote => self.quote(datum, elements),
            KeywordId::Quasiquote => self.quasiquote(datum, elements),
            KeywordId::Unquote | KeywordId::UnquoteSplicing => {
                Err(SyntaxError::context(keywords::as_str(id), "not in quasiquote").with_datum(datum))
            }
            KeywordId::Delay => self.single(id, datum, elements).map(Node::Delay),
            KeywordId::Force => self.single(id, datum, elements).map(Node::Force),
            KeywordId::Go => self.single(id, datum, elements).map(Node::Go),
            KeywordId::Select => self.select(datum, elements),
        }
    }

    /// Generic procedure call: callee first, then arguments left to right.
    fn call(&mut self, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        let Some((callee, args)) = elements.split_first() else {
            return Err(SyntaxError::shape(APPLICATION, "missing procedure expression").with_datum(datum));
        };
        let callee = Box::new(self.analyze(callee)?);
        let args = self.analyze_all(args)?;
        Ok(Node::Call(Call { callee, args }))
    }
}
