/// Parslets for definitions, closures, binding forms and plain control flow.
impl<'a> Parser<'a> {
    /// `(define name expr)` or `(define (name . formals) body...)`, with curried heads allowed.
    fn define(&mut self, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        expect_parts(KeywordId::Define, datum, elements)?;
        let form = keywords::as_str(KeywordId::Define);
        let target = &elements[1];

        if target.as_list().is_some() {
            let function = self.function(target, &elements[2..])?;
            return Ok(Node::Define(Define {
                name: function.name.clone(),
                value: Box::new(Node::Function(function)),
            }));
        }

        let name = identifier(form, target)?;
        if elements.len() > 3 {
            return Err(SyntaxError::shape(form, "bad syntax (multiple expressions after identifier)").with_datum(datum));
        }
        let value = Box::new(self.analyze(&elements[2])?);
        Ok(Node::Define(Define { name, value }))
    }

    /// Unwrap a function-definition head into nested closures around `body`.
    ///
    /// `((f a) b)` peels outside-in: the outermost pattern holds the innermost closure's formals, and the pattern
    /// whose head is the name holds the formals of the closure bound to that name.
    fn function(&mut self, target: &Datum, body: &[Datum]) -> Result<Function, SyntaxError> {
        let form = keywords::as_str(KeywordId::Define);
        let mut layers = Vec::new();
        let mut pattern = target;

        let name = loop {
            let Some((head, formals)) = pattern.as_list().and_then(<[Datum]>::split_first) else {
                return Err(SyntaxError::shape(form, "bad syntax (missing function name)").with_datum(pattern));
            };
            let params = expand_formals(KeywordId::Define, formals).map_err(|err| err.with_datum(pattern))?;
            layers.push(params);
            if head.as_list().is_some() {
                pattern = head;
            } else {
                break identifier(form, head)?;
            }
        };
        tracing::debug!(name = %name, layers = layers.len(), "expanded function definition");

        let mut body = self.block(body)?;
        let Some(outermost) = layers.pop() else {
            return Err(SyntaxError::shape(form, "bad syntax (missing formals)").with_datum(target));
        };
        for params in layers {
            body = Block::new(vec![Node::Lambda(Lambda { params, body })]);
        }

        Ok(Function {
            name,
            lambda: Lambda { params: outermost, body },
        })
    }

    /// `(lambda formals body...)` where formals is an identifier or a formals list.
    fn lambda(&mut self, datum: &Datum, elements: &[Datum]) -> Result<Lambda, SyntaxError> {
        expect_parts(KeywordId::Lambda, datum, elements)?;
        let form = keywords::as_str(KeywordId::Lambda);
        let pattern = &elements[1];

        let params = match pattern.as_list() {
            Some(formals) => match expand_formals(KeywordId::Lambda, formals).map_err(|err| err.with_datum(pattern))? {
                // `(lambda (. args) ...)` spells a rest-only closure the long way round.
                Params::Rest(_) => return Err(illegal_dot(form, pattern)),
                params => params,
            },
            None => Params::Rest(identifier(form, pattern)?),
        };

        let body = self.block(&elements[2..])?;
        Ok(Lambda { params, body })
    }

    /// `let`, `let*` and `letrec` share one shape: a bindings list then a body.
    fn let_family(&mut self, kind: LetKind, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        let id = kind.keyword();
        expect_parts(id, datum, elements)?;
        let form = keywords::as_str(id);

        let Some(bindings) = elements[1].as_list() else {
            return Err(SyntaxError::shape(form, "bad syntax (not a sequence of bindings)").with_datum(&elements[1]));
        };

        let mut names = Vec::with_capacity(bindings.len());
        let mut inits = Vec::with_capacity(bindings.len());
        for binding in bindings {
            let bad_binding =
                || SyntaxError::shape(form, "bad syntax (not an identifier and expression for a binding)").with_datum(binding);
            let Some([name, init]) = binding.as_list() else {
                return Err(bad_binding());
            };
            let Some(name) = name.identifier() else {
                return Err(bad_binding());
            };
            names.push(name.to_string());
            inits.push(self.analyze(init)?);
        }

        let body = self.block(&elements[2..])?;
        Ok(Node::Let(Let { kind, names, inits, body }))
    }

    fn set(&mut self, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        expect_parts(KeywordId::Set, datum, elements)?;
        let name = identifier(keywords::as_str(KeywordId::Set), &elements[1])?;
        let value = Box::new(self.analyze(&elements[2])?);
        Ok(Node::Set(Set { name, value }))
    }

    fn if_expr(&mut self, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        expect_parts(KeywordId::If, datum, elements)?;
        let test = Box::new(self.analyze(&elements[1])?);
        let then = Box::new(self.analyze(&elements[2])?);
        let otherwise = match elements.get(3) {
            Some(otherwise) => Some(Box::new(self.analyze(otherwise)?)),
            None => None,
        };
        Ok(Node::If(If { test, then, otherwise }))
    }

    fn apply(&mut self, datum: &Datum, elements: &[Datum]) -> Result<Node, SyntaxError> {
        expect_parts(KeywordId::Apply, datum, elements)?;
        let proc = Box::new(self.analyze(&elements[1])?);
        let args = self.analyze_all(&elements[2..])?;
        Ok(Node::Apply(Apply { proc, args }))
    }
}
