// ============================================================================
// Public entry points
// ============================================================================

/// Analyze top-level datums with default options: the batch fails on its first bad form.
#[tracing::instrument(skip_all, fields(forms = datums.len()))]
pub fn parse(datums: &[Datum]) -> Result<Vec<Node>, Vec<SyntaxError>> {
    parse_with(datums, &ParseOptions::default())
}

/// Analyze top-level datums with explicit [`ParseOptions`].
#[tracing::instrument(skip_all, fields(forms = datums.len(), batch = ?options.batch))]
pub fn parse_with(datums: &[Datum], options: &ParseOptions) -> Result<Vec<Node>, Vec<SyntaxError>> {
    let result = Parser::new(options).parse(datums);
    match &result {
        Ok(nodes) => tracing::debug!(node_count = nodes.len(), "analyzed"),
        Err(errors) => tracing::debug!(error_count = errors.len(), "analysis failed"),
    }
    result
}

/// Analyze every top-level datum on its own; one bad form does not discard the others.
pub fn parse_each(datums: &[Datum], options: &ParseOptions) -> Vec<Result<Node, SyntaxError>> {
    Parser::new(options).parse_each(datums)
}

/// Analyze a single datum.
pub fn parse_node(datum: &Datum) -> Result<Node, SyntaxError> {
    Parser::new(&ParseOptions::default()).analyze(datum)
}

/// Read `source` and analyze the result. `name` tags every error (file path, `"repl"`, ...).
#[tracing::instrument(skip_all, fields(name = %name, source_len = source.len()))]
pub fn parse_str(name: &str, source: &str) -> Result<Vec<Node>, Vec<SyntaxError>> {
    parse_str_with(name, source, &ParseOptions::default())
}

/// [`parse_str`] with explicit [`ParseOptions`].
pub fn parse_str_with(name: &str, source: &str, options: &ParseOptions) -> Result<Vec<Node>, Vec<SyntaxError>> {
    let tag = |errors: Vec<SyntaxError>| errors.into_iter().map(|err| err.in_source(name)).collect::<Vec<_>>();
    let datums = reader::read(source).map_err(tag)?;
    parse_with(&datums, options).map_err(tag)
}
