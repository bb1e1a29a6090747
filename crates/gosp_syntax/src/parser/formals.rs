/// Expand a formals list into [`Params`].
///
/// | Formals       | Result                          |
/// |---------------|---------------------------------|
/// | `(a b)`       | `Params::Fixed(["a", "b"])`     |
/// | `()`          | `Params::Fixed([])`             |
/// | `(a b . c)`   | `Params::Variadic { .. }`       |
/// | `(. c)`       | `Params::Rest("c")`             |
///
/// ## Errors
/// - A non-identifier formal, or a `.` that is not followed by exactly one identifier.
///
/// Errors carry the offending element; callers usually re-attach the whole formals list with
/// [`SyntaxError::with_datum`].
pub fn expand_formals(form: KeywordId, elements: &[Datum]) -> Result<Params, SyntaxError> {
    let form = keywords::as_str(form);
    let mut fixed = Vec::with_capacity(elements.len());

    for (index, element) in elements.iter().enumerate() {
        if element.is_dot() {
            let [rest] = &elements[index + 1..] else {
                return Err(illegal_dot(form, element));
            };
            if rest.is_dot() {
                return Err(illegal_dot(form, rest));
            }
            let rest = identifier(form, rest)?;
            return Ok(if fixed.is_empty() {
                Params::Rest(rest)
            } else {
                Params::Variadic { fixed, rest }
            });
        }
        fixed.push(identifier(form, element)?);
    }

    Ok(Params::Fixed(fixed))
}
