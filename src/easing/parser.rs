//! Parsing of `transition-timing-function` values
//!
//! Accepts a single CSS component value: one of the timing keywords, a
//! `cubic-bezier(x1, y1, x2, y2)` call, or a `steps(n[, start|end])` call.
//! Tokenization is done by `cssparser`, so CSS whitespace and comments are
//! allowed around the value and between arguments, and a function left open
//! at the end of input is closed implicitly. Keyword and function names are
//! matched exactly.

use cssparser::{
    BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, ToCss, Token,
};

use super::{CubicBezier, EasingFunction, InvalidSyntax, StepPosition, Steps, TimingKeyword};

type Result<'i, T> = std::result::Result<T, ParseError<'i, InvalidSyntax>>;

/// Parse an easing function value.
///
/// # Example
///
/// ```
/// use timing_fn::easing::parse;
///
/// assert_eq!(parse("ease-in").unwrap().to_string(), "cubic-bezier(0.42, 0, 1, 1)");
/// assert_eq!(parse("steps(3, start)").unwrap().to_string(), "steps(3, start)");
/// assert!(parse("steps(3, top)").is_err());
/// ```
pub fn parse(text: &str) -> std::result::Result<EasingFunction, InvalidSyntax> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(parse_value).map_err(into_invalid)
}

fn parse_value<'i>(input: &mut Parser<'i, '_>) -> Result<'i, EasingFunction> {
    input.skip_whitespace();
    if input.is_exhausted() {
        return Err(input.new_custom_error(InvalidSyntax::Empty));
    }

    let location = input.current_source_location();
    let token = input.next()?.clone();
    match token {
        Token::Ident(ident) => {
            if input.try_parse(|i| i.expect_parenthesis_block()).is_ok() {
                return Err(location.new_custom_error(InvalidSyntax::Malformed(format!(
                    "whitespace between '{}' and '('",
                    ident
                ))));
            }
            TimingKeyword::from_ident(&ident).map(TimingKeyword::expand).ok_or_else(|| {
                location.new_custom_error(InvalidSyntax::UnknownKeyword(ident.to_string()))
            })
        }
        Token::Function(name) => match &*name {
            "cubic-bezier" => input.parse_nested_block(parse_cubic_bezier),
            "steps" => input.parse_nested_block(parse_steps),
            _ => Err(location.new_custom_error(InvalidSyntax::UnknownFunction(name.to_string()))),
        },
        other => Err(location.new_custom_error(InvalidSyntax::Malformed(format!(
            "unexpected '{}'",
            other.to_css_string()
        )))),
    }
}

/// Collapse a `cssparser` error into the rejection reason
fn into_invalid(err: ParseError<'_, InvalidSyntax>) -> InvalidSyntax {
    match err.kind {
        ParseErrorKind::Custom(reason) => reason,
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            InvalidSyntax::Malformed(format!("unexpected '{}'", token.to_css_string()))
        }
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            InvalidSyntax::Malformed("unexpected end of input".to_string())
        }
        ParseErrorKind::Basic(_) => InvalidSyntax::Malformed("invalid syntax".to_string()),
    }
}

/// One comma-separated argument: its token and the source text it came from
struct Argument<'i> {
    token: Token<'i>,
    text: &'i str,
}

/// Read a comma-separated list of single-token arguments, rejecting empty slots
fn parse_arguments<'i>(
    func: &'static str,
    input: &mut Parser<'i, '_>,
) -> Result<'i, Vec<Argument<'i>>> {
    input.skip_whitespace();
    if input.is_exhausted() {
        return Ok(Vec::new());
    }

    let mut position = 0;
    input.parse_comma_separated(|i: &mut Parser<'i, '_>| -> Result<'i, Argument<'i>> {
        position += 1;
        i.skip_whitespace();
        if i.is_exhausted() {
            return Err(i.new_custom_error(InvalidSyntax::EmptyArgument { func, position }));
        }

        let start = i.position();
        let token = i.next()?.clone();
        if matches!(
            token,
            Token::Function(_)
                | Token::ParenthesisBlock
                | Token::SquareBracketBlock
                | Token::CurlyBracketBlock
        ) {
            return Err(i.new_custom_error(InvalidSyntax::Malformed(format!(
                "nested block in {}()",
                func
            ))));
        }
        Ok(Argument { token, text: i.slice_from(start) })
    })
}

fn parse_cubic_bezier<'i>(input: &mut Parser<'i, '_>) -> Result<'i, EasingFunction> {
    const FUNC: &str = "cubic-bezier";

    let location = input.current_source_location();
    let args = parse_arguments(FUNC, input)?;
    cubic_bezier_from(&args).map_err(|e| location.new_custom_error(e))
}

fn cubic_bezier_from(args: &[Argument<'_>]) -> std::result::Result<EasingFunction, InvalidSyntax> {
    const FUNC: &str = "cubic-bezier";

    if args.len() != 4 {
        return Err(InvalidSyntax::ArgumentCount { func: FUNC, expected: "4", found: args.len() });
    }

    let mut coords = [0.0; 4];
    for (slot, arg) in coords.iter_mut().zip(args) {
        *slot = number(FUNC, arg)?;
    }

    let [x1, y1, x2, y2] = coords;
    CubicBezier::new(x1, y1, x2, y2).map(EasingFunction::CubicBezier)
}

fn parse_steps<'i>(input: &mut Parser<'i, '_>) -> Result<'i, EasingFunction> {
    let location = input.current_source_location();
    let args = parse_arguments("steps", input)?;
    steps_from(&args).map_err(|e| location.new_custom_error(e))
}

fn steps_from(args: &[Argument<'_>]) -> std::result::Result<EasingFunction, InvalidSyntax> {
    const FUNC: &str = "steps";

    if args.is_empty() || args.len() > 2 {
        return Err(InvalidSyntax::ArgumentCount {
            func: FUNC,
            expected: "1 or 2",
            found: args.len(),
        });
    }

    let count = integer(FUNC, &args[0])?;
    let position = match args.get(1) {
        Some(Argument { token: Token::Ident(ident), .. }) => ident.parse::<StepPosition>()?,
        Some(arg) => return Err(InvalidSyntax::InvalidStepPosition(arg.text.to_string())),
        None => StepPosition::End,
    };

    Steps::new(count, position).map(EasingFunction::Steps)
}

/// A `<number>` token as f64
fn number(func: &'static str, arg: &Argument<'_>) -> std::result::Result<f64, InvalidSyntax> {
    let Token::Number { value, .. } = arg.token else {
        return Err(InvalidSyntax::NotANumber { func, value: arg.text.to_string() });
    };

    // The tokenizer stores single precision; the source text keeps the rest.
    let value = arg.text.parse::<f64>().unwrap_or(f64::from(value));
    if !value.is_finite() {
        return Err(InvalidSyntax::NonFinite { func, value: arg.text.to_string() });
    }
    Ok(value)
}

/// An `<integer>` token; fractional and exponent forms are rejected
fn integer(func: &'static str, arg: &Argument<'_>) -> std::result::Result<i64, InvalidSyntax> {
    match arg.token {
        Token::Number { int_value: Some(_), .. } => {}
        Token::Number { .. } => {
            return Err(InvalidSyntax::NotAnInteger { func, value: arg.text.to_string() });
        }
        _ => return Err(InvalidSyntax::NotANumber { func, value: arg.text.to_string() }),
    }

    // int_value saturates at i32 bounds, so read the exact count from the source.
    arg.text.parse::<i64>().map_err(|_| {
        if arg.text.starts_with('-') {
            InvalidSyntax::NonPositiveStepCount(arg.text.to_string())
        } else {
            InvalidSyntax::StepCountTooLarge(arg.text.to_string())
        }
    })
}
