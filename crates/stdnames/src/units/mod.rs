//! Unit expression normalizer.
//!
//! Canonicalizes a unit expression into a stable display string. Input is a
//! plain expression (`m/s^2`, `meters per second`, `keV`) optionally suffixed
//! with a format selector (`m/s:P`). Accepted expressions:
//!
//! - factors joined by `.`, `*`, `\u{b7}`, `/`, whitespace, or the word `per`
//! - `/` and `per` negate the exponent of the following factor
//! - exponents written `^n`, `**n`, or as Unicode superscripts
//! - tokens resolved by symbol, long name, alias, or SI-prefix split
//!
//! The sentinel `none` bypasses parsing and is returned unchanged; callers
//! treat it as "no units". The empty expression is the dimensionless unit and
//! renders as the empty string. Normalization is idempotent: every rendering
//! except the math-markup wrapping re-parses to the same unit, and an already
//! wrapped math-markup string is passed through untouched.

mod symbols;

use symbols::{Prefix, UnitDef};

/// Sentinel meaning "dimensionless/unspecified"; never persisted.
pub const NO_UNITS: &str = "none";

const MATH_OPEN: &str = "$`";
const MATH_CLOSE: &str = "`$";

/// Rendering formats, selected by suffixing the expression with
/// `:<selector>`. Selectors are accepted with or without a leading `~`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitFormat {
    /// `F`: short symbols, dot-separated, caret exponents (`m.s^-1`).
    #[default]
    Compact,
    /// `P`: middle-dot separators and superscript exponents (`m\u{b7}s\u{207b}\u{b9}`).
    Pretty,
    /// `D`: long names (`meter.second^-1`).
    Long,
    /// `L`: math markup wrapped in inline delimiters.
    Latex,
}

impl UnitFormat {
    pub fn from_selector(selector: &str) -> Result<Self, UnitError> {
        match selector.trim_start_matches('~') {
            "F" => Ok(UnitFormat::Compact),
            "P" => Ok(UnitFormat::Pretty),
            "D" => Ok(UnitFormat::Long),
            "L" => Ok(UnitFormat::Latex),
            _ => Err(UnitError::UnknownFormat(selector.to_string())),
        }
    }
}

/// Normalize `raw` (`<expr>` or `<expr>:<selector>`) into its canonical
/// rendering.
pub fn normalize(raw: &str) -> Result<String, UnitError> {
    let (expr, format) = split_selector(raw)?;
    normalize_expr(expr, format)
}

/// Normalize `raw`, overriding any selector it carries with `format`.
pub fn normalize_with(raw: &str, format: UnitFormat) -> Result<String, UnitError> {
    let expr = raw.split_once(':').map_or(raw, |(expr, _)| expr);
    normalize_expr(expr, format)
}

fn split_selector(raw: &str) -> Result<(&str, UnitFormat), UnitError> {
    match raw.split_once(':') {
        Some((expr, selector)) => Ok((expr, UnitFormat::from_selector(selector)?)),
        None => Ok((raw, UnitFormat::default())),
    }
}

fn normalize_expr(expr: &str, format: UnitFormat) -> Result<String, UnitError> {
    let expr = expr.trim();
    if expr == NO_UNITS {
        return Ok(NO_UNITS.to_string());
    }
    // A stored rendering that is already math-wrapped cannot be re-parsed;
    // pass it through so re-normalization stays a no-op.
    if expr.starts_with(MATH_OPEN) && expr.ends_with(MATH_CLOSE) && expr.len() > 4 {
        return Ok(expr.to_string());
    }
    let unit = Unit::parse(expr)?;
    Ok(unit.render(format))
}

/// A parsed unit expression: an ordered product of prefixed unit factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    factors: Vec<Factor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Factor {
    prefix: Option<&'static Prefix>,
    def: &'static UnitDef,
    exponent: i32,
}

impl Factor {
    fn symbol(&self) -> String {
        match self.prefix {
            Some(prefix) => format!("{}{}", prefix.symbol, self.def.symbol),
            None => self.def.symbol.to_string(),
        }
    }

    fn name(&self) -> String {
        match self.prefix {
            Some(prefix) => format!("{}{}", prefix.name, self.def.name),
            None => self.def.name.to_string(),
        }
    }
}

enum Token {
    Mul,
    Div,
    Term(String),
}

impl Unit {
    pub fn parse(expr: &str) -> Result<Self, UnitError> {
        let mut factors: Vec<Factor> = Vec::new();
        let mut negate = false;
        let mut pending = false;
        for token in tokenize(expr) {
            match token {
                Token::Mul => {}
                Token::Div => {
                    negate = true;
                    pending = true;
                }
                Token::Term(term) if term == "per" => {
                    negate = true;
                    pending = true;
                }
                Token::Term(term) => {
                    let factor = parse_factor(&term, negate)?;
                    // `1` is the neutral factor
                    if let Some(factor) = factor {
                        merge_factor(&mut factors, factor);
                    }
                    negate = false;
                    pending = false;
                }
            }
        }
        if pending {
            return Err(UnitError::Incomplete(expr.to_string()));
        }
        Ok(Unit { factors })
    }

    pub fn render(&self, format: UnitFormat) -> String {
        if self.factors.is_empty() {
            return String::new();
        }
        match format {
            UnitFormat::Compact => self.join(".", |f| caret_form(&f.symbol(), f.exponent)),
            UnitFormat::Long => self.join(".", |f| caret_form(&f.name(), f.exponent)),
            UnitFormat::Pretty => self.join("\u{b7}", |f| {
                let mut out = f.symbol();
                if f.exponent != 1 {
                    out.extend(f.exponent.to_string().chars().map(superscript));
                }
                out
            }),
            UnitFormat::Latex => {
                let inner = self.join("\\,", |f| {
                    if f.exponent == 1 {
                        f.symbol()
                    } else {
                        format!("{}^{{{}}}", f.symbol(), f.exponent)
                    }
                });
                format!("{MATH_OPEN}{inner}{MATH_CLOSE}")
            }
        }
    }

    fn join(&self, separator: &str, render: impl Fn(&Factor) -> String) -> String {
        self.factors
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn caret_form(base: &str, exponent: i32) -> String {
    if exponent == 1 {
        base.to_string()
    } else {
        format!("{base}^{exponent}")
    }
}

fn superscript(c: char) -> char {
    match c {
        '0' => '\u{2070}',
        '1' => '\u{b9}',
        '2' => '\u{b2}',
        '3' => '\u{b3}',
        '4' => '\u{2074}',
        '5' => '\u{2075}',
        '6' => '\u{2076}',
        '7' => '\u{2077}',
        '8' => '\u{2078}',
        '9' => '\u{2079}',
        '-' => '\u{207b}',
        other => other,
    }
}

fn tokenize(expr: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = expr.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                current.push('^');
            }
            '.' | '*' | '\u{b7}' => {
                flush(&mut tokens, &mut current);
                tokens.push(Token::Mul);
            }
            '/' => {
                flush(&mut tokens, &mut current);
                tokens.push(Token::Div);
            }
            c if c.is_whitespace() => {
                flush(&mut tokens, &mut current);
            }
            c => current.push(c),
        }
    }
    flush(&mut tokens, &mut current);
    tokens
}

fn flush(tokens: &mut Vec<Token>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(Token::Term(std::mem::take(current)));
    }
}

fn parse_factor(term: &str, negate: bool) -> Result<Option<Factor>, UnitError> {
    let term = desuperscript(term);
    let (base, mut exponent) = match term.split_once('^') {
        Some((base, exp)) => {
            let exponent: i32 = exp
                .parse()
                .map_err(|_| UnitError::InvalidExponent(term.clone()))?;
            (base, exponent)
        }
        None => (term.as_str(), 1),
    };
    if base == "1" {
        return Ok(None);
    }
    let (prefix, def) =
        symbols::lookup(base).ok_or_else(|| UnitError::Undefined(base.to_string()))?;
    if negate {
        exponent = -exponent;
    }
    Ok(Some(Factor { prefix, def, exponent }))
}

/// Rewrite Unicode superscript exponents into caret form so `s\u{207b}\u{b9}`
/// parses like `s^-1`.
fn desuperscript(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut in_exponent = false;
    for c in term.chars() {
        let mapped = match c {
            '\u{2070}' => Some('0'),
            '\u{b9}' => Some('1'),
            '\u{b2}' => Some('2'),
            '\u{b3}' => Some('3'),
            '\u{2074}' => Some('4'),
            '\u{2075}' => Some('5'),
            '\u{2076}' => Some('6'),
            '\u{2077}' => Some('7'),
            '\u{2078}' => Some('8'),
            '\u{2079}' => Some('9'),
            '\u{207b}' => Some('-'),
            '\u{207a}' => Some('+'),
            _ => None,
        };
        match mapped {
            Some(digit) => {
                if !in_exponent {
                    out.push('^');
                    in_exponent = true;
                }
                out.push(digit);
            }
            None => {
                in_exponent = false;
                out.push(c);
            }
        }
    }
    out
}

/// Repeated factors collapse into one, summing exponents in first-seen
/// position; zero exponents drop out.
fn merge_factor(factors: &mut Vec<Factor>, factor: Factor) {
    match factors
        .iter()
        .position(|f| f.prefix == factor.prefix && f.def == factor.def)
    {
        Some(i) => {
            factors[i].exponent += factor.exponent;
            if factors[i].exponent == 0 {
                factors.remove(i);
            }
        }
        None => factors.push(factor),
    }
}

/// Unit normalization failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Token does not resolve to any known unit.
    Undefined(String),
    /// Exponent is not a valid integer.
    InvalidExponent(String),
    /// Expression ends on a division with no following factor.
    Incomplete(String),
    /// Format selector is not recognized.
    UnknownFormat(String),
}

impl std::fmt::Display for UnitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitError::Undefined(token) => {
                write!(f, "'{}' is not a recognized unit", token)
            }
            UnitError::InvalidExponent(term) => {
                write!(f, "'{}' does not carry a valid integer exponent", term)
            }
            UnitError::Incomplete(expr) => {
                write!(f, "unit expression '{}' ends on a division", expr)
            }
            UnitError::UnknownFormat(selector) => {
                write!(f, "'{}' is not a recognized unit format selector", selector)
            }
        }
    }
}

impl std::error::Error for UnitError {}
