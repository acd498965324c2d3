//! Recognition of `// +build` and `//go:build` lines.

use regex::Regex;
use std::sync::LazyLock;

const GO_BUILD_PREFIX: &str = "//go:build";
const PLUS_BUILD_FIELD: &str = "+build";

/// Deeper nesting than this is treated as a malformed expression.
const MAX_EXPR_DEPTH: usize = 100;

/// One `+build` element: an optional single `!` and a tag name.
static PLUS_BUILD_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!?[\p{L}\p{Nd}_.]+$").expect("valid element regex"));

/// Parse one comment line as a build constraint.
///
/// `text` is the full comment including its `//` opener.
///
/// # Returns
///
/// * `Some(tags)` - The line is a well-formed constraint; every tag it names,
///   with negated tags prefixed by `!`
/// * `None` - The line is not a constraint or is malformed
pub fn parse_constraint_line(text: &str) -> Option<Vec<String>> {
    if let Some(expr) = go_build_expression(text) {
        return parse_go_build(expr);
    }
    parse_plus_build(text)
}

/// Return the expression of a `//go:build` line.
fn go_build_expression(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(GO_BUILD_PREFIX)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c == ' ' || c == '\t' => Some(rest),
        // `//go:buildx` is some other directive
        Some(_) => None,
    }
}

fn parse_plus_build(text: &str) -> Option<Vec<String>> {
    let body = text.strip_prefix("//")?;
    let mut fields = body.split_whitespace();
    if fields.next()? != PLUS_BUILD_FIELD {
        return None;
    }

    let mut tags = Vec::new();
    for field in fields {
        for element in field.split(',') {
            if !PLUS_BUILD_ELEMENT.is_match(element) {
                return None;
            }
            tags.push(element.to_string());
        }
    }

    if tags.is_empty() { None } else { Some(tags) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Ident(&'a str),
    Not,
    And,
    Or,
    LParen,
    RParen,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

fn tokenize(expr: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = expr;

    loop {
        rest = rest.trim_start_matches([' ', '\t']);
        let Some(c) = rest.chars().next() else {
            return Some(tokens);
        };

        let (token, len) = match c {
            '!' => (Token::Not, 1),
            '(' => (Token::LParen, 1),
            ')' => (Token::RParen, 1),
            '&' if rest.starts_with("&&") => (Token::And, 2),
            '|' if rest.starts_with("||") => (Token::Or, 2),
            c if is_ident_char(c) => {
                let len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
                (Token::Ident(&rest[..len]), len)
            }
            _ => return None,
        };
        tokens.push(token);
        rest = &rest[len..];
    }
}

/// Recursive descent over
/// `expr := and ('||' and)*`, `and := unary ('&&' unary)*`,
/// `unary := '!' unary | '(' expr ')' | ident`.
struct ExprParser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    depth: usize,
    tags: Vec<String>,
}

impl<'a> ExprParser<'a> {
    fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, expected: Token<'a>) -> bool {
        if self.tokens.get(self.pos) == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn or_expr(&mut self, negated: bool) -> Option<()> {
        self.and_expr(negated)?;
        while self.eat(Token::Or) {
            self.and_expr(negated)?;
        }
        Some(())
    }

    fn and_expr(&mut self, negated: bool) -> Option<()> {
        self.unary(negated)?;
        while self.eat(Token::And) {
            self.unary(negated)?;
        }
        Some(())
    }

    fn unary(&mut self, negated: bool) -> Option<()> {
        self.depth += 1;
        if self.depth > MAX_EXPR_DEPTH {
            return None;
        }

        match self.advance()? {
            Token::Not => self.unary(!negated)?,
            Token::LParen => {
                self.or_expr(negated)?;
                if !self.eat(Token::RParen) {
                    return None;
                }
            }
            Token::Ident(name) if negated => self.tags.push(format!("!{}", name)),
            Token::Ident(name) => self.tags.push(name.to_string()),
            Token::And | Token::Or | Token::RParen => return None,
        }

        self.depth -= 1;
        Some(())
    }
}

fn parse_go_build(expr: &str) -> Option<Vec<String>> {
    let mut parser = ExprParser {
        tokens: tokenize(expr)?,
        pos: 0,
        depth: 0,
        tags: Vec::new(),
    };
    parser.or_expr(false)?;
    if parser.pos != parser.tokens.len() {
        return None;
    }
    Some(parser.tags)
}
