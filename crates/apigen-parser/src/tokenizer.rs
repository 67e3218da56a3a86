//! Signature tokenizer
//!
//! Splits one raw signature line into its return type, method name and
//! argument `(type, name)` pairs. Nothing is resolved here; the output is
//! plain text handed to the [`ModelBuilder`](crate::ModelBuilder).
//!
//! Grammar, after type parameters and modifiers are removed:
//!
//! ```text
//! signature := returnType name '(' [ arg { ',' arg } [','] ] ')' [';']
//! arg       := type name
//! ```

use crate::error::ParseError;
use apigen_types::PrimitiveType;
use regex::Regex;
use std::sync::LazyLock;

/// Declaration modifiers removed before matching
pub const MODIFIERS: [&str; 8] = [
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "synchronized",
    "native",
];

// `\b` would split on `$`, which identifiers may contain, so a modifier
// must follow a delimiter and be followed by whitespace.
static MODIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(^|[\s(,])(?:(?:{})\s+)+", MODIFIERS.join("|")))
        .expect("modifier pattern is valid")
});

static METHOD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S+)\s+(\S+?)\s*\(([^()]*)\)\s*;?\s*$").expect("method pattern is valid")
});

static ARG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^\s,]+)\s+([^\s,]+)\s*(?:,|$)").expect("argument pattern is valid")
});

/// One `(type, name)` pair from an argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentTokens {
    /// Type text as written (generics already removed)
    pub type_name: String,
    /// Argument name
    pub name: String,
}

/// Unresolved pieces of a single signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureTokens {
    /// Cleaned signature text, used in diagnostics
    pub signature: String,
    /// Return type text
    pub return_type: String,
    /// Method name
    pub name: String,
    /// Arguments in declaration order
    pub arguments: Vec<ArgumentTokens>,
}

/// Tokenize a raw signature line
pub fn tokenize(raw: &str) -> Result<SignatureTokens, ParseError> {
    let signature = normalize(raw)?;

    let caps = METHOD_PATTERN
        .captures(&signature)
        .ok_or_else(|| ParseError::malformed(&signature, "expected '<returnType> <name>(<args>)'"))?;

    let return_type = caps[1].to_string();
    let name = caps[2].to_string();
    if !is_identifier(&name) {
        return Err(ParseError::malformed(
            &signature,
            format!("'{}' is not a valid method name", name),
        ));
    }

    let arguments = split_arguments(&signature, &caps[3])?;

    Ok(SignatureTokens {
        signature,
        return_type,
        name,
        arguments,
    })
}

/// Remove type parameters and declaration modifiers, and trim the result
pub fn normalize(raw: &str) -> Result<String, ParseError> {
    let stripped = strip_type_parameters(raw)?;
    Ok(MODIFIER_PATTERN
        .replace_all(&stripped, "${1}")
        .trim()
        .to_string())
}

/// Remove every `<...>` group, honouring nesting
fn strip_type_parameters(raw: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;

    for c in raw.chars() {
        match c {
            '<' => depth += 1,
            '>' => {
                if depth == 0 {
                    return Err(ParseError::malformed(raw.trim(), "unbalanced '>'"));
                }
                depth -= 1;
            }
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::malformed(raw.trim(), "unbalanced '<'"));
    }
    Ok(out)
}

/// Split an argument list into `(type, name)` pairs, left to right
///
/// The whole list must be consumed; leftover text is malformed.
fn split_arguments(signature: &str, args: &str) -> Result<Vec<ArgumentTokens>, ParseError> {
    let mut arguments = Vec::new();
    let mut rest = args;

    while !rest.trim().is_empty() {
        let caps = ARG_PATTERN.captures(rest).ok_or_else(|| {
            ParseError::malformed(
                signature,
                format!("cannot parse arguments at '{}'", rest.trim()),
            )
        })?;

        let name = &caps[2];
        if !is_identifier(name) {
            return Err(ParseError::malformed(
                signature,
                format!("'{}' is not a valid argument name", name),
            ));
        }

        let type_name = &caps[1];
        if type_name == PrimitiveType::Void.keyword() {
            return Err(ParseError::malformed(
                signature,
                format!("argument '{}' cannot be void", name),
            ));
        }

        arguments.push(ArgumentTokens {
            type_name: type_name.to_string(),
            name: name.to_string(),
        });

        // Group 0 always exists on a successful match
        let consumed = caps.get(0).map_or(rest.len(), |m| m.end());
        rest = &rest[consumed..];
    }

    Ok(arguments)
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`, Unicode letters allowed
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
