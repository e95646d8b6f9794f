//! SQL `LIKE` patterns and their in-process evaluation.

use super::MatchStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A SQL `LIKE` pattern built from user input.
///
/// User text is inserted verbatim: `%` and `_` typed by the user keep their
/// wildcard meaning and a backslash escapes the following character, exactly
/// as `PostgreSQL` interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikePattern(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyOne,
    AnyMany,
}

impl LikePattern {
    /// Wraps an already-formed pattern.
    #[must_use]
    pub fn from_raw(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Builds the pattern a strategy uses for the given text.
    #[must_use]
    pub fn for_strategy(strategy: MatchStrategy, text: &str) -> Self {
        let pattern = match strategy {
            MatchStrategy::Contains => format!("%{text}%"),
            MatchStrategy::Prefix => format!("{text}%"),
            MatchStrategy::Exact => text.to_owned(),
        };
        Self(pattern)
    }

    /// Returns the pattern text passed to the database.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Evaluates the pattern like `ILIKE` would.
    #[must_use]
    pub fn matches_ignoring_case(&self, candidate: &str) -> bool {
        let tokens = tokenize(&self.0);
        let text: Vec<char> = candidate.chars().map(fold_case).collect();
        match_tokens(&tokens, &text)
    }
}

impl fmt::Display for LikePattern {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Lowercases one character to exactly one character, so `_` always consumes
/// a whole letter.
fn fold_case(value: char) -> char {
    value.to_lowercase().next().unwrap_or(value)
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(current) = chars.next() {
        match current {
            '%' => {
                if tokens.last() != Some(&Token::AnyMany) {
                    tokens.push(Token::AnyMany);
                }
            }
            '_' => tokens.push(Token::AnyOne),
            // A trailing backslash has nothing to escape and is kept literally.
            '\\' => {
                let escaped = chars.next().unwrap_or('\\');
                tokens.push(Token::Literal(fold_case(escaped)));
            }
            other => tokens.push(Token::Literal(fold_case(other))),
        }
    }
    tokens
}

/// Wildcard matching with single-point backtracking on the last `%`.
fn match_tokens(tokens: &[Token], text: &[char]) -> bool {
    let mut token_pos = 0_usize;
    let mut text_pos = 0_usize;
    let mut backtrack: Option<(usize, usize)> = None;

    while let Some(&actual) = text.get(text_pos) {
        match tokens.get(token_pos) {
            Some(Token::AnyMany) => {
                backtrack = Some((token_pos, text_pos));
                token_pos += 1;
            }
            Some(Token::AnyOne) => {
                token_pos += 1;
                text_pos += 1;
            }
            Some(Token::Literal(expected)) if *expected == actual => {
                token_pos += 1;
                text_pos += 1;
            }
            _ => {
                let Some((star_token, star_text)) = backtrack else {
                    return false;
                };
                backtrack = Some((star_token, star_text + 1));
                token_pos = star_token + 1;
                text_pos = star_text + 1;
            }
        }
    }

    tokens
        .get(token_pos..)
        .is_some_and(|rest| rest.iter().all(|token| *token == Token::AnyMany))
}
