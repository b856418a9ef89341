//! Rule-text parser.
//!
//! Keyword checks run in the fixed priority documented on the module
//! (`TOTAL`, `TYPE`, `SET`, `MOST`/`FEWEST`, `+`, `EVEN`/`ODD`, `/`), so
//! rules like `5 / VEGETABLE TYPE >=3` classify as a TYPE rule even though
//! they also contain a slash.

use smallvec::SmallVec;

use super::{Comparison, Criteria, CriteriaError};
use crate::cards::Vegetable;

/// Parse one rule's text into its AST.
pub fn parse(text: &str) -> Result<Criteria, CriteriaError> {
    let rule = text.trim();
    if rule.is_empty() {
        return Err(unrecognized(text));
    }

    if rule.contains("TOTAL") {
        return parse_relative_total(rule);
    }
    if rule.contains("TYPE") {
        return parse_type(rule);
    }
    if rule.contains("SET") {
        return Ok(Criteria::FullSet);
    }
    if let Some(comparison) = comparison_keyword(rule) {
        return parse_relative_single(rule, comparison);
    }
    if rule.contains('+') {
        return parse_plus(rule);
    }
    if rule.contains("EVEN") || rule.contains("ODD") {
        return parse_parity(rule);
    }
    if rule.contains('/') {
        return parse_per_vegetable(rule);
    }

    Err(unrecognized(rule))
}

/// `MOST TOTAL VEGETABLE = 10` / `FEWEST TOTAL VEGETABLE = 7`
fn parse_relative_total(rule: &str) -> Result<Criteria, CriteriaError> {
    let comparison = comparison_keyword(rule).ok_or_else(|| unrecognized(rule))?;
    let points = points_after_eq(rule)?;
    Ok(Criteria::RelativeTotal { comparison, points })
}

/// `5 / VEGETABLE TYPE >=3` / `5 / MISSING VEGETABLE TYPE`
fn parse_type(rule: &str) -> Result<Criteria, CriteriaError> {
    let (lhs, rhs) = rule.split_once('/').ok_or_else(|| unrecognized(rule))?;
    let points = parse_int(lhs, rule)?;

    if rhs.contains("MISSING") {
        return Ok(Criteria::MissingType { points });
    }

    let (_, threshold) = rhs.split_once(">=").ok_or_else(|| unrecognized(rule))?;
    let at_least = parse_count(threshold, rule)?;
    Ok(Criteria::TypeThreshold { at_least, points })
}

/// `MOST LETTUCE = 10` / `FEWEST CARROT = 7`
fn parse_relative_single(rule: &str, comparison: Comparison) -> Result<Criteria, CriteriaError> {
    let keyword = match comparison {
        Comparison::Most => "MOST",
        Comparison::Fewest => "FEWEST",
    };
    // comparison_keyword already matched, so find cannot fail
    let start = rule.find(keyword).unwrap_or(0) + keyword.len();
    let (vegetable, points) = vegetable_eq_points(&rule[start..], rule)?;
    Ok(Criteria::RelativeSingle {
        comparison,
        vegetable,
        points,
    })
}

/// `TOMATO + LETTUCE + CARROT = 8` / `PEPPER + PEPPER + PEPPER = 9`
///
/// The multiplicity of the *first* named vegetable decides the form: more
/// than one occurrence makes this a per-copies rule, even for mixed lists.
fn parse_plus(rule: &str) -> Result<Criteria, CriteriaError> {
    let (lhs, rhs) = rule
        .split_once('=')
        .ok_or_else(|| CriteriaError::MissingPoints {
            rule: rule.to_string(),
        })?;
    let points = parse_int(rhs, rule)?;

    let mut vegetables: SmallVec<[Vegetable; 3]> = SmallVec::new();
    for token in lhs.split('+') {
        vegetables.push(parse_vegetable(token, rule)?);
    }

    let first = vegetables[0];
    let copies = vegetables.iter().filter(|&&v| v == first).count();
    if copies > 1 {
        Ok(Criteria::PerCopies {
            vegetable: first,
            copies,
            points,
        })
    } else {
        Ok(Criteria::MinOfEach { vegetables, points })
    }
}

/// `LETTUCE: EVEN=7, ODD=3`
fn parse_parity(rule: &str) -> Result<Criteria, CriteriaError> {
    let (vegetable, _) = rule.split_once(':').ok_or_else(|| unrecognized(rule))?;
    let vegetable = parse_vegetable(vegetable, rule)?;
    Ok(Criteria::Parity { vegetable })
}

/// `2 / LETTUCE` / `1 / ONION, 1 / TOMATO`
fn parse_per_vegetable(rule: &str) -> Result<Criteria, CriteriaError> {
    let mut terms: SmallVec<[(i32, Vegetable); 3]> = SmallVec::new();
    for pair in rule.split(',') {
        let (weight, vegetable) = pair.split_once('/').ok_or_else(|| unrecognized(rule))?;
        terms.push((parse_int(weight, rule)?, parse_vegetable(vegetable, rule)?));
    }
    Ok(Criteria::PerVegetable { terms })
}

fn comparison_keyword(rule: &str) -> Option<Comparison> {
    if rule.contains("MOST") {
        Some(Comparison::Most)
    } else if rule.contains("FEWEST") {
        Some(Comparison::Fewest)
    } else {
        None
    }
}

/// Split `" LETTUCE = 10"` into its vegetable and point value.
fn vegetable_eq_points(text: &str, rule: &str) -> Result<(Vegetable, i32), CriteriaError> {
    let (vegetable, points) = text
        .split_once('=')
        .ok_or_else(|| CriteriaError::MissingPoints {
            rule: rule.to_string(),
        })?;
    Ok((parse_vegetable(vegetable, rule)?, parse_int(points, rule)?))
}

/// The point value after the rule's `=`.
fn points_after_eq(rule: &str) -> Result<i32, CriteriaError> {
    let (_, points) = rule
        .split_once('=')
        .ok_or_else(|| CriteriaError::MissingPoints {
            rule: rule.to_string(),
        })?;
    parse_int(points, rule)
}

fn parse_vegetable(token: &str, rule: &str) -> Result<Vegetable, CriteriaError> {
    let token = token.trim();
    Vegetable::from_token(token).ok_or_else(|| CriteriaError::UnknownVegetable {
        rule: rule.to_string(),
        token: token.to_string(),
    })
}

fn parse_int(token: &str, rule: &str) -> Result<i32, CriteriaError> {
    let token = token.trim();
    token.parse().map_err(|_| CriteriaError::InvalidNumber {
        rule: rule.to_string(),
        token: token.to_string(),
    })
}

fn parse_count(token: &str, rule: &str) -> Result<usize, CriteriaError> {
    let token = token.trim();
    token.parse().map_err(|_| CriteriaError::InvalidNumber {
        rule: rule.to_string(),
        token: token.to_string(),
    })
}

fn unrecognized(rule: &str) -> CriteriaError {
    CriteriaError::UnrecognizedRule {
        rule: rule.trim().to_string(),
    }
}
