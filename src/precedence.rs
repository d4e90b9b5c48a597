use std::cmp::Ordering;

use crate::mapping::UrlMapping;

const WILDCARD: &str = "*";
const CAPTURED_WILDCARD: &str = "(*)";
const DOUBLE_WILDCARD: &str = "**";
const CAPTURED_DOUBLE_WILDCARD: &str = "(**)";

/// Total precedence order over mappings: `Greater` means `a` should match
/// before `b`.
///
/// Applied in sequence until one rule discriminates:
/// 1. fewer double-wildcard tokens;
/// 2. fewer single-wildcard tokens;
/// 3. a mapping with no static tokens always ranks below one with any;
/// 4. more static tokens;
/// 5. first token position where one side is a literal and the other a single
///    wildcard decides, literal winning.
pub fn compare_precedence(a: &UrlMapping, b: &UrlMapping) -> Ordering {
    if a.data().url_pattern() == b.data().url_pattern() {
        return Ordering::Equal;
    }

    let double = double_wildcard_count(b).cmp(&double_wildcard_count(a));
    if double != Ordering::Equal {
        return double;
    }

    let single = single_wildcard_count(b).cmp(&single_wildcard_count(a));
    if single != Ordering::Equal {
        return single;
    }

    let a_static = static_token_count(a);
    let b_static = static_token_count(b);
    // the all-wildcard pattern loses to anything with a static token,
    // regardless of the raw count comparison below
    if b_static == 0 && a_static > 0 {
        return Ordering::Greater;
    }
    if a_static == 0 && b_static > 0 {
        return Ordering::Less;
    }

    let statics = a_static.cmp(&b_static);
    if statics != Ordering::Equal {
        return statics;
    }

    for (a_token, b_token) in a.data().tokens().iter().zip(b.data().tokens()) {
        match (is_single_wildcard(a_token), is_single_wildcard(b_token)) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }

    Ordering::Equal
}

fn single_wildcard_count(mapping: &UrlMapping) -> usize {
    mapping
        .data()
        .tokens()
        .iter()
        .filter(|t| is_single_wildcard(t))
        .count()
}

fn double_wildcard_count(mapping: &UrlMapping) -> usize {
    mapping
        .data()
        .tokens()
        .iter()
        .filter(|t| is_double_wildcard(t))
        .count()
}

fn static_token_count(mapping: &UrlMapping) -> usize {
    mapping
        .data()
        .tokens()
        .iter()
        .filter(|t| !t.is_empty() && !is_single_wildcard(t) && !is_double_wildcard(t))
        .count()
}

fn is_single_wildcard(token: &str) -> bool {
    token == WILDCARD || token == CAPTURED_WILDCARD
}

fn is_double_wildcard(token: &str) -> bool {
    token == DOUBLE_WILDCARD || token == CAPTURED_DOUBLE_WILDCARD
}
