use crate::config::Rule;
use crate::report::Finding;

/// Apply an instruction's rules to its argument text.
///
/// Each rule is searched (not anchored) against `argument` in order; every
/// rule that matches yields its own finding. No state is kept between calls.
#[must_use]
pub fn match_rules(rules: &[Rule], argument: &str, line_number: usize) -> Vec<Finding> {
    rules
        .iter()
        .filter(|rule| rule.regex.is_match(argument))
        .map(|rule| Finding::from_rule(rule, line_number))
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
