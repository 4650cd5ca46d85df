use super::{Finding, Rule, RuleContext, RuleError};

pub const NAME: &str = "one-expectation-per-example";

/// Leaf examples may make at most `max` expectations.
#[derive(Debug, Clone)]
pub struct OneExpectationPerExample {
    max: usize,
}

impl OneExpectationPerExample {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Rule for OneExpectationPerExample {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Each example (`it`/`its`) makes a single expectation."
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Result<Vec<Finding>, RuleError> {
        Ok(ctx
            .parsed
            .blocks()
            .filter(|b| b.kind.is_example() && b.is_leaf() && b.assertion_count > self.max)
            .map(|b| {
                Finding::new(
                    b.line,
                    format!(
                        "{} makes {} expectations (limit {} per example)",
                        b.title(),
                        b.assertion_count,
                        self.max
                    ),
                )
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "one_expectation_tests.rs"]
mod tests;
