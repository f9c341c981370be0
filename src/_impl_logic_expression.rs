use crate::_logic_parser::parse_logic;
use crate::error::{EvaluationError, LogicParseError};
use crate::{Logic, LogicExpression, Valuation};
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

impl LogicExpression {
    /// Parse a new `LogicExpression` from its text.
    ///
    /// The text is kept verbatim (including whitespace) and returned by `Display`.
    pub fn parse(text: &str) -> Result<LogicExpression, LogicParseError> {
        Ok(LogicExpression {
            text: text.to_string(),
            root: parse_logic(text)?,
        })
    }

    /// The original text of this expression.
    pub fn get_text(&self) -> &str {
        &self.text
    }

    /// The parsed formula of this expression.
    pub fn as_logic(&self) -> &Logic {
        &self.root
    }

    /// Evaluate the expression using the given node values.
    ///
    /// Fails with `EvaluationError::UnknownNode` if a referenced name has no value.
    pub fn evaluate<V: Valuation + ?Sized>(&self, values: &V) -> Result<bool, EvaluationError> {
        self.root.evaluate(values)
    }

    /// A sorted list of node names referenced by this expression (without duplicates).
    pub fn dependencies(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        self.root.collect_names(&mut names);
        names.into_iter().collect()
    }
}

impl TryFrom<&str> for LogicExpression {
    type Error = LogicParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        LogicExpression::parse(value)
    }
}

impl FromStr for LogicExpression {
    type Err = LogicParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogicExpression::parse(s)
    }
}

impl Display for LogicExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::EvaluationError;
    use crate::LogicExpression;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn valuation(values: &[(&str, bool)]) -> HashMap<String, bool> {
        values.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn negation_spacing_invariance() {
        let values = valuation(&[("p53", false)]);
        for text in ["!p53", "! p53", "!  p53"] {
            let expression = LogicExpression::parse(text).unwrap();
            assert_eq!(Ok(true), expression.evaluate(&values), "{}", text);
        }
        let values = valuation(&[("p53", true)]);
        for text in ["!p53", "! p53", "!  p53"] {
            let expression = LogicExpression::parse(text).unwrap();
            assert_eq!(Ok(false), expression.evaluate(&values), "{}", text);
        }
    }

    #[test]
    fn word_boundary_substitution() {
        let expression = LogicExpression::parse("GLUT1I").unwrap();
        // Both declaration orders, since a prefix-based substitution would depend on it.
        let values = valuation(&[("GLUT1", true), ("GLUT1I", false)]);
        assert_eq!(Ok(false), expression.evaluate(&values));
        let values = valuation(&[("GLUT1I", true), ("GLUT1", false)]);
        assert_eq!(Ok(true), expression.evaluate(&values));

        let expression = LogicExpression::parse("GLUT1 & !GLUT1I").unwrap();
        let values = valuation(&[("GLUT1", true), ("GLUT1I", false)]);
        assert_eq!(Ok(true), expression.evaluate(&values));
        assert_eq!(vec!["GLUT1", "GLUT1I"], expression.dependencies());
    }

    #[test]
    fn unknown_node_is_reported() {
        let expression = LogicExpression::parse("A & MYC").unwrap();
        assert_eq!(
            Err(EvaluationError::UnknownNode("MYC".to_string())),
            expression.evaluate(&valuation(&[("A", true)]))
        );
    }

    #[test]
    fn text_is_preserved() {
        let text = "  !A |  (B&C) ";
        let expression: LogicExpression = text.parse().unwrap();
        assert_eq!(text, expression.get_text());
        assert_eq!(text, expression.to_string());
        assert_eq!("(!A | (B & C))", expression.as_logic().to_string());
    }

    #[test]
    fn precedence() {
        // `!` > `&` > `|`
        let expression = LogicExpression::parse("a | b & !c").unwrap();
        let values = valuation(&[("a", false), ("b", true), ("c", false)]);
        assert_eq!(Ok(true), expression.evaluate(&values));
        let values = valuation(&[("a", false), ("b", true), ("c", true)]);
        assert_eq!(Ok(false), expression.evaluate(&values));
        let expression = LogicExpression::parse("(a | b) & !c").unwrap();
        let values = valuation(&[("a", true), ("b", false), ("c", true)]);
        assert_eq!(Ok(false), expression.evaluate(&values));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Repeated evaluation of the same expression under the same valuation always agrees.
        #[test]
        fn evaluation_is_deterministic(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
            let expression = LogicExpression::parse("(a & !b) | (!a & c) | !(b | c)").unwrap();
            let values = valuation(&[("a", a), ("b", b), ("c", c)]);
            let first = expression.evaluate(&values).unwrap();
            for _ in 0..50 {
                prop_assert_eq!(first, expression.evaluate(&values).unwrap());
            }
            let expected = (a && !b) || (!a && c) || !(b || c);
            prop_assert_eq!(expected, first);
        }
    }
}
