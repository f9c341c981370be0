//! # Logic expressions
//!
//! The update rule of every node is a `LogicExpression`: a Boolean formula over node names.
//! The grammar uses `!` for negation, `&` for conjunction and `|` for disjunction, with the
//! usual precedence (`!` binds tightest, `|` loosest) and parentheses for grouping. The word
//! forms `not`, `and`, `or` as well as `&&` and `||` are accepted too. Constants are written
//! as `true`/`false` (or `1`/`0`).
//!
//! ```rust
//! use cell_bn_sim::LogicExpression;
//! use std::collections::HashMap;
//!
//! let expression = LogicExpression::parse("HIF1 & !(oxygen | ERK)").unwrap();
//! assert_eq!(vec!["ERK", "HIF1", "oxygen"], expression.dependencies());
//!
//! let values = HashMap::from([
//!     ("HIF1".to_string(), true),
//!     ("oxygen".to_string(), false),
//!     ("ERK".to_string(), false),
//! ]);
//! assert!(expression.evaluate(&values).unwrap());
//! ```
//!
//! Node names are matched as whole tokens, so `GLUT1` never matches inside `GLUT1I`, and
//! `! A` means the same as `!A`. Evaluation does not short-circuit: every name in the
//! expression must have a value, otherwise the evaluation fails.
//!
//! ```rust
//! use cell_bn_sim::LogicExpression;
//! use std::collections::HashMap;
//!
//! let expression = LogicExpression::parse("false & GLUT1I").unwrap();
//! let values = HashMap::from([("GLUT1".to_string(), true)]);
//! assert!(expression.evaluate(&values).is_err());
//! ```
