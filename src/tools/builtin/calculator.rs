//! Arithmetic expression evaluator tool.
//!
//! A demonstration-only evaluator: it accepts `+ - * / %`, parentheses,
//! unary minus, and decimal numbers, and makes no guarantees beyond that.
//! Anything else is rejected with an error describing the offending input.

use serde_json::json;

use crate::tools::{FunctionTool, ToolResult};

/// Errors produced while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },

    #[error("invalid number at position {position}")]
    InvalidNumber { position: usize },

    #[error("division by zero")]
    DivisionByZero,
}

/// Evaluates an arithmetic expression.
///
/// # Errors
///
/// Returns an [`EvalError`] for malformed input or division by zero.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let mut parser = Parser::new(expression);
    let value = parser.parse_expression()?;
    parser.skip_whitespace();
    if parser.position < parser.chars.len() {
        return Err(EvalError::TrailingInput {
            position: parser.position,
        });
    }
    Ok(value)
}

/// Formats an evaluation result the way a person would write it:
/// integral values without a fractional part, everything else as-is.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

struct Parser {
    chars: Vec<char>,
    position: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .chars
            .get(self.position)
            .is_some_and(|c| c.is_whitespace())
        {
            self.position += 1;
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.get(self.position).copied()
    }

    // expression := term (('+' | '-') term)*
    fn parse_expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.parse_term()?;
        while let Some(op) = self.peek() {
            match op {
                '+' => {
                    self.position += 1;
                    value += self.parse_term()?;
                }
                '-' => {
                    self.position += 1;
                    value -= self.parse_term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // term := unary (('*' | '/' | '%') unary)*
    fn parse_term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.parse_unary()?;
        while let Some(op) = self.peek() {
            match op {
                '*' => {
                    self.position += 1;
                    value *= self.parse_unary()?;
                }
                '/' => {
                    self.position += 1;
                    let divisor = self.parse_unary()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                '%' => {
                    self.position += 1;
                    let divisor = self.parse_unary()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value %= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // unary := '-' unary | primary
    fn parse_unary(&mut self) -> Result<f64, EvalError> {
        if self.peek() == Some('-') {
            self.position += 1;
            return Ok(-self.parse_unary()?);
        }
        self.parse_primary()
    }

    // primary := number | '(' expression ')'
    fn parse_primary(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some('(') => {
                self.position += 1;
                let value = self.parse_expression()?;
                match self.peek() {
                    Some(')') => {
                        self.position += 1;
                        Ok(value)
                    }
                    Some(ch) => Err(EvalError::UnexpectedCharacter {
                        ch,
                        position: self.position,
                    }),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.parse_number(),
            Some(ch) => Err(EvalError::UnexpectedCharacter {
                ch,
                position: self.position,
            }),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn parse_number(&mut self) -> Result<f64, EvalError> {
        let start = self.position;
        while self
            .chars
            .get(self.position)
            .is_some_and(|c| c.is_ascii_digit() || *c == '.')
        {
            self.position += 1;
        }

        let literal: String = self.chars[start..self.position].iter().collect();
        literal
            .parse::<f64>()
            .map_err(|_| EvalError::InvalidNumber { position: start })
    }
}

/// Creates the calculator tool.
///
/// Valid input produces a numeric result string; invalid input produces a
/// result string prefixed with `Error evaluating expression:`, mirroring the
/// catch-all behavior the tool interface expects.
pub fn calculator_tool() -> FunctionTool {
    FunctionTool::new(
        "calculator",
        "Use this tool to evaluate mathematical expressions. \
         Pass a valid math expression as a string (e.g., '25 * 4 + 10'). \
         Returns the computed result. Use this whenever the user asks a math question.",
        |args, _ctx| {
            Box::pin(async move {
                let expression = args
                    .get("expression")
                    .and_then(|v| v.as_str())
                    .unwrap_or("");

                match evaluate(expression) {
                    Ok(value) => ToolResult::success(json!({ "result": format_value(value) })),
                    Err(err) => ToolResult::error(format!("Error evaluating expression: {err}")),
                }
            })
        },
    )
    .with_parameters_schema(json!({
        "type": "object",
        "properties": {
            "expression": {
                "type": "string",
                "description": "A mathematical expression to evaluate, e.g. '25 * 4 + 10'"
            }
        },
        "required": ["expression"]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{Tool, ToolContext};
    use std::collections::HashMap;

    #[test]
    fn evaluates_basic_arithmetic_with_precedence() {
        assert_eq!(evaluate("25 * 4 + 10").unwrap(), 110.0);
        assert_eq!(evaluate("10 + 25 * 4").unwrap(), 110.0);
        assert_eq!(evaluate("2 + 3 * 4 - 6 / 2").unwrap(), 11.0);
        assert_eq!(evaluate("10 % 3").unwrap(), 1.0);
    }

    #[test]
    fn evaluates_parentheses_and_unary_minus() {
        assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(evaluate("-(2 + 3)").unwrap(), -5.0);
        assert_eq!(evaluate("--4").unwrap(), 4.0);
        assert_eq!(evaluate("2 * -3").unwrap(), -6.0);
    }

    #[test]
    fn evaluates_decimals() {
        assert_eq!(evaluate("1.5 + 2.25").unwrap(), 3.75);
        assert_eq!(evaluate(".5 * 4").unwrap(), 2.0);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(evaluate(""), Err(EvalError::UnexpectedEnd)));
        assert!(matches!(
            evaluate("2 +"),
            Err(EvalError::UnexpectedEnd)
        ));
        assert!(matches!(
            evaluate("two plus two"),
            Err(EvalError::UnexpectedCharacter { ch: 't', .. })
        ));
        assert!(matches!(
            evaluate("(1 + 2"),
            Err(EvalError::UnexpectedEnd)
        ));
        assert!(matches!(
            evaluate("1 2"),
            Err(EvalError::TrailingInput { .. })
        ));
        assert!(matches!(
            evaluate("1..2 + 1"),
            Err(EvalError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn rejects_division_by_zero() {
        assert_eq!(evaluate("1 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1 % 0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn formats_integral_results_without_fraction() {
        assert_eq!(format_value(110.0), "110");
        assert_eq!(format_value(-6.0), "-6");
        assert_eq!(format_value(3.75), "3.75");
    }

    #[tokio::test]
    async fn tool_returns_numeric_result_string() {
        let tool = calculator_tool();
        let mut args = HashMap::new();
        args.insert("expression".to_string(), json!("25 * 4 + 10"));

        let result = tool.run_async(args, &ToolContext::new()).await;
        assert!(result.is_success());
        assert_eq!(result.data()["result"], json!("110"));
    }

    #[tokio::test]
    async fn tool_prefixes_errors() {
        let tool = calculator_tool();
        let mut args = HashMap::new();
        args.insert("expression".to_string(), json!("what is math"));

        let result = tool.run_async(args, &ToolContext::new()).await;
        assert!(!result.is_success());
        assert!(result
            .error_message()
            .unwrap()
            .starts_with("Error evaluating expression:"));
    }
}
