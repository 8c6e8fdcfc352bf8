// src/calculator/mod.rs
// Core arithmetic evaluator: validate two textual operands, dispatch on an
// operator symbol, return a value or a structured error.

use serde::Deserialize;
use thiserror::Error;

/// The four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Resolve a raw operator symbol. Anything outside `+ - * /` is unknown.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// The three recoverable failure kinds an evaluation can produce.
/// Messages are fixed and user-facing; the HTTP layer renders them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Invalid input: Please provide valid numbers")]
    InvalidOperand,
    #[error("Cannot divide by zero")]
    DivisionByZero,
    #[error("Invalid operation")]
    UnsupportedOperator,
}

/// One calculation as it arrives from the transport layer. Operands are text
/// because they originate from form fields; nothing guarantees they are
/// numeric. Deserializes from both URL-encoded form bodies and JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    pub num1: String,
    pub num2: String,
    pub op: String,
}

impl CalculationRequest {
    pub fn evaluate(&self) -> Result<f64, CalcError> {
        evaluate(&self.num1, &self.num2, &self.op)
    }
}

/// Parse one operand under the strict policy: after trimming whitespace, the
/// whole remaining text must be a finite float literal. Exponential notation
/// is fine (`"1.5e3"`); partial-numeric strings (`"5abc"`), empty strings,
/// and non-finite literals (`"inf"`, `"NaN"`) are rejected.
pub fn parse_operand(raw: &str) -> Result<f64, CalcError> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(CalcError::InvalidOperand),
    }
}

/// Evaluate a calculation: either a finite `f64` or one of the three
/// `CalcError` kinds. Pure and synchronous; safe to call from any number of
/// request handlers concurrently.
///
/// The operator symbol is resolved before the operands are validated, so an
/// unknown operator is reported as `UnsupportedOperator` even when the
/// operands are garbage too.
pub fn evaluate(operand1: &str, operand2: &str, operator: &str) -> Result<f64, CalcError> {
    let op = Operator::from_symbol(operator).ok_or(CalcError::UnsupportedOperator)?;
    let n1 = parse_operand(operand1)?;
    let n2 = parse_operand(operand2)?;

    match op {
        Operator::Add => Ok(n1 + n2),
        Operator::Subtract => Ok(n1 - n2),
        Operator::Multiply => Ok(n1 * n2),
        Operator::Divide => {
            // Never surfaced as an IEEE infinity; always the error channel.
            if n2 == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(n1 / n2)
            }
        }
    }
}
