//! Operator cell evaluation.
//!
//! Provides direct enum-based dispatch from operator glyph to operation. The
//! glyph set is fixed, so lookup is a `match` rather than a table stored on
//! each symbol; nothing is cached between evaluations.
//!
//! Values are `f64`. Comparisons yield `1.0` or `0.0`. Bitwise operators
//! truncate both operands to `i64` first.

use dots_ir::{Coord, Grid, OperatorSymbol};

use crate::errors::EvalError;

/// Unicode glyphs kept only to reject them, with their ASCII replacement.
pub const DEPRECATED_ALIASES: [(char, char); 4] = [('÷', '/'), ('≠', '!'), ('≤', 'L'), ('≥', 'G')];

/// The ASCII replacement for a deprecated unicode operator glyph.
pub fn deprecated_replacement(glyph: char) -> Option<char> {
    DEPRECATED_ALIASES
        .iter()
        .find(|(alias, _)| *alias == glyph)
        .map(|(_, replacement)| *replacement)
}

/// Every operation an operator cell can perform.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Rem,
    BitOr,
    BitAnd,
    /// `x`. Older programs bound `x` to a two-argument arctangent; that
    /// meaning is not reachable here, use `X` for atan2.
    BitXor,
    NotEq,
    Eq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Angle,
}

impl Operation {
    /// All operations, in glyph-table order.
    pub const ALL: [Operation; 23] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Pow,
        Operation::Rem,
        Operation::BitOr,
        Operation::BitAnd,
        Operation::BitXor,
        Operation::NotEq,
        Operation::Eq,
        Operation::Gt,
        Operation::GtEq,
        Operation::Lt,
        Operation::LtEq,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
        Operation::Asin,
        Operation::Acos,
        Operation::Atan,
        Operation::Atan2,
        Operation::Angle,
    ];

    /// Look up the operation named by `glyph`.
    ///
    /// Deprecated unicode aliases are rejected before the table is consulted.
    pub fn from_glyph(glyph: char) -> Result<Self, EvalError> {
        if let Some(replacement) = deprecated_replacement(glyph) {
            return Err(EvalError::DeprecatedOperator { glyph, replacement });
        }
        let op = match glyph {
            '+' => Operation::Add,
            '-' => Operation::Sub,
            '*' => Operation::Mul,
            '/' => Operation::Div,
            '^' => Operation::Pow,
            '%' => Operation::Rem,
            'o' => Operation::BitOr,
            '&' => Operation::BitAnd,
            'x' => Operation::BitXor,
            '!' => Operation::NotEq,
            '=' => Operation::Eq,
            '>' => Operation::Gt,
            'G' => Operation::GtEq,
            '<' => Operation::Lt,
            'L' => Operation::LtEq,
            's' => Operation::Sin,
            'c' => Operation::Cos,
            't' => Operation::Tan,
            'S' => Operation::Asin,
            'C' => Operation::Acos,
            'T' => Operation::Atan,
            'X' => Operation::Atan2,
            'a' => Operation::Angle,
            _ => return Err(EvalError::UnknownOperator { glyph }),
        };
        Ok(op)
    }

    /// The glyph that names this operation.
    pub const fn glyph(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
            Operation::Div => '/',
            Operation::Pow => '^',
            Operation::Rem => '%',
            Operation::BitOr => 'o',
            Operation::BitAnd => '&',
            Operation::BitXor => 'x',
            Operation::NotEq => '!',
            Operation::Eq => '=',
            Operation::Gt => '>',
            Operation::GtEq => 'G',
            Operation::Lt => '<',
            Operation::LtEq => 'L',
            Operation::Sin => 's',
            Operation::Cos => 'c',
            Operation::Tan => 't',
            Operation::Asin => 'S',
            Operation::Acos => 'C',
            Operation::Atan => 'T',
            Operation::Atan2 => 'X',
            Operation::Angle => 'a',
        }
    }

    /// Apply this operation. `left` is the operand the cell treats as first.
    ///
    /// For the trigonometric family and `Angle`, `right` is a mode flag:
    /// any non-zero value selects degrees.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        let degrees = right != 0.0;
        match self {
            Operation::Add => left + right,
            Operation::Sub => left - right,
            Operation::Mul => left * right,
            Operation::Div => left / right,
            Operation::Pow => left.powf(right),
            Operation::Rem => left % right,
            Operation::BitOr => bits(left, right, |a, b| a | b),
            Operation::BitAnd => bits(left, right, |a, b| a & b),
            Operation::BitXor => bits(left, right, |a, b| a ^ b),
            // Use partial_cmp for IEEE 754 compliant comparisons
            // (NaN != NaN, -0.0 == 0.0)
            Operation::NotEq => truth(left.partial_cmp(&right) != Some(std::cmp::Ordering::Equal)),
            Operation::Eq => truth(left.partial_cmp(&right) == Some(std::cmp::Ordering::Equal)),
            Operation::Gt => truth(left > right),
            Operation::GtEq => truth(left >= right),
            Operation::Lt => truth(left < right),
            Operation::LtEq => truth(left <= right),
            Operation::Sin => angle_in(left, degrees).sin(),
            Operation::Cos => angle_in(left, degrees).cos(),
            Operation::Tan => angle_in(left, degrees).tan(),
            Operation::Asin => angle_out(left.asin(), degrees),
            Operation::Acos => angle_out(left.acos(), degrees),
            Operation::Atan => angle_out(left.atan(), degrees),
            Operation::Atan2 => left.atan2(right),
            Operation::Angle => {
                if degrees {
                    left.to_degrees()
                } else {
                    left.to_radians()
                }
            }
        }
    }
}

#[inline]
fn truth(value: bool) -> f64 {
    f64::from(u8::from(value))
}

/// Input angle for a direct trig call: converted from degrees when flagged.
#[inline]
fn angle_in(value: f64, degrees: bool) -> f64 {
    if degrees {
        value.to_radians()
    } else {
        value
    }
}

/// Result angle of an inverse trig call: converted to degrees when flagged.
#[inline]
fn angle_out(radians: f64, degrees: bool) -> f64 {
    if degrees {
        radians.to_degrees()
    } else {
        radians
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "bitwise operators work on the integral part; `as` saturates out-of-range floats"
)]
#[inline]
fn bits(left: f64, right: f64, op: fn(i64, i64) -> i64) -> f64 {
    op(left as i64, right as i64) as f64
}

/// Evaluate an operator cell.
///
/// Operand order matters for every non-commutative operation.
pub fn evaluate(operator: OperatorSymbol, left: f64, right: f64) -> Result<f64, EvalError> {
    let op = Operation::from_glyph(operator.glyph())?;
    let value = op.apply(left, right);
    tracing::trace!(glyph = %operator.glyph(), left, right, value, "evaluate");
    Ok(value)
}

/// Find every operator cell whose glyph would fault when evaluated.
///
/// Lets front ends report all bad operators before any cursor runs.
pub fn check_operators(grid: &Grid) -> Vec<(Coord, EvalError)> {
    grid.cells()
        .filter_map(|(at, sym)| sym.as_operator().map(|op| (at, op)))
        .filter_map(|(at, op)| Operation::from_glyph(op.glyph()).err().map(|e| (at, e)))
        .collect()
}
