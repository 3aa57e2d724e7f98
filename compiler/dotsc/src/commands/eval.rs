//! The `eval` command: evaluate one operator.

use dots_eval::evaluate;
use dots_ir::{OperatorKind, OperatorSymbol};

const USAGE: &str = "Usage: dotsc eval <glyph> <left> <right>";

/// Evaluate `glyph` on two operands and print the result.
pub fn eval_operator(args: &[String]) {
    let [glyph, left, right] = args else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };
    let mut chars = glyph.chars();
    let (Some(glyph), None) = (chars.next(), chars.next()) else {
        eprintln!("error: operator must be a single glyph, found `{glyph}`");
        std::process::exit(1);
    };
    let (Ok(left), Ok(right)) = (left.parse::<f64>(), right.parse::<f64>()) else {
        eprintln!("error: operands must be numbers");
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    match evaluate(OperatorSymbol::new(glyph, OperatorKind::Curly), left, right) {
        Ok(value) => println!("{value}"),
        Err(err) => {
            eprintln!("error [{}]: {err}", err.code());
            std::process::exit(1);
        }
    }
}
