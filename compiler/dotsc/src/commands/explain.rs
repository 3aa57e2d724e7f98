//! The `explain` command: display documentation for error codes.

use dots_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Some(code) = code_str.parse::<ErrorCode>().ok() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1008, E2001");
        std::process::exit(1);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
    } else {
        eprintln!("No documentation available for {code_str}");
        std::process::exit(1);
    }
}
