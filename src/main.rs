//! pinard main entrypoint.

use pinard::errors::AppError;
use pinard::run;
use pinard::ui::messages::field_errors;

fn main() {
    match run() {
        Ok(()) => {}
        Err(AppError::Validation(errors)) => {
            eprintln!("Error: invalid input");
            field_errors(&errors);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
