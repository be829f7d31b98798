//! Validate an order document and print the failures.
//!
//! Run with: `cargo run --example order-validation`

use objcheck::{Outcome, Validator};
use serde_json::json;

fn main() -> Result<(), objcheck::EngineError> {
    let validator = Validator::new(
        &json!({
            "customer.email": ["required", "isString"],
            "lines": ["required", "isArray", { "type": "minLength", "args": 1 }],
            "lines.*.sku": ["required", "isString"],
            "lines.*.qty": [
                "isNumber",
                { "type": "min", "args": 1 },
                { "type": "max", "args": 99, "message": "%name% exceeds the %args[0]% unit limit" }
            ]
        }),
        None,
    )?;

    let order = json!({
        "customer": { "email": "ada@example.com" },
        "lines": [
            { "sku": "A-100", "qty": 2 },
            { "sku": 42, "qty": "0" },
            { "sku": "C-300", "qty": 150 }
        ]
    });

    match validator.execute(&order)? {
        Outcome::Passed => println!("order is valid"),
        Outcome::Failed(messages) => {
            for message in messages {
                println!("- {message}");
            }
        }
    }

    Ok(())
}
