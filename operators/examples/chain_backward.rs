//! Example: replaying backward functions by hand through a chain of
//! unary operators.
//!
//! A real tape records each operator and the input it saw during the
//! forward pass, then walks that record in reverse feeding upstream
//! gradients into the matching backward functions. This does the same
//! for `f(x) = sigmoid(log(inv(x)))`.
//!
//! Run with: `cargo run --example chain_backward`

use operators::{Differentiable, OperatorResult};

fn main() -> OperatorResult<()> {
    let _ = env_logger::try_init();

    println!("=== Reverse pass through sigmoid(log(inv(x))) ===\n");

    let chain = [
        Differentiable::<f64>::inv(),
        Differentiable::log(),
        Differentiable::sigmoid(),
    ];

    let x = 0.5;

    // Forward: save each operator's input.
    let mut saved = Vec::with_capacity(chain.len());
    let mut y = x;
    for op in &chain {
        saved.push(y);
        let out = op.forward(y)?;
        println!("  {:>8}({:.6}) = {:.6}", op.name(), y, out);
        y = out;
    }
    println!("\n  f({}) = {:.6}\n", x, y);

    // Reverse: d = 1 at the output, then chain rule back to x.
    let mut d = 1.0;
    for (op, &a) in chain.iter().zip(&saved).rev() {
        d = op.backward(a, d)?;
        println!("  d/d(input of {:<8}) = {:.6}", op.name(), d);
    }

    // Closed form: f(x) = sigmoid(-ln x), f'(x) = -s(1-s)/x
    let s = y;
    let expected = -s * (1.0 - s) / x;
    println!("\n  df/dx      = {:.6}", d);
    println!("  closed form = {:.6}", expected);

    // A domain error stops the pass immediately.
    println!("\n=== Domain errors ===\n");
    match Differentiable::<f64>::log().forward(-1.0) {
        Ok(v) => println!("  log(-1) = {}", v),
        Err(e) => println!("  log(-1): {}", e),
    }
    match Differentiable::<f64>::inv().backward(0.0, 1.0) {
        Ok(v) => println!("  inv_back(0, 1) = {}", v),
        Err(e) => println!("  inv_back(0, 1): {}", e),
    }

    Ok(())
}
