use clap::Parser;
use mathex::{
    detect::looks_like_expression,
    evaluate_expression,
    format::format_result,
    interpreter::registry::{CONSTANT_NAMES, FUNCTION_NAMES},
};

/// mathex is a safe calculator for free-form arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Only report whether the input looks like a math expression.
    #[arg(short, long)]
    detect: bool,

    /// List the supported functions and constants, then exit.
    #[arg(long)]
    functions: bool,

    /// The expression to evaluate.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.functions {
        println!("functions: {}", FUNCTION_NAMES.join(", "));
        println!("constants: {}", CONSTANT_NAMES.join(", "));
        return;
    }

    let Some(expression) = args.expression else {
        eprintln!("No expression given. Try: mathex '2 + 2'");
        std::process::exit(2);
    };

    if args.detect {
        println!("{}", looks_like_expression(&expression));
        return;
    }

    match evaluate_expression(&expression) {
        Ok(value) => println!("{}", format_result(value)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
