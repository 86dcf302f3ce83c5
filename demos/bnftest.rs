/// Tiny program that checks its own invocation against a usage pattern. The
/// leading placeholder soaks up the invocation path, so it works however the
/// binary is launched. Prints the bound word on a match; otherwise prints
/// "no" and exits with a non-zero status code.
use bnfmatch::bnf;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut invoked = None;
    let mut word = None;
    if bnf("<self> -x <word>", &args, &mut [&mut invoked, &mut word]) {
        println!("Got {}.", word.unwrap_or(""));
        return;
    }

    println!("no");
    process::exit(1);
}
