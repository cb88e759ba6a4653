mod args;

use std::process::ExitCode;

use makegen::{Invocation, MIN_TOKENS};

fn print_usage() {
    println!("Usage:");
    println!("makegen {{executableName}} -f {{CFLAGS}} -s {{SOURCE FILES}} [-cc {{desired compiler}}]");
    println!("Fields in brackets are optional.");
}

fn main() -> ExitCode {
    env_logger::init();
    let args = match <args::Args as clap::Parser>::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through clap as well
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        },
    };

    if args.tokens.len() < MIN_TOKENS {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let tokens = args.tokens.iter().map(String::as_str).collect::<Vec<_>>();
    let result = Invocation::parse(&tokens).and_then(|inv| {
        log::debug!("compiler resolves to {}", inv.compiler_or(&args.default_cc));
        makegen::generate(&inv, &args.makefile, &args.default_cc)
    });

    match result {
        Ok(()) => {
            println!("Successfully created makefile.");
            ExitCode::SUCCESS
        },
        Err(e) => {
            println!("{e}");
            if e.shows_usage() {
                print_usage();
            }
            ExitCode::FAILURE
        },
    }
}
