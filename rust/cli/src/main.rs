use std::io;

fn main() {
    farkle_cli::logging::init_logging();
    let code = farkle_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
