use std::io;
use std::process::exit;

fn main() {
    let code = parlor_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    exit(code);
}
