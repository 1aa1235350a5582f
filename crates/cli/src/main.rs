use clap::Parser;

use spellsweep::{print_error, run, Opts};

fn main() {
    let opts = Opts::parse();
    if let Err(e) = run(opts) {
        print_error!("{:#}", e);
        std::process::exit(1);
    }
}
