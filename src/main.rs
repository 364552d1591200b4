use simple_logger::SimpleLogger;

use gasm::*;
use std::time::Instant;
fn main() {
    SimpleLogger::new().init().unwrap();
    args::parse();

    log::set_max_level(args::get().feedback_level.to_log_level());

    let target = files::get_target(args::get().target.clone());

    println_silenceable!("Classifying {}", target.display());
    let source = files::open_source(&target)
        .unwrap_or_else(|e| error!("Error reading file: {}. {e}", target.display()));

    let timer = Instant::now();
    let result = lexer::classify(source).unwrap_or_else(|e| {
        feedback::lex_failure(&e, &target);
        terminate!();
    });
    print!("{result}");
    println_silenceable!("Classified in: {:.3?}", timer.elapsed());
}
