//! richsh: interactive front end.
//!
//! Usage:
//!   richsh                 read lines from stdin until EOF or `exit`
//!   richsh -c LINE         interpret one line and print its output
//!   richsh --dump-config   print the merged configuration

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use richsh::config::Config;
use richsh::{Outcome, Session, logging};

fn print_output(out: &str) {
    let out = out.trim();
    if !out.is_empty() {
        println!("{out}");
    }
}

fn repl(config: &Config) -> ExitCode {
    let mut session = Session::new(config);
    let mut stdin = io::stdin().lock();
    let mut buf = String::new();

    loop {
        print!("{}", config.settings.prompt);
        let _ = io::stdout().flush();

        buf.clear();
        match stdin.read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("richsh: failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        }
        let line = buf.trim_end_matches(['\n', '\r']);

        let result = session.interpret(line);
        logging::log_line(line, &result);
        match result {
            Ok(Outcome::Output(out)) => print_output(&out),
            Ok(Outcome::Exit) => break,
            Err(e) => eprintln!("richsh: {e}"),
        }
    }

    ExitCode::SUCCESS
}

fn run_line(config: &Config, line: &str) -> ExitCode {
    let mut session = Session::new(config);
    let result = session.interpret(line);
    logging::log_line(line, &result);
    match result {
        Ok(Outcome::Output(out)) => {
            print_output(&out);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Exit) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("richsh: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => {
            logging::init(&config.settings);
            repl(&config)
        }
        ["-c", line] => {
            logging::init(&config.settings);
            run_line(&config, line)
        }
        ["--dump-config"] => match toml::to_string_pretty(&config) {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("richsh: failed to serialize config: {e}");
                ExitCode::FAILURE
            }
        },
        _ => {
            eprintln!("usage: richsh [-c LINE | --dump-config]");
            ExitCode::from(2)
        }
    }
}
