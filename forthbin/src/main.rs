use std::env;
use std::fs;
use std::io;
use std::io::prelude::*;
use std::path::Path;
use std::process;
use std::time;

use forth_vm::json_tests::stack_test::Test;
use forth_vm::{Error, Interpreter, InterpreterConf};
use log::info;

// Run every case of one fixture file. Returns (passed, failed).
fn test_json_file(p: &Path) -> Result<(usize, usize), Error> {
    let f = fs::File::open(p)?;
    let t = Test::load(f)?;
    let (mut passed, mut failed) = (0, 0);
    for (name, case) in t.into_iter() {
        let tic = time::Instant::now();
        let ok = case.check();
        let d = tic.elapsed().as_micros();
        if ok {
            passed += 1;
            writeln!(io::stderr(), "{}::{} ok {}", p.display(), name, d)?;
        } else {
            failed += 1;
            let out = case.run();
            writeln!(
                io::stderr(),
                "{}::{} FAIL {} want post={:?} error={:?} got post={:?} error={:?}",
                p.display(),
                name,
                d,
                case.post,
                case.error,
                out.post,
                out.error
            )?;
        }
    }
    Ok((passed, failed))
}

fn test_json_path(p: &Path) -> Result<(usize, usize), Error> {
    let info = fs::metadata(p)?;
    if !info.is_dir() {
        return test_json_file(p);
    }
    let (mut passed, mut failed) = (0, 0);
    for entry in fs::read_dir(p)? {
        let (a, b) = test_json_path(&entry?.path())?;
        passed += a;
        failed += b;
    }
    Ok((passed, failed))
}

// Evaluate a program read from stdin and print the resulting stack.
fn eval_stdin() -> Result<(), Error> {
    let mut src = String::new();
    io::stdin().read_to_string(&mut src)?;
    let mut it = Interpreter::new(InterpreterConf::default());
    let r = it.eval(&src);
    it.stack().dump(&mut io::stdout())?;
    r
}

fn main() {
    env_logger::init();
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        if let Err(e) = eval_stdin() {
            eprintln!("{}", e);
            process::exit(1);
        }
        return;
    }

    let (mut passed, mut failed) = (0, 0);
    for p in paths.iter() {
        match test_json_path(Path::new(p)) {
            Ok((a, b)) => {
                passed += a;
                failed += b;
            }
            Err(e) => {
                eprintln!("{}: {}", p, e);
                failed += 1;
            }
        }
    }
    info!("passed={} failed={}", passed, failed);
    println!("{} passed, {} failed", passed, failed);
    if failed > 0 {
        process::exit(1);
    }
}
