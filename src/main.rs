use anyhow::Context;
use rustyline::Editor;
use std::{fs, path::Path, process};
use tacc::{Args, Compilation, Compiler, Handler};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::new();
    let src = match &args.file_name {
        Some(file_name) => read_file(file_name)?,
        None => read_prompt(),
    };

    let mut c = Compiler::new();
    match c.run(src.clone()) {
        Ok(out) => print_compilation(&args, &out),
        Err(e) => {
            Handler::new(&src).report(&e);
            process::exit(1);
        }
    }
    Ok(())
}

fn read_file(file_name: &Path) -> anyhow::Result<String> {
    fs::read_to_string(file_name).with_context(|| format!("reading {:?}", file_name))
}

/// Collects lines until a blank one (or end of input).
fn read_prompt() -> String {
    let mut editor = Editor::<()>::new();
    let mut lines = vec![];
    while let Ok(line) = editor.readline("> ") {
        if line.trim().is_empty() {
            break;
        }
        editor.add_history_entry(line.as_str());
        lines.push(line);
    }
    log::debug!("read {} lines", lines.len());
    lines.join("\n")
}

fn print_compilation(args: &Args, out: &Compilation) {
    if args.tokens {
        println!("== Tokens");
        for t in &out.tokens {
            println!("{:>4}: {}", t.line, t);
        }
    }
    if args.ast {
        println!("== AST");
        print!("{}", out.program);
    }
    println!("== Intermediate code");
    for instr in &out.code {
        println!("{}", instr);
    }
    if args.symbols {
        println!("== Symbols");
        print!("{}", out.symbols);
    }
}
