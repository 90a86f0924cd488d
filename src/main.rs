use std::{env, fs::read_to_string, process::exit, time::Instant};

use sqlfront::{
    get_source_line,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.as_slice() {
        [_, flag, path] if flag == "tokens" => dump_tokens(path),
        [_, path] => run(path),
        _ => {
            eprintln!("Usage: sqlfront [tokens] <file>");
            exit(2);
        }
    }
}

/// Lexes the file and prints the raw token stream, one token per line.
fn dump_tokens(path: &str) {
    let source = read_file(path);
    let (tokens, errors) = tokenize(&source);

    for token in &tokens {
        token.debug();
    }

    if !errors.is_empty() {
        for error in &errors {
            display_error(error.error_name(), &error.message(), error.line, error.column, &source, path);
        }
        exit(1);
    }
}

fn run(path: &str) {
    let source = read_file(path);

    let start = Instant::now();
    let (tokens, lexical_errors) = tokenize(&source);
    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (statements, syntax_errors) = parse(tokens);
    println!("Parsed in {:?}", parse_start.elapsed());

    for statement in &statements {
        print!("{}", statement.to_tree());
    }

    for error in &lexical_errors {
        display_error(error.error_name(), &error.message(), error.line, error.column, &source, path);
    }

    for error in &syntax_errors {
        let message = format!("{} (expected {}, found {})", error.message, error.expected, error.found);
        display_error("SyntaxError", &message, error.line, error.column, &source, path);
    }

    let total = lexical_errors.len() + syntax_errors.len();
    if total > 0 {
        println!(
            "{} statement(s), {} error(s)",
            statements.len(),
            total
        );
        exit(1);
    }
}

fn read_file(path: &str) -> String {
    match read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", path, error);
            exit(2);
        }
    }
}

fn display_error(name: &str, message: &str, line: u32, column: u32, source: &str, path: &str) {
    /*
        Error: SyntaxError (missing FROM clause)
        -> query.sql
           |
        20 | SELECT id WHERE age > 18;
           | ----------^
    */

    println!("Error: {} ({})", name, message);
    println!("-> {}", path);

    let line_text = match get_source_line(source, line) {
        Some(text) => text,
        None => return,
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let column = (column as usize).saturating_sub(removed_whitespace).max(1);
    println!("{:>padding$} {:->column$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
