use std::io::{self, Write};
use std::process::exit;

use ft_regex_lib::Regex;

fn read_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}

fn main() {
    let pattern = match read_input("Enter regex: ") {
        Ok(Some(pattern)) => pattern,
        Ok(None) => return,
        Err(err) => {
            eprintln!("Can't read the input: {err}");
            exit(1);
        }
    };

    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };

    loop {
        match read_input("Enter string: ") {
            Ok(Some(candidate)) => {
                if regex.is_exact_match(&candidate) {
                    println!("Accepted");
                } else {
                    println!("Rejected");
                }
            }
            Ok(None) => break,
            Err(err) => {
                eprintln!("Can't read the input: {err}");
                exit(1);
            }
        }
    }
}
