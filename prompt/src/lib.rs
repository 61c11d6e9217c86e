use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

/// Prints `message` and reads one trimmed line, or `None` once the input is exhausted.
pub fn prompt_user_for_line<R: BufRead>(input: &mut R, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn prompt_user_for_values<R: BufRead>(input: &mut R) -> io::Result<Option<Vec<i64>>> {
    loop {
        println!("enter the initial values, separated by whitespace:");
        let Some(line) = prompt_user_for_line(input, "> ")? else {
            return Ok(None);
        };
        match parse_values(&line) {
            Ok(values) if values.is_empty() => println!("at least one value is needed"),
            Ok(values) => return Ok(Some(values)),
            Err(e) => println!("could not parse values: {}", e),
        }
    }
}

pub fn parse_values(line: &str) -> Result<Vec<i64>, ParseIntError> {
    line.split_whitespace().map(str::parse).collect()
}
