use std::io::{self, prelude::*, Result};

pub fn prompt_yn(prompt: &str) -> Result<bool> {
    let answer = prompt_line(prompt)?;
    Ok(answer.to_lowercase() == "y")
}

pub fn prompt_line(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{} ", prompt);
    stdout.flush()?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
