#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod macros;
pub mod scanner;

extern crate regex;

pub fn get_line(file: PathBuf, line_number: u32) -> String {
    let content = fs::read_to_string(&file).unwrap();

    let mut current = 1;

    for line in content.split_inclusive('\n') {
        if current == line_number {
            return line.to_string();
        }

        current += 1;
    }

    panic!("Line number exceeds file length");
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let line = super::get_line(std::path::PathBuf::from("tests/test_file.txt"), 1);
        assert_eq!(line, "int main() {\n");

        let line = super::get_line(std::path::PathBuf::from("tests/test_file.txt"), 3);
        assert_eq!(line, "    float b = 20.5;\n");
    }
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        Error: message
        -> input.txt
           |
         2 | float b = 3x;
           | ----------^
    */

    let line_number = error.get_line();
    let line_text = get_line(file.clone(), line_number);

    let line_string = line_number.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    if let Some(position) = line_text.find(error.get_lexeme()) {
        let arrows = position - removed_whitespace + 1;

        println!("{:>padding$} {:->arrows$}", "|", "^");
    }
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
