mod debug_report;

use maskfmt::{Mask, Options};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args_from(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mask = match Mask::new(&config.mask) {
        Ok(mask) => mask,
        Err(err) => {
            eprintln!("error: invalid mask '{}': {err}", config.mask);
            std::process::exit(1);
        }
    };

    let opts = Options { complete_literals: config.complete_literals };
    if config.verbose {
        let res = mask.apply_verbose_with(&config.input, &opts);
        debug_report::print_run(&res, config.color);
    } else {
        println!("{}", mask.apply_with(&config.input, &opts).output);
    }
}

struct CliConfig {
    mask: String,
    input: String,
    complete_literals: bool,
    verbose: bool,
    color: bool,
}

fn parse_args_from(args: impl Iterator<Item = String>) -> Result<CliConfig, String> {
    let mut mask: Option<String> = None;
    let mut input: Option<String> = None;
    let mut complete_literals = false;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("maskfmt {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--verbose" | "-v" => verbose = true,
            "--complete-literals" => complete_literals = true,
            "--mask" | "-m" => {
                let value = args.next().ok_or_else(|| "error: --mask expects a value".to_string())?;
                set_once(&mut mask, value, "mask")?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_once(&mut input, value, "input")?;
            }
            "--" => {
                // Spaces are literal mask symbols, so remaining args are kept verbatim.
                let rest = args.collect::<Vec<_>>();
                if !rest.is_empty() {
                    set_once(&mut input, rest.join(" "), "input")?;
                }
                break;
            }
            _ if arg.starts_with("--mask=") => {
                let value = arg.trim_start_matches("--mask=");
                set_once(&mut mask, value.to_string(), "mask")?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                set_once(&mut input, value.to_string(), "input")?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_once(&mut input, rest, "input")?;
                break;
            }
        }
    }

    let Some(mask) = mask else {
        return Err(format!("error: no mask provided\n\n{}", help_text()));
    };

    // An empty string is valid input; only a missing one is an error.
    let input = match input {
        Some(value) => value,
        None if io::stdin().is_terminal() => {
            return Err(format!("error: no input provided\n\n{}", help_text()));
        }
        None => read_stdin_input()?,
    };

    Ok(CliConfig { mask, input, complete_literals, verbose, color })
}

fn set_once(slot: &mut Option<String>, value: String, what: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("error: {what} provided multiple times"));
    }
    *slot = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(strip_line_ending(buffer))
}

fn strip_line_ending(mut buffer: String) -> String {
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    buffer
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "maskfmt {version}

Align raw input against a formatting mask.

Mask symbols:
  9  digit            A  letter            #  letter or digit
  . , : - / ( ) and space are separators: kept when present in the input,
  inserted otherwise.

Usage:
  maskfmt [OPTIONS] --mask <mask> [--] <input...>
  maskfmt [OPTIONS] --mask <mask> --input <text>

Options:
  -m, --mask <mask>          Mask to apply (required).
  -i, --input <text>         Input text to format. If omitted, reads remaining
                             args or stdin when no args are provided.
  --complete-literals        Keep inserting separators after the input runs out,
                             up to the next placeholder.
  -v, --verbose              Print a per-step report instead of just the result.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Invalid mask.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_trailing_line_ending() {
        assert_eq!(strip_line_ending("123\n".to_string()), "123");
        assert_eq!(strip_line_ending("123\r\n".to_string()), "123");
        assert_eq!(strip_line_ending("123\n\n".to_string()), "123\n");
        assert_eq!(strip_line_ending("12 3".to_string()), "12 3");
    }

    fn parse(args: &[&str]) -> Result<CliConfig, String> {
        parse_args_from(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn empty_input_is_accepted() {
        let config = parse(&["-m", "999", "--input", ""]).unwrap();
        assert_eq!(config.mask, "999");
        assert_eq!(config.input, "");

        let config = parse(&["--mask=999-999", "--input="]).unwrap();
        assert_eq!(config.input, "");

        let config = parse(&["-m", "999", "--", ""]).unwrap();
        assert_eq!(config.input, "");
    }

    #[test]
    fn positional_args_join_with_spaces() {
        let config = parse(&["--no-color", "-v", "-m", "(99) 9999", "11", "2345"]).unwrap();
        assert_eq!(config.input, "11 2345");
        assert!(config.verbose);
        assert!(!config.color);
        assert!(!config.complete_literals);
    }

    #[test]
    fn flags_and_errors() {
        let config = parse(&["--complete-literals", "--color", "-m", "99", "-i", "1"]).unwrap();
        assert!(config.complete_literals);
        assert!(config.color);

        assert_eq!(parse(&["-m"]).err().unwrap(), "error: --mask expects a value");
        assert_eq!(parse(&["-m", "9", "--bogus"]).err().unwrap(), "error: unknown option '--bogus'");
        assert_eq!(parse(&["-m", "9", "-i", "1", "2"]).err().unwrap(), "error: input provided multiple times");
        assert!(parse(&["-i", "1"]).err().unwrap().starts_with("error: no mask provided"));
    }

    #[test]
    fn set_once_rejects_duplicates() {
        let mut slot = None;
        assert!(set_once(&mut slot, "a".to_string(), "input").is_ok());
        assert_eq!(set_once(&mut slot, "b".to_string(), "input").unwrap_err(), "error: input provided multiple times");
        assert_eq!(slot.as_deref(), Some("a"));
    }
}
