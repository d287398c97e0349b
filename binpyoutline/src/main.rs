//! pyoutline command-line tool: print the construct outline of Python-like
//! source files.
//!
//! Usage: pyoutline [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --to <FORMAT>      Output format (tree, json, yaml, tokens) [default: tree]
//!   -s, --tab-size <N>     Spaces per indentation level [default: 4]
//!       --hard-tabs        Count one level per leading whitespace character
//!   -c, --context <LINE>   Print the constructs enclosing a 1-based line
//!                          (not with --to tokens)
//!   -o, --output <FILE>    Write output to the specified file
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! Set RUST_LOG (e.g. `RUST_LOG=libpyoutline=trace`) for lexer/parser logs.

use clap::{Parser as ClapParser, ValueEnum};
use libpyoutline::{render, tokenize, Error, Parser, TabFormat};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

mod logging;

#[derive(Debug, ClapParser)]
#[command(name = "pyoutline", version, about = "Print the construct outline of Python-like source")]
struct Cli {
    /// Source file; "-" or absent reads stdin
    file: Option<PathBuf>,

    /// Output format
    #[arg(short = 't', long = "to", value_enum, default_value_t = OutputFormat::Tree)]
    to: OutputFormat,

    /// Spaces per indentation level
    #[arg(short = 's', long, default_value_t = libpyoutline::DEFAULT_TAB_SIZE)]
    tab_size: usize,

    /// Count one level per leading whitespace character
    #[arg(long)]
    hard_tabs: bool,

    /// Print the constructs enclosing this 1-based line (not with --to tokens)
    #[arg(short, long, value_name = "LINE")]
    context: Option<usize>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Tree,
    Json,
    Yaml,
    Tokens,
}

impl Cli {
    fn tab_format(&self) -> TabFormat {
        TabFormat::from_editor(self.tab_size, !self.hard_tabs)
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let input = match read_input(cli.file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let output = match run(&cli, &input) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error writing {}: {}", path.display(), e);
                process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}

/// Read the document from a file or stdin.
fn read_input(path: Option<&std::path::Path>) -> Result<String, Error> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .map_err(|e| Error::missing_input(format!("cannot read {}: {}", path.display(), e))),
        _ => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(Error::missing_input("no file given and stdin is a terminal"));
            }
            let mut buffer = String::new();
            stdin
                .lock()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::missing_input(format!("cannot read stdin: {}", e)))?;
            Ok(buffer)
        }
    }
}

/// Produce the requested output for one document.
fn run(cli: &Cli, input: &str) -> Result<String, String> {
    let format = cli.tab_format();
    tracing::debug!(?format, to = ?cli.to, "outlining document");

    if cli.to == OutputFormat::Tokens {
        if cli.context.is_some() {
            return Err("--context cannot be combined with --to tokens".to_string());
        }
        let mut out = String::new();
        for token in tokenize(input, format) {
            out.push_str(&token.to_string());
            out.push('\n');
        }
        return Ok(out);
    }

    let mut parser = Parser::new(Some(input), Some(format));
    let forest = parser.parse(None, None).map_err(|e| e.to_string())?;

    if let Some(line) = cli.context {
        if line == 0 {
            return Err("--context lines are 1-based".to_string());
        }
        let path = parser.context(line - 1);
        return match cli.to {
            OutputFormat::Json => serde_json::to_string_pretty(&path)
                .map(|s| s + "\n")
                .map_err(|e| format!("JSON encode error: {}", e)),
            OutputFormat::Yaml => {
                serde_yaml::to_string(&path).map_err(|e| format!("YAML encode error: {}", e))
            }
            _ => Ok(render::to_breadcrumb(&path) + "\n"),
        };
    }

    match cli.to {
        OutputFormat::Json => serde_json::to_string_pretty(&forest)
            .map(|s| s + "\n")
            .map_err(|e| format!("JSON encode error: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&forest).map_err(|e| format!("YAML encode error: {}", e))
        }
        _ => Ok(render::to_tree_string(&forest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pyoutline").chain(args.iter().copied())).unwrap()
    }

    const SOURCE: &str = "class A:\n    def b(self):\n        pass\n";

    #[test]
    fn test_defaults() {
        let c = cli(&[]);
        assert_eq!(c.to, OutputFormat::Tree);
        assert_eq!(c.tab_format(), TabFormat::default());
        assert!(c.file.is_none());
    }

    #[test]
    fn test_hard_tabs_flag() {
        assert!(cli(&["--hard-tabs"]).tab_format().hard);
        assert_eq!(cli(&["-s", "2"]).tab_format(), TabFormat::soft(2));
    }

    #[test]
    fn test_tree_output() {
        assert_eq!(run(&cli(&[]), SOURCE).unwrap(), "class A: 1\n  function b: 2\n");
    }

    #[test]
    fn test_tokens_output() {
        assert_eq!(
            run(&cli(&["-t", "tokens"]), SOURCE).unwrap(),
            "class, line: 1, indent: 0, attr: A\n\
             function, line: 2, indent: 1, attr: b\n\
             INDENT, line: 3, indent: 2\n"
        );
    }

    #[test]
    fn test_json_output() {
        let out = run(&cli(&["--to", "json"]), SOURCE).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["label"], "class A");
        assert_eq!(value[0]["state"], "collapsed");
        assert_eq!(value[0]["token"]["symbol"], "class");
        assert_eq!(value[0]["children"][0]["label"], "function b");
        assert_eq!(value[0]["children"][0]["state"], "leaf");
    }

    #[test]
    fn test_yaml_output() {
        let out = run(&cli(&["-t", "yaml"]), SOURCE).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value[0]["label"].as_str(), Some("class A"));
    }

    #[test]
    fn test_context_output() {
        assert_eq!(
            run(&cli(&["-c", "3"]), SOURCE).unwrap(),
            "class A: 1 > function b: 2\n"
        );
        assert!(run(&cli(&["-c", "0"]), SOURCE).is_err());
    }

    #[test]
    fn test_context_with_tokens_rejected() {
        let err = run(&cli(&["-c", "2", "-t", "tokens"]), SOURCE).unwrap_err();
        assert!(err.contains("--context"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_input(Some(std::path::Path::new("/nonexistent/file.py"))).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }
}
