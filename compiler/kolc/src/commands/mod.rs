//! Command implementations for the kolc CLI.
//!
//! Each `*_file` command reads its input, runs one front-end stage and
//! prints the result; failures are reported on stderr with exit status 1.
//! The `render_*` helpers hold the stage logic over in-memory source.

use std::fmt;

use kol_lang::{calc, dot, pascal, Error, Language};
use tracing::debug;

/// Graph file written by `parse` when `--dot` is not given.
pub const DEFAULT_DOT_PATH: &str = "output.dot";

/// Options shared by the file commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// The positional input path.
    pub input: Option<String>,
    /// Explicit `--lang=` choice.
    pub lang: Option<Language>,
    /// Explicit `--dot=` output path.
    pub dot_path: Option<String>,
}

impl Options {
    /// Parse the arguments after the command name.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = Options::default();
        for arg in args {
            if let Some(name) = arg.strip_prefix("--lang=") {
                let lang = Language::from_name(name)
                    .ok_or_else(|| format!("unknown language '{name}' (expected calc or pascal)"))?;
                options.lang = Some(lang);
            } else if let Some(path) = arg.strip_prefix("--dot=") {
                if path.is_empty() {
                    return Err("--dot requires a path".to_string());
                }
                options.dot_path = Some(path.to_string());
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            } else if options.input.is_none() {
                options.input = Some(arg.clone());
            } else {
                return Err(format!("unexpected argument '{arg}'"));
            }
        }
        Ok(options)
    }

    /// The language for `path`: the explicit choice, else by extension.
    pub fn language_for(&self, path: &str) -> Language {
        self.lang.unwrap_or_else(|| Language::from_path(path))
    }

    /// Where `parse` writes its graph.
    pub fn dot_path(&self) -> &str {
        self.dot_path.as_deref().unwrap_or(DEFAULT_DOT_PATH)
    }
}

/// Read a file, exiting with a friendly message on error.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            fail(msg)
        }
    }
}

/// Calculator input is a single line; drop the file's trailing line break.
fn source_for(lang: Language, content: &str) -> &str {
    match lang {
        Language::Calc => content.trim_end_matches(['\n', '\r']),
        Language::Pascal => content,
    }
}

/// Report an error and exit with status 1.
fn fail(err: impl fmt::Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1)
}

/// Token listing, one token per line.
pub fn render_tokens(lang: Language, src: &str) -> String {
    let mut out = String::new();
    for token in lang.tokens(src) {
        out.push_str(&token);
        out.push('\n');
    }
    out
}

/// Parse `src` and render its AST as a DOT graph.
pub fn render_dot(lang: Language, src: &str) -> Result<String, Error> {
    let ast = lang.parse(src)?;
    debug!(nodes = ast.arena.len(), "parsed");
    Ok(dot::render(&ast.arena, ast.root))
}

/// Interpret `src`: the calculator's value, or Pascal's variable listing.
pub fn render_run(lang: Language, src: &str) -> Result<String, Error> {
    match lang {
        Language::Calc => Ok(format!("{}\n", calc::evaluate(src)?)),
        Language::Pascal => Ok(pascal::run(src)?.list_variables()),
    }
}

/// Tokenize a file and print the tokens.
pub fn lex_file(path: &str, options: &Options) {
    let _span = tracing::debug_span!("lex", path).entered();
    let lang = options.language_for(path);
    let content = read_file(path);
    print!("{}", render_tokens(lang, source_for(lang, &content)));
}

/// Parse a file and write its AST graph.
pub fn parse_file(path: &str, options: &Options) {
    let _span = tracing::debug_span!("parse", path).entered();
    let lang = options.language_for(path);
    let content = read_file(path);
    let graph = match render_dot(lang, source_for(lang, &content)) {
        Ok(graph) => graph,
        Err(e) => fail(e),
    };
    let dot_path = options.dot_path();
    if let Err(e) = std::fs::write(dot_path, graph) {
        fail(format!("cannot write '{dot_path}': {e}"));
    }
    println!("Wrote AST graph for '{path}' to '{dot_path}'");
}

/// Parse and interpret a file.
pub fn run_file(path: &str, options: &Options) {
    let _span = tracing::debug_span!("run", path).entered();
    let lang = options.language_for(path);
    let content = read_file(path);
    match render_run(lang, source_for(lang, &content)) {
        Ok(output) => print!("{output}"),
        Err(e) => fail(e),
    }
}

/// Evaluate a calculator expression from the command line.
pub fn eval_expr(expr: &str) {
    match calc::evaluate(expr) {
        Ok(value) => println!("{value}"),
        Err(e) => fail(e),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
