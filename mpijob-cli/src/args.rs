//! Single-dash long flags
//!
//! Existing job scripts call the tool as `-name latency -machine m`. clap only
//! understands `--name`, so known long flags given with one dash are rewritten
//! before parsing.

use std::ffi::OsString;

/// Long flags that may be spelled with a single dash
const LONG_FLAGS: &[&str] = &["name", "np", "machine", "template", "list", "dry-run", "verbose"];

/// Flags whose next argument is their value
const VALUE_FLAGS: &[&str] = &["name", "np", "machine", "template"];

/// Rewrite `-flag` and `-flag=value` to `--flag` / `--flag=value`.
///
/// Everything after a bare `--` is left untouched, as are short flags and
/// the argument following a value flag (`-np -4`, `-machine -np`).
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut value_next = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();

        if i == 0 || passthrough || value_next {
            value_next = false;
            out.push(arg);
            continue;
        }

        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        match arg.to_str() {
            Some(s) if is_single_dash_long(s) => {
                value_next = takes_separate_value(&s[1..]);
                out.push(format!("-{}", s).into());
            }
            Some(s) if s.starts_with("--") => {
                value_next = takes_separate_value(&s[2..]);
                out.push(arg);
            }
            _ => out.push(arg),
        }
    }

    out
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }

    let flag = rest.split_once('=').map_or(rest, |(flag, _)| flag);
    LONG_FLAGS.contains(&flag)
}

/// `flag` without dashes; true when its value is the next argument
fn takes_separate_value(flag: &str) -> bool {
    !flag.contains('=') && VALUE_FLAGS.contains(&flag)
}
