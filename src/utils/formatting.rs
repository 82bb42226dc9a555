use std::ffi::OsStr;
use std::path::PathBuf;

pub fn selection_label(prefix: &str, paths: &[PathBuf]) -> String {
    let joined = paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{prefix}{joined}")
}

/// Renders a command for logs. Arguments containing whitespace or quotes
/// are single-quoted so the line can be pasted into a POSIX shell.
pub fn command_line<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut rendered = quote_arg(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&quote_arg(&arg.as_ref().to_string_lossy()));
    }
    rendered
}

fn quote_arg(arg: &str) -> String {
    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"');
    if needs_quotes {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}
