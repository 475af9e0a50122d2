use colored::Colorize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message to stderr.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    println!("\n{}", msg.bold());
}

/// Print a `label value` row; empty values show as a dimmed `-`.
pub fn field(label: &str, value: &str) {
    let shown = if value.is_empty() {
        "-".dimmed().to_string()
    } else {
        value.cyan().to_string()
    };
    println!("  {label:<10} {shown}");
}
