//! Display labels for metric identifiers.

/// Turns a machine identifier such as `cpu_utilization_high` into
/// `Cpu Utilization High`.
///
/// Underscores become spaces and the first character of every word is
/// uppercased; the remaining characters keep their original casing.
#[must_use]
pub fn clean_metric_name(id: &str) -> String {
    id.replace('_', " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
