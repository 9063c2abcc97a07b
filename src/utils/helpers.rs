//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

/// Whether the text is empty or consists only of whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Build the translation key of a control nested in a form
pub fn scope_key(form: &str, control: &str) -> String {
    format!("{}.{}", form, control)
}

/// Split a `key<SEP>value` record at the first separator
///
/// Returns `None` when the line carries no separator.
pub fn split_record(line: &str, separator: char) -> Option<(&str, &str)> {
    line.split_once(separator)
}

/// Name of the bundled translation table for a language
pub fn internal_resource_name(prefix: &str, language: &str) -> String {
    format!("{}_{}", prefix, language)
}

/// File name of the external translation override for a language
pub fn external_file_name(prefix: &str, language: &str) -> String {
    format!("{}.txt", internal_resource_name(prefix, language))
}

/// Make a host-provided file name safe to join onto a folder
///
/// Only path separators, characters reserved by common filesystems and
/// control characters are replaced; everything else is kept as is.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
