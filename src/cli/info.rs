//! Scheme listing and inspection

use clap::Subcommand;
use std::process::ExitCode;

use crate::color::to_hex;
use crate::schemes::{self, SchemeKind};

use super::{EXIT_ERROR, EXIT_SUCCESS};

#[derive(Subcommand)]
pub enum SchemeAction {
    /// List all built-in color schemes
    List,
    /// Show the byte classes of a scheme
    Show {
        /// Name of the scheme to show
        name: String,
    },
}

/// Execute the schemes command
pub fn run_schemes(action: SchemeAction) -> ExitCode {
    match action {
        SchemeAction::List => {
            println!("Built-in schemes:");
            for name in schemes::list_builtins() {
                println!("  {}", name);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        SchemeAction::Show { name } => match schemes::get_builtin(&name) {
            Some(scheme) => {
                let kind = match scheme.kind() {
                    SchemeKind::Categorical => "categorical",
                    SchemeKind::Gradient => "gradient",
                };
                println!("Scheme: {} ({}, {} colors)", scheme.name(), kind, scheme.classes().len());
                println!();
                match scheme.kind() {
                    SchemeKind::Categorical => {
                        for class in scheme.classes() {
                            println!(
                                "  {:<10} {}  {:>3} byte(s)  {}",
                                class.name.unwrap_or("-"),
                                to_hex(&class.color),
                                class.bytes.len(),
                                format_ranges(&class.bytes)
                            );
                        }
                    }
                    SchemeKind::Gradient => {
                        for class in scheme.classes() {
                            println!("  {:02x} => {}", class.bytes[0], to_hex(&class.color));
                        }
                    }
                }
                ExitCode::from(EXIT_SUCCESS)
            }
            None => {
                eprintln!("Error: Unknown scheme '{}'", name);
                eprintln!();
                eprintln!("Available schemes:");
                for builtin_name in schemes::list_builtins() {
                    eprintln!("  {}", builtin_name);
                }
                ExitCode::from(EXIT_ERROR)
            }
        },
    }
}

/// Compress sorted bytes into hex ranges, e.g. `01-08,0b-0c`.
fn format_ranges(bytes: &[u8]) -> String {
    let mut parts = Vec::new();
    let mut iter = bytes.iter().copied().peekable();
    while let Some(first) = iter.next() {
        let mut last = first;
        while let Some(&next) = iter.peek() {
            if next as u16 != last as u16 + 1 {
                break;
            }
            last = next;
            iter.next();
        }
        if first == last {
            parts.push(format!("{:02x}", first));
        } else {
            parts.push(format!("{:02x}-{:02x}", first, last));
        }
    }
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ranges() {
        assert_eq!(format_ranges(&[0]), "00");
        assert_eq!(format_ranges(&[1, 2, 3, 8, 11, 12]), "01-03,08,0b-0c");
        assert_eq!(format_ranges(&[0xfe, 0xff]), "fe-ff");
        assert_eq!(format_ranges(&[]), "");
    }

    #[test]
    fn test_format_ranges_printable_class() {
        let scheme = schemes::get_builtin("categorical").unwrap();
        let printable = scheme
            .classes()
            .iter()
            .find(|c| c.name == Some("printable"))
            .unwrap();
        assert_eq!(format_ranges(&printable.bytes), "09-0a,0d,20-7e");
    }
}
