//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{GazetteerArgs, OutputFormat};
use crate::error::Result;
use crate::schema::{FieldDescriptor, IndexValue, SchemaViolation};

/// Result structure for the `fields` command.
#[derive(Debug, Serialize)]
pub struct FieldsReport {
    pub fields: Vec<FieldDescriptor>,
}

/// One decoded field of one document.
#[derive(Debug, Serialize)]
pub struct FieldReport {
    pub key: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<IndexValue>,
}

/// Decoded fields of one document.
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub line: usize,
    pub fields: Vec<FieldReport>,
}

/// Result structure for the `inspect` command.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub documents: Vec<DocumentReport>,
}

/// Schema violations found on one line.
#[derive(Debug, Serialize)]
pub struct LineViolations {
    pub line: usize,
    pub violations: Vec<SchemaViolation>,
}

/// Result structure for the `check` command.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub documents_checked: usize,
    pub problems: Vec<LineViolations>,
}

/// Result structure for the `bool` command.
#[derive(Debug, Serialize)]
pub struct BoolReport {
    pub flag: bool,
    pub value: i32,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for FieldsReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{:<14} {:<10} {}", "KEY", "KIND", "STORED")?;
        for field in &self.fields {
            let kind = field.kind().map(|k| k.name()).unwrap_or("-");
            let stored = if field.is_stored() { "yes" } else { "no" };
            writeln!(out, "{:<14} {:<10} {}", field.key(), kind, stored)?;
        }
        Ok(())
    }
}

impl HumanOutput for InspectReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for document in &self.documents {
            writeln!(out, "line {}:", document.line)?;
            for field in &document.fields {
                match &field.value {
                    Some(value) => writeln!(out, "  {}: {}", field.key, value)?,
                    None => writeln!(out, "  {}: <{}>", field.key, field.status)?,
                }
            }
        }
        Ok(())
    }
}

impl HumanOutput for CheckReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for problem in &self.problems {
            for violation in &problem.violations {
                writeln!(out, "line {}: {}", problem.line, violation)?;
            }
        }
        writeln!(
            out,
            "{} document(s) checked, {} with problems",
            self.documents_checked,
            self.problems.len()
        )
    }
}

impl HumanOutput for BoolReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} -> {}", self.flag, self.value)
    }
}

/// Write a command result to `out` in the requested format.
pub fn write_result<T: Serialize + HumanOutput>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &GazetteerArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
