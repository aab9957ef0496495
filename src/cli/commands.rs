//! Command implementations for the gazetteer-index CLI.

use std::io::Write;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::converter::DocumentConverter;
use crate::document::converter::jsonl::JsonlDocumentConverter;
use crate::document::document::Document;
use crate::error::Result;
use crate::schema::{GazetteerSchema, IndexField, boolean_index_value};

/// Execute a CLI command, writing its result to `out`.
pub fn execute_command(args: &GazetteerArgs, out: &mut dyn Write) -> Result<()> {
    match &args.command {
        Command::Fields => list_fields(args, out),
        Command::Inspect(inspect_args) => inspect_documents(inspect_args, args, out),
        Command::Check(check_args) => check_documents(check_args, args, out),
        Command::Bool(bool_args) => encode_boolean(bool_args, args, out),
    }
}

/// List the schema fields.
fn list_fields(cli_args: &GazetteerArgs, out: &mut dyn Write) -> Result<()> {
    let schema = GazetteerSchema::canonical();
    schema.validate()?;

    write_result(
        out,
        "Gazetteer index fields",
        &FieldsReport {
            fields: schema.descriptors().to_vec(),
        },
        cli_args,
    )
}

/// Decode the requested fields of every document in a JSONL file.
fn inspect_documents(
    args: &InspectArgs,
    cli_args: &GazetteerArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let fields: Vec<IndexField> = if args.fields.is_empty() {
        IndexField::ALL
            .into_iter()
            .filter(|field| field.is_stored())
            .collect()
    } else {
        args.fields.clone()
    };

    let documents = load_documents(&args.path)?;
    debug!(
        documents = documents.len(),
        fields = fields.len(),
        "Decoding documents"
    );

    let reports: Vec<DocumentReport> = documents
        .par_iter()
        .map(|(line, document)| DocumentReport {
            line: *line,
            fields: fields
                .iter()
                .map(|field| {
                    let lookup = field.get_value(document);
                    FieldReport {
                        key: field.key(),
                        status: lookup.status(),
                        value: lookup.into_value(),
                    }
                })
                .collect(),
        })
        .collect();

    info!(documents = reports.len(), "Decoded documents");

    write_result(
        out,
        &format!("Decoded fields from {}", args.path.display()),
        &InspectReport { documents: reports },
        cli_args,
    )
}

/// Check every document in a JSONL file against the schema.
fn check_documents(
    args: &CheckArgs,
    cli_args: &GazetteerArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let schema = GazetteerSchema::canonical();
    schema.validate()?;

    let documents = load_documents(&args.path)?;
    let problems: Vec<LineViolations> = documents
        .par_iter()
        .filter_map(|(line, document)| {
            let violations = schema.check_document(document);
            (!violations.is_empty()).then(|| LineViolations {
                line: *line,
                violations,
            })
        })
        .collect();

    info!(
        documents = documents.len(),
        problems = problems.len(),
        "Checked documents"
    );

    write_result(
        out,
        &format!("Checked {}", args.path.display()),
        &CheckReport {
            documents_checked: documents.len(),
            problems,
        },
        cli_args,
    )
}

/// Print the index encoding of a flag.
fn encode_boolean(
    args: &BoolArgs,
    cli_args: &GazetteerArgs,
    out: &mut dyn Write,
) -> Result<()> {
    write_result(
        out,
        "Boolean index value",
        &BoolReport {
            flag: args.flag,
            value: boolean_index_value(args.flag),
        },
        cli_args,
    )
}

/// Read every document of a JSONL file, paired with its line number.
fn load_documents(path: &Path) -> Result<Vec<(usize, Document)>> {
    let mut iter = JsonlDocumentConverter::new().convert(path)?;
    let mut documents = Vec::new();
    while let Some(document) = iter.next() {
        documents.push((iter.line_number(), document?));
    }
    Ok(documents)
}
