//! Render command.
//!
//! Parses the secrets specification, fetches each reference in order,
//! registers every value for redaction, interpolates the document, and
//! writes the result. Any failure aborts before output is written — there
//! is no partial interpolation.

use std::io::Read;

use tracing::debug;

use crate::cli::{output, Source};
use crate::core::interpolate::{interpolate, SubstitutionMap};
use crate::core::mask::Redactor;
use crate::core::reference::{self, SecretReference};
use crate::core::source::{EnvSource, ExecSource, SecretSource};
use crate::error::{Error, Result};

pub struct RenderArgs {
    pub secrets: String,
    pub file: Option<String>,
    pub out: Option<String>,
    pub in_place: bool,
    pub source: Source,
    pub exec_command: Option<String>,
    pub min_mask_length: usize,
}

/// Resolve secrets and interpolate them into the document.
pub fn execute(args: RenderArgs) -> Result<()> {
    let references = reference::parse(&args.secrets)?;
    let document = read_document(args.file.as_deref())?;
    let source = build_source(args.source, args.exec_command.as_deref())?;

    let mut redactor = Redactor::new(args.min_mask_length);
    let substitutions = resolve(source.as_ref(), &references, &mut redactor)?;

    let rendered = interpolate(&document, &substitutions)?;
    drop(substitutions); // secret values zeroized here

    debug!(
        "rendered document:\n{}",
        redactor.redact(&rendered)
    );

    write_document(&args, &rendered)?;

    output::success(&format!(
        "rendered {} secret{}",
        references.len(),
        if references.len() == 1 { "" } else { "s" }
    ));
    Ok(())
}

/// Fetch every reference in specification order, strictly sequentially.
///
/// The first failing fetch aborts the run. Fetching is async at the source
/// boundary only, so a small current-thread runtime is enough to drive it.
fn resolve(
    source: &dyn SecretSource,
    references: &[SecretReference],
    redactor: &mut Redactor,
) -> Result<SubstitutionMap> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Other(format!("failed to create runtime: {}", e)))?;

    rt.block_on(async {
        let mut substitutions = SubstitutionMap::new();
        for r in references {
            debug!(source = source.name(), output = %r.output, "resolving reference");
            let value = source.fetch(&r.locator).await?;
            redactor.register(&value);
            substitutions.insert(r.output.clone(), zeroize::Zeroizing::new(value));
        }
        Ok(substitutions)
    })
}

fn build_source(source: Source, exec_command: Option<&str>) -> Result<Box<dyn SecretSource>> {
    match source {
        Source::Env => Ok(Box::new(EnvSource)),
        Source::Exec => {
            let command = exec_command
                .ok_or_else(|| Error::Other("--source exec requires --exec-command".into()))?;
            let exec = ExecSource::new(command)
                .ok_or_else(|| Error::Other("--exec-command must not be empty".into()))?;
            Ok(Box::new(exec))
        }
    }
}

/// Read the document from a file, or stdin when no file is given.
fn read_document(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            if atty::is(atty::Stream::Stdin) {
                return Err(Error::Other(
                    "no document: pass --file or pipe YAML on stdin".into(),
                ));
            }
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_document(args: &RenderArgs, rendered: &str) -> Result<()> {
    if args.in_place {
        // --in-place requires --file (enforced by clap)
        let path = args.file.as_deref().ok_or_else(|| {
            Error::Other("--in-place requires --file".into())
        })?;
        std::fs::write(path, rendered)?;
    } else if let Some(path) = &args.out {
        std::fs::write(path, rendered)?;
    } else {
        print!("{}", rendered);
    }
    Ok(())
}
