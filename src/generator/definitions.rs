use once_cell::sync::Lazy;
use regex::Regex;

use super::GenerateError;

// Anchored at the start only: anything may follow a valid leading path
static PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(/(\w+:)?\w+)+").expect("path pattern is valid"));
static NAMESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)=(.+)").expect("namespace pattern is valid"));

const COMMENT: char = '#';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceMapping {
    pub prefix: String,
    pub uri: String,
}

/// Watched paths and namespace prefixes, each in input order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Definitions {
    pub paths: Vec<String>,
    pub namespaces: Vec<NamespaceMapping>,
}

/// Classify the content of a paths file; `None` means no file was given.
pub fn read_definitions(content: Option<&str>) -> Result<Definitions, GenerateError> {
    match content {
        Some(content) => classify(content.lines()),
        None => Ok(Definitions::default()),
    }
}

/// Split definition lines into configuration paths and `prefix=uri` pairs.
///
/// Blank lines and `#` comments are skipped. The first line matching
/// neither form aborts classification.
pub fn classify<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Definitions, GenerateError> {
    let mut definitions = Definitions::default();

    for line in lines {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }

        if PATH_PATTERN.is_match(line) {
            definitions.paths.push(line.into());
        } else if let Some(captures) = NAMESPACE_PATTERN.captures(line) {
            definitions.namespaces.push(NamespaceMapping {
                prefix: captures[1].into(),
                uri: captures[2].into(),
            });
        } else {
            return Err(GenerateError::InvalidDefinition(line.into()));
        }
    }

    log::debug!(
        "Classified {} path(s) and {} namespace(s)",
        definitions.paths.len(),
        definitions.namespaces.len()
    );
    Ok(definitions)
}
