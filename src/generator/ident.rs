use std::collections::HashSet;

/// Replace every character that cannot appear in a C identifier with `_`.
///
/// Not injective: `/a-b` and `/a_b` both become `_a_b`. Use an
/// [`IdentRegistry`] to keep issued names distinct.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Issues unique identifiers within one scope.
///
/// A name that was already issued gets the first free numeric suffix,
/// starting at `_2`.
#[derive(Debug, Default)]
pub struct IdentRegistry {
    issued: HashSet<String>,
}

impl IdentRegistry {
    /// Registry with names that must never be issued, e.g. a function's
    /// own parameters.
    pub fn reserving<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        IdentRegistry {
            issued: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn issue(&mut self, candidate: String) -> String {
        if !self.issued.contains(&candidate) {
            self.issued.insert(candidate.clone());
            return candidate;
        }

        let mut suffix = 2usize;
        loop {
            let alternative = format!("{candidate}_{suffix}");
            if self.issued.insert(alternative.clone()) {
                log::warn!(
                    "Identifier '{}' is already in use; using '{}' instead",
                    candidate,
                    alternative
                );
                return alternative;
            }
            suffix += 1;
        }
    }
}
