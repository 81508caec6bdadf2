//! Side outputs collected from reactions on request.

use pk_reactions::Diagnostic;

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord {
    /// Name of the reaction that produced it
    pub reaction: String,
    pub diagnostic: Diagnostic,
}

/// Diagnostics of one evaluation, in reaction order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    records: Vec<DiagnosticRecord>,
}

impl Diagnostics {
    pub fn push(&mut self, reaction: &str, diagnostic: Diagnostic) {
        self.records.push(DiagnosticRecord {
            reaction: reaction.to_string(),
            diagnostic,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records with the given key.
    pub fn by_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a DiagnosticRecord> + 'a {
        self.records.iter().filter(move |r| r.diagnostic.key == key)
    }

    /// Element-wise sum of every record with the given key, `None` if there
    /// is none.
    pub fn total(&self, key: &str) -> Option<Vec<f64>> {
        let mut records = self.by_key(key);
        let mut total = records.next()?.diagnostic.values.clone();
        for record in records {
            for (acc, v) in total.iter_mut().zip(&record.diagnostic.values) {
                *acc += v;
            }
        }
        Some(total)
    }
}
