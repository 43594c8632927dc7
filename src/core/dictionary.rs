use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::contig::{Contig, MtIdentifier};

/// The reference sequence dictionary extracted from an alignment header
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceDictionary {
    /// All contigs from @SQ lines, in declaration order
    pub contigs: Vec<Contig>,
}

/// Compartment lengths resolved from a dictionary for one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLengths {
    /// Length of the first contig whose name contains the identifier.
    /// `None` when no contig matches; mitochondrial coverage is then undefined.
    pub mt_length: Option<u64>,

    /// Name of the contig `mt_length` was taken from
    pub mt_contig: Option<String>,

    /// Sum of the lengths of every declared contig
    pub total_length: u64,

    /// Number of contigs whose name contains the identifier
    pub match_count: usize,
}

impl ReferenceDictionary {
    #[must_use]
    pub fn new(contigs: Vec<Contig>) -> Self {
        Self { contigs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    /// Name of the contig at a record's reference sequence id
    #[must_use]
    pub fn name_of(&self, id: usize) -> Option<&str> {
        self.contigs.get(id).map(|c| c.name.as_str())
    }

    /// Total reference length across all contigs
    #[must_use]
    pub fn total_length(&self) -> u64 {
        self.contigs.iter().map(|c| c.length).sum()
    }

    /// Resolve the mitochondrial and total reference lengths.
    ///
    /// Contigs are scanned in declaration order and the first one whose name contains
    /// `identifier` supplies the mitochondrial length. Later matches are ignored but
    /// reported with a warning since they may indicate the wrong contig was picked.
    #[must_use]
    pub fn resolve(&self, identifier: &MtIdentifier) -> ResolvedLengths {
        let mut matching = self.contigs.iter().filter(|c| identifier.matches(&c.name));
        let first = matching.next();
        let match_count = first.map_or(0, |_| 1 + matching.count());

        let total_length = self.total_length();

        match first {
            Some(contig) => {
                if match_count > 1 {
                    warn!(
                        identifier = %identifier,
                        chosen = %contig.name,
                        matches = match_count,
                        "Multiple contigs contain the mitochondrial identifier, using the first"
                    );
                }
                debug!(
                    identifier = %identifier,
                    contig = %contig.name,
                    mt_length = contig.length,
                    total_length,
                    "Resolved reference lengths"
                );
            }
            None => {
                warn!(
                    identifier = %identifier,
                    contigs = self.contigs.len(),
                    "No contig contains the mitochondrial identifier"
                );
            }
        }

        ResolvedLengths {
            mt_length: first.map(|c| c.length),
            mt_contig: first.map(|c| c.name.clone()),
            total_length,
            match_count,
        }
    }
}
