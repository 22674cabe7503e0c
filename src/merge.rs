//! Merging a fresh extraction into an existing catalog.
//!
//! This is the regeneration step of the catalog lifecycle: translations are
//! never lost, location references are refreshed, and messages that
//! disappeared from the sources are marked obsolete (or dropped on request).

use crate::catalog::{Catalog, Message, TranslationStatus};
use crate::extract::Extraction;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Remove messages that are no longer in the sources instead of keeping
    /// them as obsolete.
    pub drop_obsolete: bool,
}

/// Counters describing what a merge did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Messages newly added as unfinished.
    pub added: usize,
    /// Existing messages whose locations were refreshed.
    pub updated: usize,
    /// Active messages newly marked obsolete.
    pub vanished: usize,
    /// Obsolete messages that reappeared in the sources.
    pub revived: usize,
    /// Obsolete messages removed (`drop_obsolete` only).
    pub removed: usize,
    /// Messages untouched by the merge.
    pub unchanged: usize,
}

impl MergeStats {
    /// Whether the merge modified the catalog at all.
    pub fn changed(&self) -> bool {
        self.added + self.updated + self.vanished + self.revived + self.removed > 0
    }
}

/// Merge `extraction` into `catalog`.
///
/// - existing messages keep their translation and finished state; their
///   locations are replaced with the freshly extracted ones
/// - obsolete messages that reappear are revived
/// - unknown (context, source) pairs are appended as unfinished messages
/// - active messages absent from the extraction are marked obsolete
pub fn merge(catalog: &mut Catalog, extraction: &Extraction, options: MergeOptions) -> MergeStats {
    let mut stats = MergeStats::default();

    for (context_name, source, locations) in extraction.iter() {
        let context = catalog.context_entry(context_name);
        match context.message_mut(source) {
            Some(message) => {
                if !message.status.is_active() {
                    message.status = if message.translation.is_empty() {
                        TranslationStatus::Unfinished
                    } else {
                        TranslationStatus::Finished
                    };
                    message.locations = locations.to_vec();
                    stats.revived += 1;
                } else if message.locations != locations {
                    message.locations = locations.to_vec();
                    stats.updated += 1;
                } else {
                    stats.unchanged += 1;
                }
            }
            None => {
                context.push(Message::unfinished(source).with_locations(locations.to_vec()));
                stats.added += 1;
            }
        }
    }

    for context in catalog.contexts_mut() {
        let name = context.name.clone();
        for message in context.messages_mut() {
            if message.status.is_active() && !extraction.contains(&name, &message.source) {
                message.status = TranslationStatus::Obsolete;
                message.locations.clear();
                stats.vanished += 1;
            }
        }
    }

    if options.drop_obsolete {
        for context in catalog.contexts_mut() {
            let before = context.len();
            context.retain(|m| m.status.is_active());
            stats.removed += before - context.len();
        }
        catalog.prune_empty_contexts();
    }

    stats
}
