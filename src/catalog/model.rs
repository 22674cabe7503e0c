use std::collections::HashMap;

/// Reference to the source definition a message was extracted from.
///
/// Informational only: lookups never consult locations, they exist so
/// translation tooling can re-synchronize strings when sources change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path of the originating file (e.g. "src/pastedialog.ui").
    pub filename: String,
    /// Line number (1-indexed). 0 when unknown.
    pub line: usize,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

/// Translation state of a message, mirrored from the `type` attribute of
/// the `<translation>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationStatus {
    /// Translated; no `type` attribute in the document.
    #[default]
    Finished,
    /// Present in the sources but not yet translated.
    Unfinished,
    /// No longer present in the sources; kept so the translation survives.
    Obsolete,
    /// Qt 5 spelling of `Obsolete`; preserved as-is on round-trip.
    Vanished,
}

impl TranslationStatus {
    /// Whether the message still corresponds to a string in the sources.
    pub fn is_active(self) -> bool {
        matches!(self, TranslationStatus::Finished | TranslationStatus::Unfinished)
    }

    /// The value of the `type` attribute, or `None` for finished messages.
    pub fn type_attr(self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Obsolete => Some("obsolete"),
            TranslationStatus::Vanished => Some("vanished"),
        }
    }

    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationStatus::Unfinished),
            "obsolete" => Some(TranslationStatus::Obsolete),
            "vanished" => Some(TranslationStatus::Vanished),
            _ => None,
        }
    }
}

/// A single translatable unit: canonical source text paired with its
/// localized text and origin references.
#[derive(Debug, Clone)]
pub struct Message {
    /// Canonical, untranslated text. Lookup key within a context.
    pub source: String,
    /// Localized text. May equal `source` for the base locale, or be empty
    /// for unfinished messages.
    pub translation: String,
    pub status: TranslationStatus,
    pub locations: Vec<Location>,
    /// Line of the `<message>` element in the catalog document (1-indexed).
    /// 0 for messages constructed in memory. Diagnostic only, never
    /// serialized.
    pub ts_line: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
            status: TranslationStatus::Finished,
            locations: Vec::new(),
            ts_line: 0,
        }
    }

    /// A freshly extracted message with no translation yet.
    pub fn unfinished(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: String::new(),
            status: TranslationStatus::Unfinished,
            locations: Vec::new(),
            ts_line: 0,
        }
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    /// Whether a lookup should return this message's translation.
    pub fn resolves(&self) -> bool {
        self.status.is_active() && !self.translation.is_empty()
    }
}

// ts_line is a parse artifact; two messages are the same message even when
// they were read from documents with different formatting.
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.translation == other.translation
            && self.status == other.status
            && self.locations == other.locations
    }
}

impl Eq for Message {}

/// A logical grouping of messages, typically corresponding to one UI class.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub name: String,
    messages: Vec<Message>,
    /// Source text -> index of its first occurrence in `messages`.
    index: HashMap<String, usize>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a message, preserving document order.
    ///
    /// If a message with the same source text already exists, the new one is
    /// still stored (round-trips must be lossless) but lookups keep resolving
    /// to the first occurrence.
    pub fn push(&mut self, message: Message) {
        let idx = self.messages.len();
        self.index.entry(message.source.clone()).or_insert(idx);
        self.messages.push(message);
    }

    pub fn message(&self, source: &str) -> Option<&Message> {
        self.index.get(source).map(|&i| &self.messages[i])
    }

    pub fn message_mut(&mut self, source: &str) -> Option<&mut Message> {
        let idx = *self.index.get(source)?;
        self.messages.get_mut(idx)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> impl Iterator<Item = &mut Message> {
        self.messages.iter_mut()
    }

    /// Keep only messages matching the predicate, rebuilding the lookup index.
    pub fn retain(&mut self, f: impl FnMut(&Message) -> bool) {
        self.messages.retain(f);
        self.rebuild_index();
    }

    /// Messages that repeat an earlier source text, paired with the first
    /// occurrence: `(first, duplicate)`.
    pub fn duplicates(&self) -> Vec<(&Message, &Message)> {
        self.messages
            .iter()
            .enumerate()
            .filter(|(i, m)| self.index.get(&m.source).copied() != Some(*i))
            .map(|(_, dup)| (&self.messages[self.index[&dup.source]], dup))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, message) in self.messages.iter().enumerate() {
            self.index.entry(message.source.clone()).or_insert(i);
        }
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.messages == other.messages
    }
}

impl Eq for Context {}

/// A full translation catalog for one locale.
///
/// Immutable at runtime once loaded: lookups take `&self` and the type has no
/// interior mutability, so concurrent reads from multiple threads need no
/// coordination.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Target locale, from the `language` attribute (e.g. "en_US").
    pub language: Option<String>,
    /// Source locale, from the `sourcelanguage` attribute.
    pub source_language: Option<String>,
    /// Format version; "2.0" for every document this tool writes.
    pub version: String,
    contexts: Vec<Context>,
    /// Context name -> index of its first occurrence in `contexts`.
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            version: "2.0".to_string(),
            ..Default::default()
        }
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        let mut catalog = Self::new();
        catalog.language = Some(language.into());
        catalog
    }

    pub fn push_context(&mut self, context: Context) {
        let idx = self.contexts.len();
        self.index.entry(context.name.clone()).or_insert(idx);
        self.contexts.push(context);
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.index.get(name).map(|&i| &self.contexts[i])
    }

    pub fn context_mut(&mut self, name: &str) -> Option<&mut Context> {
        let idx = *self.index.get(name)?;
        self.contexts.get_mut(idx)
    }

    /// Get an existing context or append a new empty one.
    pub fn context_entry(&mut self, name: &str) -> &mut Context {
        if !self.index.contains_key(name) {
            self.push_context(Context::new(name));
        }
        let idx = self.index[name];
        &mut self.contexts[idx]
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn contexts_mut(&mut self) -> impl Iterator<Item = &mut Context> {
        self.contexts.iter_mut()
    }

    /// Drop contexts that no longer hold any message.
    pub fn prune_empty_contexts(&mut self) {
        self.contexts.retain(|c| !c.is_empty());
        self.index.clear();
        for (i, context) in self.contexts.iter().enumerate() {
            self.index.entry(context.name.clone()).or_insert(i);
        }
    }

    /// Resolve `source` within `context` to its localized text.
    ///
    /// Returns the paired translation for finished (and partially translated
    /// unfinished) entries; in every other case - unknown context, unknown
    /// source text, empty translation, obsolete entry - the original source
    /// text comes back unchanged. Never fails.
    pub fn lookup<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.context(context)
            .and_then(|c| c.message(source))
            .filter(|m| m.resolves())
            .map(|m| m.translation.as_str())
            .unwrap_or(source)
    }

    /// Total number of messages across all contexts.
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(Context::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.source_language == other.source_language
            && self.version == other.version
            && self.contexts == other.contexts
    }
}

impl Eq for Catalog {}
