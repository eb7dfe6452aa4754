//! Result assembly and delivery.
//!
//! The three computed slots - page documents, forward cursors, backward
//! cursors - are mapped into a JSON object under caller-configured keys and
//! handed to a [`Responder`] through exactly one of three delivery paths,
//! chosen once at construction:
//!
//! | Delivery | Responder call | Typical boundary |
//! |----------|----------------|------------------|
//! | [`Delivery::Json`] | `json(body)` | serialize straight into the response |
//! | [`Delivery::Render`] | `render(template, body)` | hand the mapping to a template engine |
//! | [`Delivery::Attach`] | `attach(key, slot)` × 3 | merge the slots into the request context |

use serde::Serialize;
use serde_json::Value;

use crate::config::ConfigError;
use crate::page::PageSet;

/// Names of the three slots in the emitted mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportKeys {
    /// Key of the page-content slot.
    pub documents: String,
    /// Key of the forward-cursor slot.
    pub next: String,
    /// Key of the backward-cursor slot.
    pub previous: String,
}

impl ExportKeys {
    /// Export keys with explicit names for all three slots.
    pub fn new(
        documents: impl Into<String>,
        next: impl Into<String>,
        previous: impl Into<String>,
    ) -> Self {
        Self {
            documents: documents.into(),
            next: next.into(),
            previous: previous.into(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.documents.is_empty() {
            return Err(ConfigError::ExportKeyEmpty("documents"));
        }
        if self.next.is_empty() {
            return Err(ConfigError::ExportKeyEmpty("next"));
        }
        if self.previous.is_empty() {
            return Err(ConfigError::ExportKeyEmpty("previous"));
        }
        if self.documents == self.next || self.documents == self.previous {
            return Err(ConfigError::ExportKeyClash(self.documents.clone()));
        }
        if self.next == self.previous {
            return Err(ConfigError::ExportKeyClash(self.next.clone()));
        }
        Ok(())
    }
}

impl Default for ExportKeys {
    fn default() -> Self {
        Self::new("documents", "nextIds", "previousIds")
    }
}

/// How an assembled result leaves the paginator. Resolved once at
/// construction; exactly one path runs per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Emit the mapping as a JSON body.
    Json,
    /// Render the named template with the mapping as its context.
    Render(String),
    /// Attach the three slots onto the caller's own context and let the
    /// caller continue.
    Attach,
}

/// The invocation boundary an assembled result is dispatched to.
///
/// Implemented by the calling glue - an HTTP response writer, a template
/// engine, a middleware context. Only the method matching the configured
/// [`Delivery`] is ever invoked.
pub trait Responder {
    /// Receive the whole mapping as a JSON body.
    fn json(&mut self, body: Value);

    /// Render `template` with the mapping as its context.
    fn render(&mut self, template: &str, body: Value);

    /// Receive one named slot; called once per slot, then control returns
    /// to the caller.
    fn attach(&mut self, slot: &str, value: Value);
}

/// Maps a [`PageSet`] into its outbound JSON shape and dispatches it.
#[derive(Debug, Clone)]
pub struct Emitter {
    keys: ExportKeys,
    delivery: Delivery,
}

impl Emitter {
    /// An emitter with the default export keys.
    pub fn new(delivery: Delivery) -> Self {
        Self {
            keys: ExportKeys::default(),
            delivery,
        }
    }

    /// An emitter with caller-configured export keys. Keys are validated
    /// eagerly: empty or colliding keys are configuration errors.
    pub fn with_keys(delivery: Delivery, keys: ExportKeys) -> Result<Self, ConfigError> {
        keys.validate()?;
        Ok(Self { keys, delivery })
    }

    /// The configured slot names.
    pub const fn keys(&self) -> &ExportKeys {
        &self.keys
    }

    /// The configured delivery path.
    pub const fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    /// Serialize the page-content slot: full documents in document mode
    /// (falling back to the emitted value for rows the store returned
    /// without one), aggregated values otherwise.
    fn documents_slot<K, V, D>(
        page: &PageSet<K, V, D>,
        use_docs: bool,
    ) -> Result<Value, serde_json::Error>
    where
        K: Serialize,
        V: Serialize,
        D: Serialize,
    {
        let mut slot = Vec::with_capacity(page.entries().len());
        for row in page.entries() {
            let value = match (&row.doc, use_docs) {
                (Some(doc), true) => serde_json::to_value(doc)?,
                _ => serde_json::to_value(&row.value)?,
            };
            slot.push(value);
        }
        Ok(Value::Array(slot))
    }

    /// Build the full outbound mapping.
    pub fn body<K, V, D>(
        &self,
        page: &PageSet<K, V, D>,
        use_docs: bool,
    ) -> Result<Value, serde_json::Error>
    where
        K: Serialize,
        V: Serialize,
        D: Serialize,
    {
        let mut body = serde_json::Map::new();
        body.insert(
            self.keys.previous.clone(),
            serde_json::to_value(page.previous())?,
        );
        body.insert(
            self.keys.documents.clone(),
            Self::documents_slot(page, use_docs)?,
        );
        body.insert(self.keys.next.clone(), serde_json::to_value(page.next())?);
        Ok(Value::Object(body))
    }

    /// Dispatch the result through the configured delivery path.
    pub fn deliver<K, V, D, R>(
        &self,
        page: &PageSet<K, V, D>,
        use_docs: bool,
        responder: &mut R,
    ) -> Result<(), serde_json::Error>
    where
        K: Serialize,
        V: Serialize,
        D: Serialize,
        R: Responder,
    {
        match &self.delivery {
            Delivery::Json => responder.json(self.body(page, use_docs)?),
            Delivery::Render(template) => responder.render(template, self.body(page, use_docs)?),
            Delivery::Attach => {
                responder.attach(
                    &self.keys.previous,
                    serde_json::to_value(page.previous())?,
                );
                responder.attach(
                    &self.keys.documents,
                    Self::documents_slot(page, use_docs)?,
                );
                responder.attach(&self.keys.next, serde_json::to_value(page.next())?);
            },
        }
        Ok(())
    }
}
