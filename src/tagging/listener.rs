// src/tagging/listener.rs
//! Click callbacks attached to annotated text.

use crate::error::TaggerError;
use crate::types::MatchKind;
use std::fmt;
use std::sync::Arc;

/// A click callback. Receives the tag or the full link.
pub type ClickCallback = Arc<dyn Fn(&str) + Send + Sync + 'static>;

/// Listener interface for hosts that prefer one object with two methods.
pub trait OnTagClickListener: Send + Sync {
    /// Called when the user activates a mention or hashtag.
    fn on_tag_click(&self, tag: &str);

    /// Called when the user activates a link. Receives the untruncated URL.
    fn on_link_click(&self, link: &str);
}

/// Two independently optional callbacks: one for tags, one for links.
///
/// Which callbacks are required depends on the entry point: tag-only
/// annotation needs `on_tag`, annotation with links needs both.
#[derive(Clone, Default)]
pub struct ClickListener {
    on_tag: Option<ClickCallback>,
    on_link: Option<ClickCallback>,
}

impl ClickListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mention/hashtag callback.
    pub fn on_tag(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_tag = Some(Arc::new(callback));
        self
    }

    /// Sets the link callback.
    pub fn on_link(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_link = Some(Arc::new(callback));
        self
    }

    /// Uses one callback for every token kind.
    pub fn on_any(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        let callback: ClickCallback = Arc::new(callback);
        self.on_tag = Some(Arc::clone(&callback));
        self.on_link = Some(callback);
        self
    }

    pub fn has_tag_callback(&self) -> bool {
        self.on_tag.is_some()
    }

    pub fn has_link_callback(&self) -> bool {
        self.on_link.is_some()
    }

    /// Rejects a listener missing a callback the entry point relies on.
    pub(crate) fn require(&self, with_links: bool) -> Result<(), TaggerError> {
        if self.on_tag.is_none() {
            return Err(TaggerError::missing_callback("on_tag"));
        }
        if with_links && self.on_link.is_none() {
            return Err(TaggerError::missing_callback("on_link"));
        }
        Ok(())
    }

    /// Invokes the callback for `kind`. Returns whether one was called.
    pub(crate) fn dispatch(&self, kind: MatchKind, payload: &str) -> bool {
        let callback = match kind {
            MatchKind::Mention | MatchKind::Hashtag => self.on_tag.as_ref(),
            MatchKind::Link => self.on_link.as_ref(),
        };
        match callback {
            Some(callback) => {
                callback(payload);
                true
            }
            None => false,
        }
    }
}

impl<L> From<Arc<L>> for ClickListener
where
    L: OnTagClickListener + 'static,
{
    fn from(listener: Arc<L>) -> Self {
        let for_links = Arc::clone(&listener);
        ClickListener::new()
            .on_tag(move |tag| listener.on_tag_click(tag))
            .on_link(move |link| for_links.on_link_click(link))
    }
}

impl fmt::Debug for ClickListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickListener")
            .field("on_tag", &self.on_tag.is_some())
            .field("on_link", &self.on_link.is_some())
            .finish()
    }
}
