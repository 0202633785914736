//! Ordered fallback between value providers

use tracing::trace;

use crate::source::MetaValue;

/// Values that can be blank even when present.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for MetaValue {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

type Provider<'a, T> = Box<dyn Fn() -> Option<T> + 'a>;

/// Named providers tried in order until one yields a non-blank value.
///
/// Providers are evaluated lazily: later ones never run once an earlier one
/// has answered.
///
/// ```
/// use og_meta::FallbackChain;
///
/// let title = FallbackChain::new("title")
///     .or("meta_title", || Some(String::new()))
///     .or("title", || Some("About us".to_string()))
///     .resolve();
/// assert_eq!(title.as_deref(), Some("About us"));
/// ```
pub struct FallbackChain<'a, T> {
    field: &'static str,
    providers: Vec<(&'static str, Provider<'a, T>)>,
}

impl<'a, T: Blank> FallbackChain<'a, T> {
    /// Start an empty chain for the named field.
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            providers: Vec::new(),
        }
    }

    /// Append a provider.
    pub fn or(mut self, name: &'static str, provider: impl Fn() -> Option<T> + 'a) -> Self {
        self.providers.push((name, Box::new(provider)));
        self
    }

    /// Names of the providers, in evaluation order.
    pub fn providers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.iter().map(|(name, _)| *name)
    }

    /// Evaluate providers in order and return the first non-blank value.
    pub fn resolve(&self) -> Option<T> {
        for (name, provider) in &self.providers {
            if let Some(value) = provider().filter(|v| !v.is_blank()) {
                trace!(field = self.field, provider = *name, "resolved");
                return Some(value);
            }
        }
        trace!(field = self.field, "no provider answered");
        None
    }
}
