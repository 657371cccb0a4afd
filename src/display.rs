//! Braille display toggle
//!
//! A [`DisplayToggle`] swaps the text of every tagged element on a
//! [`Surface`] between its original print form and its Braille form. The
//! original of each element is cached the first time the toggle touches it
//! and is never overwritten by the toggle itself, so the displayed (possibly
//! Braille) text is never mistaken for an original.

use std::collections::HashMap;

use log::debug;

use crate::{table::Table, translator::Transliterator};

/// Stable handle of an element on a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The environment that owns the displayed elements, typically a page
pub trait Surface {
    /// All elements in document order
    fn elements(&self) -> Vec<ElementId>;
    /// Elements carrying the braille-eligible marker
    fn tagged(&self) -> Vec<ElementId>;
    /// Currently displayed text, `None` if the element does not exist
    fn text(&self, id: ElementId) -> Option<String>;
    fn set_text(&mut self, id: ElementId, text: &str);
    /// Page level braille mode, e.g. for print styling
    fn set_braille_mode(&mut self, _enabled: bool) {}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub text: String,
    pub tagged: bool,
}

/// An in-memory [`Surface`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    elements: Vec<Element>,
    braille_mode: bool,
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    /// Add an element that takes part in the braille toggle
    pub fn add_tagged(&mut self, text: &str) -> ElementId {
        self.push(text, true)
    }

    /// Add an element that is never transliterated
    pub fn add_plain(&mut self, text: &str) -> ElementId {
        self.push(text, false)
    }

    fn push(&mut self, text: &str, tagged: bool) -> ElementId {
        self.elements.push(Element {
            text: text.to_string(),
            tagged,
        });
        ElementId(self.elements.len() - 1)
    }

    pub fn braille_mode(&self) -> bool {
        self.braille_mode
    }
}

impl Surface for Page {
    fn elements(&self) -> Vec<ElementId> {
        (0..self.elements.len()).map(ElementId).collect()
    }

    fn tagged(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.tagged)
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn text(&self, id: ElementId) -> Option<String> {
        self.elements.get(id.0).map(|e| e.text.clone())
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.text = text.to_string();
        }
    }

    fn set_braille_mode(&mut self, enabled: bool) {
        self.braille_mode = enabled;
    }
}

#[derive(Debug)]
pub struct DisplayToggle<'t> {
    transliterator: Transliterator<'t>,
    /// Elements registered at setup, in document order
    elements: Vec<ElementId>,
    /// Print form of each element, cached on first use
    originals: HashMap<ElementId, String>,
    enabled: bool,
}

impl DisplayToggle<'static> {
    /// Register the tagged elements of `surface` using the Ukrainian table
    pub fn new<S: Surface + ?Sized>(surface: &S) -> Self {
        DisplayToggle::with_transliterator(Transliterator::default(), surface)
    }
}

impl<'t> DisplayToggle<'t> {
    pub fn with_table<S: Surface + ?Sized>(table: &'t Table, surface: &S) -> Self {
        DisplayToggle::with_transliterator(Transliterator::new(table), surface)
    }

    fn with_transliterator<S: Surface + ?Sized>(
        transliterator: Transliterator<'t>,
        surface: &S,
    ) -> Self {
        let elements = surface.tagged();
        debug!("registered {} braille elements", elements.len());
        DisplayToggle {
            transliterator,
            elements,
            originals: HashMap::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    /// The cached print form of an element, if the toggle has seen it
    pub fn original(&self, id: ElementId) -> Option<&str> {
        self.originals.get(&id).map(String::as_str)
    }

    fn is_registered(&self, id: ElementId) -> bool {
        self.elements.contains(&id)
    }

    fn display<S: Surface + ?Sized>(&self, surface: &mut S, id: ElementId, original: &str) {
        if self.enabled {
            surface.set_text(id, &self.transliterator.transliterate(original));
        } else {
            surface.set_text(id, original);
        }
    }

    /// Show every registered element in Braille (`on`) or in print.
    ///
    /// Calling this again while enabled re-applies the transliteration, which
    /// is harmless since it always starts from the cached original.
    pub fn set_enabled<S: Surface + ?Sized>(&mut self, on: bool, surface: &mut S) {
        self.enabled = on;
        surface.set_braille_mode(on);
        for &id in &self.elements {
            if !self.originals.contains_key(&id) {
                match surface.text(id) {
                    Some(text) => {
                        self.originals.insert(id, text);
                    }
                    None => continue,
                }
            }
            if let Some(original) = self.originals.get(&id) {
                self.display(surface, id, original);
            }
        }
        debug!(
            "braille display {} for {} elements",
            if on { "enabled" } else { "disabled" },
            self.elements.len()
        );
    }

    /// Put freshly rendered `text` into an element.
    ///
    /// The rendering widget owns the content, so `text` replaces the cached
    /// original. The element is then shown in the current mode.
    pub fn render<S: Surface + ?Sized>(&mut self, id: ElementId, text: &str, surface: &mut S) {
        if !self.is_registered(id) {
            surface.set_text(id, text);
            return;
        }
        self.originals.insert(id, text.to_string());
        self.display(surface, id, text);
    }
}
