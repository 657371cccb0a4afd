//! Printing with an optional Braille rendition
//!
//! [`PrintView`] ties a [`Surface`] to its braille checkbox. Before anything is
//! printed the checkbox state is applied to all tagged elements, so the
//! printout always matches the checkbox.

use std::io::Write;

use log::info;

use crate::display::{DisplayToggle, ElementId, Surface};

#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Whatever produces the printout, e.g. the print dialog
pub trait Printer {
    fn print<S: Surface + ?Sized>(&mut self, surface: &S) -> Result<(), PrintError>;
}

/// Writes the displayed text of every element, one per line
#[derive(Debug)]
pub struct WritePrinter<W: Write> {
    writer: W,
}

impl<W: Write> WritePrinter<W> {
    pub fn new(writer: W) -> Self {
        WritePrinter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Printer for WritePrinter<W> {
    fn print<S: Surface + ?Sized>(&mut self, surface: &S) -> Result<(), PrintError> {
        for id in surface.elements() {
            if let Some(text) = surface.text(id) {
                writeln!(self.writer, "{text}")?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Whether the query string of a print request asks for Braille
/// (`braille=1`). If `braille` is given more than once the last value counts.
pub fn braille_requested(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == "braille")
        .last()
        .is_some_and(|(_, value)| value == "1")
}

#[derive(Debug)]
pub struct PrintView<'t, S: Surface> {
    surface: S,
    toggle: DisplayToggle<'t>,
    checked: bool,
}

impl<S: Surface> PrintView<'static, S> {
    /// Set up the view; with `braille_default` the checkbox starts checked and
    /// the page is shown in Braille right away.
    pub fn new(surface: S, braille_default: bool) -> Self {
        let toggle = DisplayToggle::new(&surface);
        PrintView::with_toggle(surface, toggle, braille_default)
    }
}

impl<'t, S: Surface> PrintView<'t, S> {
    pub fn with_toggle(surface: S, toggle: DisplayToggle<'t>, braille_default: bool) -> Self {
        let mut view = PrintView {
            surface,
            toggle,
            checked: braille_default,
        };
        if braille_default {
            view.apply();
        }
        view
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn toggle(&self) -> &DisplayToggle<'t> {
        &self.toggle
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn apply(&mut self) {
        self.toggle.set_enabled(self.checked, &mut self.surface);
    }

    /// The checkbox changed
    pub fn on_toggle(&mut self, checked: bool) {
        self.checked = checked;
        self.apply();
    }

    /// A widget re-rendered the text of an element
    pub fn render(&mut self, id: ElementId, text: &str) {
        self.toggle.render(id, text, &mut self.surface);
    }

    /// Apply the checkbox state, then hand the surface to `printer`
    pub fn print<P: Printer>(&mut self, printer: &mut P) -> Result<(), PrintError> {
        self.apply();
        info!(
            "printing {} elements{}",
            self.surface.elements().len(),
            if self.checked { " in braille" } else { "" }
        );
        printer.print(&self.surface)
    }
}
