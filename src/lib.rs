pub mod braille;
pub mod check_yaml;
pub mod display;
pub mod print;
pub mod table;
pub mod translator;
pub mod yaml;

pub use display::{DisplayToggle, ElementId, Page, Surface};
pub use print::{PrintView, Printer, WritePrinter};
pub use table::{Table, TableBuilder, UKRAINIAN};
pub use translator::{Transliterator, transliterate};
