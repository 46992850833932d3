//! Format a recipe for humans to read
//!
//! Colors can be changed with [`set_styles`]. Whether they end up in the terminal is up to
//! the writer, so wrap it with something like `anstream` to strip them.

use std::io;

use kitchen_recipe::Recipe;
use owo_colors::OwoColorize;
use tabular::{Row, Table};

mod style;

pub use style::{set_styles, KitchenStyles};
use style::styles;

pub type Result<T = ()> = std::result::Result<T, io::Error>;

pub fn print_human(recipe: &Recipe, mut writer: impl io::Write) -> Result {
    let w = &mut writer;

    header(w, recipe)?;
    metadata(w, recipe)?;
    vegetables(w, recipe)?;
    equipment(w, recipe)?;
    notes(w, recipe)?;

    Ok(())
}

fn header(w: &mut impl io::Write, recipe: &Recipe) -> Result {
    let title_text = format!("  {}  ", recipe.name());
    writeln!(w, "{}", title_text.style(styles().title))?;
    writeln!(w)
}

fn metadata(w: &mut impl io::Write, recipe: &Recipe) -> Result {
    if let Some(desc) = recipe.description() {
        print_wrapped_with_options(w, desc, |o| {
            o.initial_indent("\u{2502} ").subsequent_indent("\u{2502} ")
        })?;
        writeln!(w)?;
    }

    if let Some(time) = recipe.time() {
        writeln!(
            w,
            "{}: {}",
            "time".style(styles().meta_key),
            humantime::format_duration(time)
        )?;
        writeln!(w)?;
    }
    Ok(())
}

fn vegetables(w: &mut impl io::Write, recipe: &Recipe) -> Result {
    writeln!(w, "{}", "Vegetables:".style(styles().section_name))?;
    if recipe.is_empty() {
        writeln!(w, "  (none)")?;
        return writeln!(w);
    }
    let mut table = Table::new("  {:<} {:>}");
    for (vegetable, quantity) in recipe.vegetables() {
        let style = if vegetable.is_other() {
            styles().other_vegetable
        } else {
            styles().vegetable
        };
        let name = vegetable.name().replace('_', " ");
        let row = Row::new()
            .with_ansi_cell(name.style(style).to_string())
            .with_ansi_cell(quantity.style(styles().quantity).to_string());
        table.add_row(row);
    }
    write!(w, "{table}")?;
    writeln!(w)
}

fn equipment(w: &mut impl io::Write, recipe: &Recipe) -> Result {
    if recipe.equipment().is_empty() {
        return Ok(());
    }
    writeln!(w, "{}", "Equipment:".style(styles().section_name))?;
    for item in recipe.equipment() {
        writeln!(w, "  - {}", item.style(styles().equipment))?;
    }
    writeln!(w)
}

fn notes(w: &mut impl io::Write, recipe: &Recipe) -> Result {
    if recipe.notes().is_empty() {
        return Ok(());
    }
    writeln!(w, "{}", "Notes:".style(styles().section_name))?;
    for note in recipe.notes() {
        print_wrapped_with_options(w, note, |o| {
            o.initial_indent("  * ").subsequent_indent("    ")
        })?;
    }
    writeln!(w)
}

fn print_wrapped_with_options<F>(w: &mut impl io::Write, text: &str, f: F) -> Result
where
    F: FnOnce(textwrap::Options) -> textwrap::Options,
{
    static TERM_WIDTH: once_cell::sync::Lazy<usize> =
        once_cell::sync::Lazy::new(|| textwrap::termwidth().min(80));

    let options = f(textwrap::Options::new(*TERM_WIDTH));
    let lines = textwrap::wrap(text, options);
    for line in lines {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}
