use super::embed::MatchEmbed;
use crate::error::AppError;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

fn win_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
fn loss_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
fn field_name_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
fn footer_fg() -> Color {
    Color::AnsiValue(244)
} // Grey

/// Width of the stat name column
const NAME_COLUMN: usize = 20;

/// Prints an embed as coloured terminal text, one stat per line.
///
/// Markdown emphasis from the description is dropped since terminals don't render it.
pub fn render_embed<W: Write>(out: &mut W, embed: &MatchEmbed) -> Result<(), AppError> {
    let accent = if embed.colour == crate::constants::embed::WIN_COLOUR {
        win_fg()
    } else {
        loss_fg()
    };

    queue!(
        out,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(accent),
        Print(&embed.title),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n"),
        Print(embed.description.replace("**", "")),
        Print("\n\n")
    )?;

    for field in &embed.fields {
        queue!(
            out,
            SetForegroundColor(field_name_fg()),
            Print(format!("  {:<width$}", field.name, width = NAME_COLUMN)),
            ResetColor,
            Print(&field.value),
            Print("\n")
        )?;
    }

    queue!(
        out,
        Print("\n"),
        SetForegroundColor(footer_fg()),
        Print(&embed.footer),
        ResetColor,
        Print("\n")
    )?;
    out.flush()?;
    Ok(())
}

/// Prints a one-line failure reply.
pub fn render_message<W: Write>(out: &mut W, message: &str) -> Result<(), AppError> {
    queue!(out, Print(message), Print("\n"))?;
    out.flush()?;
    Ok(())
}
