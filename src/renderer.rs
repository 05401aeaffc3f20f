use crate::engine::EditEngine;
use crate::text_buffer::Rendered;

use crossterm::{
    queue, style,
    style::{style, Color},
    Result,
};
use std::fmt::Display;
use std::io::Write;

const MIN_WIDTH_LINE_NUMBER: usize = 3;

const MENU_ENTRIES: [&str; 9] = [
    "Create New File",
    "Open File",
    "Save File",
    "Close File",
    "Display File Content",
    "Insert Text",
    "Search and Replace",
    "Undo Last Change",
    "Exit",
];

fn line_number_width(line_count: usize) -> usize {
    // max(3, num_digits)
    std::cmp::max(MIN_WIDTH_LINE_NUMBER, line_count.to_string().len())
}

pub fn menu(screen: &mut impl Write, engine: &EditEngine) -> Result<()> {
    let file_label = match engine.source_name() {
        Some(name) if engine.is_dirty() => format!("{} [modified]", name),
        Some(name) => name.to_string(),
        None => String::from("no file open"),
    };

    queue!(
        screen,
        style::Print("\n"),
        style::PrintStyledContent(style("Text Editor Menu").with(Color::Cyan)),
        style::PrintStyledContent(style(format!(" ({})\n", file_label)).with(Color::DarkGrey))
    )?;
    for (i, entry) in MENU_ENTRIES.iter().enumerate() {
        queue!(screen, style::Print(format!("{}. {}\n", i + 1, entry)))?;
    }
    screen.flush()?;
    Ok(())
}

pub fn content(screen: &mut impl Write, rendered: Rendered<'_>, line_numbers: bool) -> Result<()> {
    match rendered {
        Rendered::Empty => {
            queue!(
                screen,
                style::PrintStyledContent(style("File is empty.\n").with(Color::DarkGrey))
            )?;
        }
        Rendered::Lines(lines) => {
            let width = line_number_width(lines.len());
            for (line_index, line) in lines.iter().enumerate() {
                if line_numbers {
                    let gutter = format!("{:>width$} ", line_index + 1, width = width);
                    queue!(screen, style::PrintStyledContent(style(gutter).with(Color::Blue)))?;
                }
                queue!(screen, style::Print(line), style::Print("\n"))?;
            }
        }
    }
    screen.flush()?;
    Ok(())
}

pub fn info(screen: &mut impl Write, message: impl Display) -> Result<()> {
    queue!(
        screen,
        style::PrintStyledContent(style(message.to_string()).with(Color::Green)),
        style::Print("\n")
    )?;
    screen.flush()?;
    Ok(())
}

pub fn error(screen: &mut impl Write, message: impl Display) -> Result<()> {
    queue!(
        screen,
        style::PrintStyledContent(style(format!("Error: {}", message)).with(Color::Red)),
        style::Print("\n")
    )?;
    screen.flush()?;
    Ok(())
}
