use super::{cell_width, Fabric, Style};

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo as MoveCursorTo;
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::QueueableCommand;

pub struct Renderer {
    stdout: Stdout,
}

impl Renderer {
    pub fn new() -> Self {
        let stdout = io::stdout();
        Renderer { stdout }
    }

    pub fn render(&mut self, fabric: &Fabric) -> io::Result<()> {
        let columns = fabric.size().columns;
        for (row_number, row) in fabric.rows().iter().enumerate() {
            self.lazy_move_cursor(row_number, 0)?;

            let mut current: Option<Style> = None;
            let mut cells: usize = 0;
            for (position, character) in row.characters().iter().enumerate() {
                // Never let a row wrap onto the next one.
                cells += cell_width(*character);
                if cells > columns {
                    break;
                }

                let style = row.style_at(position);
                if current != Some(style) {
                    self.lazy_set_style(style)?;
                    current = Some(style);
                }
                self.stdout.queue(Print(character))?;
            }
            self.lazy_reset_style()?;
        }

        self.stdout.flush()
    }

    fn lazy_move_cursor(&mut self, row: usize, column: usize) -> io::Result<()> {
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        self.stdout.queue(MoveCursorTo(column, row))?;
        Ok(())
    }

    /// Queue the commands to draw following characters in `style`.
    ///
    /// Resetting attributes also resets colors, so colors are always set afterwards.
    fn lazy_set_style(&mut self, style: Style) -> io::Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.underline {
            self.stdout.queue(SetAttribute(Attribute::Underlined))?;
        }
        self.stdout
            .queue(SetForegroundColor(style.color.unwrap_or(Color::Reset)))?;
        self.stdout
            .queue(SetBackgroundColor(style.background.unwrap_or(Color::Reset)))?;
        Ok(())
    }

    fn lazy_reset_style(&mut self) -> io::Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(Color::Reset))?;
        self.stdout.queue(SetBackgroundColor(Color::Reset))?;
        Ok(())
    }
}
