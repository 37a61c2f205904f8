use super::list::State;

use crate::entry::Entry;
use crate::rendering::{Fabric, Yarn};
use crate::string::truncate;

use crossterm::style::Color;

const DIRECTORY_ICON: &str = "📁";
const FILE_ICON: &str = "📄";
const LINK_ICON: &str = "🔗";

const HEADERS: [&str; 3] = ["Name", "Size", "Modify Time"];

/// The modify time column is drawn narrower than its cell to leave padding on the right.
const LAST_COLUMN_PADDING: usize = 2;

fn icon(entry: &Entry) -> &'static str {
    if entry.is_symlink() {
        LINK_ICON
    } else if entry.is_dir() {
        DIRECTORY_ICON
    } else {
        FILE_ICON
    }
}

impl State {
    /// Draw the header, a separator, and the visible entries as three columns.
    pub(super) fn render(&self) -> Fabric {
        if self.entries.is_empty() {
            return Fabric::from(Yarn::from("Empty"));
        }

        let widths: Vec<usize> = self.flex.widths(self.zone.size.columns);
        let mut columns: Vec<Vec<Yarn>> = vec![Vec::new(); self.flex.cells_len()];

        for (cell, column) in columns.iter_mut().enumerate() {
            let width = self.text_width(&widths, cell);

            let mut header = Yarn::from(HEADERS[cell]);
            header.resize(width);
            header.bold();
            column.push(header);

            let mut separator = Yarn::repeat('─', width);
            separator.color(self.theme.text);
            column.push(separator);
        }

        for index in self.visible_range() {
            let entry: &Entry = &self.entries[index];
            let contents: [String; 3] = [
                format!(
                    "{} {}",
                    icon(entry),
                    truncate(entry.name(), self.truncate_limit)
                ),
                entry.size().to_string(),
                entry.modify_time().to_string(),
            ];

            for (cell, content) in contents.into_iter().enumerate() {
                let mut yarn = Yarn::from(content);
                yarn.resize(self.text_width(&widths, cell));
                self.style(&mut yarn, entry, index, cell);
                columns[cell].push(yarn);
            }
        }

        columns
            .into_iter()
            .map(Fabric::from)
            .reduce(Fabric::quilt_right)
            .unwrap_or_else(|| Fabric::from(Yarn::new()))
    }

    fn text_width(&self, widths: &[usize], cell: usize) -> usize {
        if cell == HEADERS.len() - 1 {
            widths[cell].saturating_sub(LAST_COLUMN_PADDING)
        } else {
            widths[cell]
        }
    }

    fn style(&self, yarn: &mut Yarn, entry: &Entry, index: usize, cell: usize) {
        if index == self.selected {
            yarn.color(self.theme.selected_foreground);
            yarn.background(self.theme.selected_background);
            return;
        }

        if index % 2 == 0 {
            yarn.background(self.theme.even_row_background);
        }

        if cell != 0 {
            yarn.color(self.theme.text);
            return;
        }

        if entry.symlink_display_name().is_some() {
            yarn.bold();
            yarn.underline();
        }
        yarn.color(self.name_color(entry));
    }

    fn name_color(&self, entry: &Entry) -> Color {
        match (entry.is_hidden(), entry.is_dir()) {
            (true, true) => self.theme.hidden_folder,
            (true, false) => self.theme.hidden_file,
            (false, true) => self.theme.folder,
            (false, false) => self.theme.text,
        }
    }
}
