use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color as TableColor, ContentArrangement, Table};

use crate::art::{FigletRenderer, FontAvailability, FontStyle};

fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn availability_cell(availability: &FontAvailability) -> Cell {
    match availability {
        FontAvailability::Embedded => Cell::new("embedded").fg(TableColor::Green),
        FontAvailability::File(path) => Cell::new(path.display()).fg(TableColor::Green),
        FontAvailability::Missing => {
            Cell::new("missing (falls back to standard)").fg(TableColor::Yellow)
        }
    }
}

/// Lists every font style with where the renderer would load it from.
pub fn fonts_table(renderer: &FigletRenderer) -> Table {
    let mut table = create_table();
    table.set_header(vec![
        Cell::new("Style").fg(TableColor::Cyan),
        Cell::new("Source").fg(TableColor::Cyan),
    ]);

    for style in FontStyle::ALL {
        table.add_row(vec![
            Cell::new(style.name()).fg(TableColor::Cyan),
            availability_cell(&renderer.availability(*style)),
        ]);
    }
    table
}
