use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect12_ai::{Board, Cell, HEIGHT, WIDTH};

/// The column digits accepted as move input, left to right
pub fn column_labels() -> String {
    (0..WIDTH)
        .filter_map(|column| std::char::from_digit(column as u32, WIDTH as u32))
        .collect()
}

fn tile_colour(cell: Cell) -> Color {
    match cell {
        Cell::Engine => Color::Red,
        Cell::Opponent => Color::Yellow,
        Cell::Empty => Color::DarkBlue,
    }
}

/// Prints the board top row first, engine tiles in red and opponent tiles in yellow
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    stdout.queue(PrintStyledContent(style(column_labels() + "\n")))?;
    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            let tile = style("O")
                .attribute(Attribute::Bold)
                .on(Color::DarkBlue)
                .with(tile_colour(board.get(row, column)));
            stdout.queue(PrintStyledContent(tile))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
