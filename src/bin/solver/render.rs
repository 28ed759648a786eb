use console::{Style, Term};
use gridwalk::{
    config::DisplayConfig,
    search::{Board, Colour, Coordinate},
};
use std::io;

/// Characters per spot.
pub fn spot_width(config: &DisplayConfig) -> usize {
    (config.spot_size as usize / 30).max(1)
}

/// Spaces between neighbouring spots.
pub fn gap_width(config: &DisplayConfig) -> usize {
    config.margin_size as usize / 5
}

/// Closest colour of the 6x6x6 cube of the 256 colour palette.
pub fn ansi256(colour: Colour) -> u8 {
    let level = |channel: u8| (u16::from(channel) * 5 + 127) / 255;
    let code = 16 + 36 * level(colour.r) + 6 * level(colour.g) + level(colour.b);
    code as u8
}

/// Render one row of the board as a line of styled text.
pub fn render_row(board: &Board, y: usize, config: &DisplayConfig) -> String {
    let width = spot_width(config);
    let gap = " ".repeat(gap_width(config));
    (0..board.num_cols())
        .map(|x| {
            let coordinate = Coordinate::new(x as i32, y as i32);
            let colour = board
                .colour(coordinate)
                .unwrap_or(Board::DEFAULT_COLOUR)
                .over(Colour::WHITE);
            let text = match board.direction(coordinate) {
                Some(direction) => format!("{:^width$.width$}", direction.code()),
                None => " ".repeat(width),
            };
            Style::new()
                .black()
                .on_color256(ansi256(colour))
                .apply_to(text)
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(&gap)
}

/// Redraw the whole board, replacing whatever was drawn before.
pub fn draw(term: &Term, board: &Board, config: &DisplayConfig) -> io::Result<()> {
    term.clear_screen()?;
    for y in 0..board.num_rows() {
        term.write_line(&render_row(board, y, config))?;
    }
    Ok(())
}
