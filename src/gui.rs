use eframe::egui;
use tap_chess::Piece;

pub fn background_color(
    position: (usize, usize),
    selected: bool,
    possible_move: bool,
) -> egui::Color32 {
    let color = if (position.0 + position.1) % 2 == 0 {
        egui::Color32::LIGHT_GRAY
    } else {
        egui::Color32::DARK_GRAY
    };
    if selected {
        egui::Color32::LIGHT_GREEN
    } else if possible_move {
        color.additive().gamma_multiply(1.3)
    } else {
        color
    }
}

pub fn piece_label(piece: &Piece) -> Option<egui::RichText> {
    piece
        .glyph()
        .map(|glyph| egui::RichText::new(glyph).size(32.0))
}
