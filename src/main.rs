use eframe::{egui, epaint::Vec2};
use gui::{background_color, piece_label};
use tap_chess::{core::utils::unpack_pos, Game, MatchInterface, Move};

mod gui;

struct App {
    game: Game,
    cell_size: f32,
    selected_cell: Option<(u8, u8)>,
    moves: Option<Vec<Move>>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([572.0, 392.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tap chess",
        options,
        Box::new(|_cc| {
            Box::new(App {
                game: Default::default(),
                cell_size: 45.0,
                selected_cell: None,
                moves: None,
            })
        }),
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let move_to_exec = self.grid(ui);
                self.control_panel(ui);
                if let Some(_move) = move_to_exec {
                    self.game.execute_move(_move);
                }
            });
        });
    }
}

impl App {
    fn control_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.heading("Tap chess");
            ui.label(format!("Turn: {}", self.game.current_player()));
            if ui.button("Restart").clicked() {
                self.game = Game::default();
                self.selected_cell = None;
                self.moves = None;
            }
        });
    }

    fn grid(&mut self, ui: &mut egui::Ui) -> Option<Move> {
        let mut move_to_exec = None;
        egui::Grid::new("main_grid")
            .striped(true)
            .min_col_width(self.cell_size)
            .max_col_width(self.cell_size)
            .min_row_height(self.cell_size)
            .show(ui, |ui| {
                for rank in 0..8u8 {
                    for file in 0..8u8 {
                        let piece = self.game.board().get(rank, file);
                        let btn = if let Some(label) = piece_label(&piece) {
                            egui::Button::new(label)
                        } else {
                            egui::Button::new("")
                        };
                        let selected = self
                            .selected_cell
                            .map(|cell| cell == (rank, file))
                            .unwrap_or(false);
                        let highlighted = self
                            .moves
                            .as_ref()
                            .map(|moves| {
                                moves
                                    .iter()
                                    .any(|_move| unpack_pos(_move.end_position()) == (rank, file))
                            })
                            .unwrap_or(false);
                        let btn = ui.add(
                            btn.frame(false)
                                .min_size(Vec2::new(self.cell_size, self.cell_size))
                                .fill(background_color(
                                    (rank as usize, file as usize),
                                    selected,
                                    highlighted,
                                )),
                        );
                        if btn.clicked() {
                            // Either a destination pick or a fresh selection;
                            // every attempt clears the previous selection.
                            self.moves = if let Some(moves) = self.moves.take() {
                                move_to_exec = moves
                                    .iter()
                                    .find(|_move| {
                                        unpack_pos(_move.end_position()) == (rank, file)
                                    })
                                    .cloned();
                                self.selected_cell = None;
                                None
                            } else {
                                let moves = self.game.possible_moves(rank, file);
                                self.selected_cell =
                                    moves.as_ref().map(|_| (rank, file));
                                moves
                            };
                        }
                    }
                    ui.end_row();
                }
            });
        move_to_exec
    }
}
