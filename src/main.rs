use std::sync::OnceLock;

use clap::Parser;
use monopoly::{
    Board, Color, GRID, Locale, MatchState, Phase, Point, RandomDice, short_label,
    simulation::{SimulationConfig, simulate},
};
use nannou::{
    color::{Srgb, rgb8},
    geom::Rect,
    prelude::*,
};

/// Characters of a square name that fit inside a cell.
const LABEL_CHARS: usize = 4;

/// Frames the color choice stays on screen before the board appears.
const TRANSITION_FRAMES: u8 = 30;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Two player loop board game", long_about = None)]
struct Args {
    /// Play as this color and skip the color choice.
    #[arg(long)]
    color: Option<Color>,
    /// Seed for reproducible dice.
    #[arg(long)]
    seed: Option<u64>,
    /// Play this many matches without a window and print the totals.
    #[arg(long, value_name = "MATCHES")]
    simulate: Option<usize>,
    /// Rolls after which a simulated match is given up.
    #[arg(long, default_value_t = 1000)]
    max_turns: u32,
    /// Initial window size in pixels.
    #[arg(long, default_value_t = 720)]
    size: u32,
    /// Language of the square names (en or zh).
    #[arg(long, default_value = "en")]
    locale: Locale,
    #[arg(short, long)]
    verbose: bool,
}

fn args() -> &'static Args {
    static ARGS: OnceLock<Args> = OnceLock::new();
    ARGS.get_or_init(Args::parse)
}

fn main() {
    let args = args();
    monopoly::log(if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info });

    if let Some(matches) = args.simulate {
        let config = SimulationConfig {
            matches,
            seed: args.seed.unwrap_or_default(),
            max_turns: args.max_turns,
            first: args.color.unwrap_or_default(),
        };
        match simulate(config) {
            Ok(report) => println!("{}", report),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    nannou::app(model).update(update).run();
}

struct Model {
    board: Board,
    state: MatchState,
    dice: RandomDice,
    screen: Screen,
    preset: Option<Color>,
    help: bool,
}

#[derive(Clone, Copy)]
enum Screen {
    ChooseColor,
    Transition(u8),
    Playing,
    GameOver(Color),
}

fn model(app: &App) -> Model {
    let args = args();
    app.new_window()
        .title("Monopoly")
        .size(args.size, args.size)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .expect("build window");

    let dice = match args.seed {
        Some(seed) => RandomDice::seeded(seed),
        None => RandomDice::from_entropy(),
    };

    let mut model = Model {
        board: Board::new(args.locale),
        state: MatchState::default(),
        dice,
        screen: Screen::ChooseColor,
        preset: args.color,
        help: false,
    };
    back_to_menu(&mut model);
    model
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    if let Screen::Transition(n) = model.screen {
        model.screen = if n >= TRANSITION_FRAMES { Screen::Playing } else { Screen::Transition(n + 1) };
    }
}

fn begin(model: &mut Model, color: Color) {
    model.state = MatchState::start(color);
    model.screen = Screen::Transition(0);
}

fn back_to_menu(model: &mut Model) {
    model.state.reset();
    match model.preset {
        Some(color) => begin(model, color),
        None => model.screen = Screen::ChooseColor,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    if key == Key::H {
        model.help = !model.help;
        return;
    }

    match model.screen {
        Screen::ChooseColor => match key {
            Key::R => begin(model, Color::Red),
            Key::B => begin(model, Color::Blue),
            Key::Escape => app.quit(),
            _ => (),
        },
        Screen::Transition(_) => (),
        Screen::Playing => match key {
            Key::Space => match model.state.roll_and_move(&mut model.dice) {
                Ok(_) => {
                    if let Some(winner) = model.state.winner() {
                        log::info!("{:<24}{}", "match won by", winner);
                        model.screen = Screen::GameOver(winner);
                    }
                }
                Err(e) => log::warn!("{}", e),
            },
            Key::Return => {
                if let Err(e) = model.state.end_turn() {
                    log::warn!("{}", e);
                }
            }
            Key::Q => {
                log::info!("match abandoned");
                back_to_menu(model);
            }
            _ => (),
        },
        Screen::GameOver(_) => back_to_menu(model),
    }
}

fn ink() -> Srgb<u8> {
    rgb8(0x33, 0x33, 0x33)
}

/// Center of a cell in window coordinates. The board model works in canvas
/// coordinates with the origin in the top left corner and y pointing down.
fn cell_center(board_rect: Rect, point: Point, cell: f32) -> Vec2 {
    pt2(board_rect.left() + point.x + cell / 2.0, board_rect.top() - point.y - cell / 2.0)
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let window_rect = app.window_rect();
    let side = window_rect.w().min(window_rect.h()) * 0.95;
    let board_rect = Rect::from_w_h(side, side).shift_x(window_rect.x()).shift_y(window_rect.y());
    let cell = side / GRID as f32;

    draw.rect()
        .xy(board_rect.xy())
        .wh(board_rect.wh())
        .color(rgb8(0xf8, 0xf9, 0xfa))
        .stroke(ink())
        .stroke_weight(2.0);

    // Squares
    for (square, point) in model.board.layout(cell) {
        let center = cell_center(board_rect, point, cell);
        let [r, g, b] = square.kind().fill();
        draw.rect()
            .xy(center)
            .w_h(cell, cell)
            .color(rgb8(r, g, b))
            .stroke(ink())
            .stroke_weight(1.0);
        draw.text(short_label(square.name(), LABEL_CHARS))
            .xy(center)
            .w(cell)
            .font_size((cell / 5.0) as u32)
            .color(ink());
    }

    // Pawns, nudged apart so both stay visible on a shared square
    for (color, position) in model.state.pawns() {
        let offset = match color {
            Color::Red => -cell * 0.12,
            Color::Blue => cell * 0.12,
        };
        let center = cell_center(board_rect, position.geometry(cell), cell) + vec2(offset, 0.0);
        let [r, g, b] = color.fill();
        draw.ellipse()
            .xy(center)
            .radius(cell * 0.3)
            .color(rgb8(r, g, b))
            .stroke(ink())
            .stroke_weight(2.0);
    }

    // Status in the middle of the board
    let lines = match model.screen {
        Screen::ChooseColor => vec![
            "Choose your color".to_string(),
            "[R] red    [B] blue".to_string(),
            "[H] help    [Esc] exit".to_string(),
        ],
        Screen::Transition(_) => vec![format!("Playing as {}", model.state.current_player())],
        Screen::Playing => {
            let dice = match model.state.last_roll() {
                Some(roll) => format!("Dice: {}", roll.die.value()),
                None => "Dice: -".to_string(),
            };
            let hint = match model.state.phase() {
                Phase::AwaitingRoll => "[Space] roll",
                Phase::AwaitingEndTurn => "[Enter] end turn",
            };
            vec![format!("Current player: {}", model.state.current_player()), dice, hint.to_string()]
        }
        Screen::GameOver(winner) => vec![format!("Game over! {} wins!", winner), "Press any key".to_string()],
    };

    let line_height = cell * 0.6;
    let mut y = board_rect.y() + line_height * (lines.len() as f32 - 1.0) / 2.0;
    for line in &lines {
        draw.text(line)
            .x_y(board_rect.x(), y)
            .w(cell * 8.0)
            .font_size((cell / 3.0) as u32)
            .color(ink());
        y -= line_height;
    }

    if model.help {
        let help_rect = Rect::from_w_h(cell * 7.0, cell * 5.0).shift_x(board_rect.x()).shift_y(board_rect.y());
        draw.rect()
            .xy(help_rect.xy())
            .wh(help_rect.wh())
            .color(WHITE)
            .stroke(ink())
            .stroke_weight(2.0);
        draw.text("Roll the die and move around the loop.\nThe first pawn to reach the last square before start wins.\n\n[Space] roll    [Enter] end turn\n[Q] quit match    [H] close help")
            .xy(help_rect.xy())
            .w(help_rect.w() - 20.0)
            .font_size((cell / 4.0) as u32)
            .color(ink());
    }

    draw.to_frame(app, &frame).unwrap();
}
