use anyhow::Result;
use clap::Parser;

use std::io::{stdin, stdout, Write};

use connect12_ai::{engine::DEFAULT_DEPTH, *};

mod display;

#[derive(Debug, Parser)]
#[command(about = "Play connect-four on a 6x12 board against a minimax engine")]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Let the engine make the first move
    #[arg(long)]
    engine_first: bool,

    /// Let the engine play both sides
    #[arg(long)]
    self_play: bool,

    /// Start from a move history, one column digit (0-9, a, b) per move
    #[arg(long, default_value = "")]
    moves: String,
}

// accepts either a decimal column number or a single board digit
fn parse_column(input: &str) -> Option<usize> {
    let input = input.trim();
    if let Ok(column) = input.parse::<usize>() {
        return Some(column);
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(digit), None) => digit.to_digit(WIDTH as u32).map(|column| column as usize),
        _ => None,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let first = if args.engine_first {
        Side::Engine
    } else {
        Side::Opponent
    };
    let (mut board, mut last_move) = Board::replay(&args.moves, first)?;
    let mut side = if args.moves.chars().count() % 2 == 0 {
        first
    } else {
        first.opponent()
    };
    let mut engine = Engine::new().with_depth(args.depth);

    let stdin = stdin();

    println!("Welcome to Connect 4, 12 columns wide\n");

    // game loop
    loop {
        display::draw(&board)?;

        match board.state(last_move) {
            GameState::Playing => {
                let next_move = if side == Side::Engine || args.self_play {
                    println!("Engine is thinking...");
                    stdout().flush()?;

                    // slow down play if both players are AI
                    if args.self_play {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    let column = match side {
                        Side::Engine => engine.decide(&mut board)?,
                        // the engine always plays for `Side::Engine`,
                        // so search the mirrored position
                        Side::Opponent => engine.decide(&mut board.swapped())?,
                    };
                    println!("Engine plays column {}", column);
                    column

                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush()?;
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match parse_column(&input_str) {
                        None => {
                            println!("Invalid column: {}", input_str.trim());
                            continue;
                        }
                        Some(column) => column,
                    }
                };

                match board.apply(next_move, side) {
                    Ok(row) => {
                        last_move = Some(LastMove::new(row, next_move, side));
                        side = side.opponent();
                    }
                    Err(err) => {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            }

            // end states
            GameState::EngineWin => {
                println!("{}", if args.self_play { "Red wins!" } else { "The engine wins!" });
                break;
            }
            GameState::OpponentWin => {
                println!("{}", if args.self_play { "Yellow wins!" } else { "You win!" });
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
