use pencilmark::{Solver, Sudoku};
use std::{env, fs, process};

fn main() {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: pencilmark <puzzle-file>...");
        process::exit(2);
    }

    for path in paths {
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("{}: {}", path, err);
                process::exit(1);
            }
        };
        let sudoku = match Sudoku::from_str_block(&contents) {
            Ok(sudoku) => sudoku,
            Err(err) => {
                eprintln!("{}: {}", path, err);
                process::exit(1);
            }
        };

        println!("{}:", path);
        println!("{}", sudoku);
        println!();
        match Solver::from_sudoku(sudoku).solve() {
            Ok(solution) => println!("{}", solution),
            Err(err) => {
                eprintln!("{}: {}", path, err);
                process::exit(1);
            }
        }
    }
}
