use std::env;

use mazecore::{CellWall, Dims, Maze};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<u64>, _>>()
        .expect("Expected integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Usage: print <cols> <rows> [seed]"
    );

    let mut maze = Maze::new(args[0] as i32, args[1] as i32, args.get(2).copied())
        .expect("Invalid maze size");
    println!("Seed: {}", maze.seed());

    let path = maze.solution().unwrap_or_default();
    let grid = maze.grid();
    let Dims(w, h) = grid.size();

    for y in 0..h {
        let mut top = String::new();
        let mut middle = String::new();
        for x in 0..w {
            let walls = grid.walls(Dims(x, y)).unwrap();
            top.push('+');
            top.push_str(if walls.top { "---" } else { "   " });
            middle.push(if walls.left { '|' } else { ' ' });
            middle.push_str(if path.contains(&Dims(x, y)) { " o " } else { "   " });
        }
        top.push('+');
        let last = grid.get_cell(Dims(w - 1, y)).unwrap();
        middle.push(if last.get_wall(CellWall::Right) { '|' } else { ' ' });
        println!("{top}\n{middle}");
    }

    let mut bottom = String::new();
    for x in 0..w {
        let walls = grid.walls(Dims(x, h - 1)).unwrap();
        bottom.push('+');
        bottom.push_str(if walls.bottom { "---" } else { "   " });
    }
    bottom.push('+');
    println!("{bottom}");
}
