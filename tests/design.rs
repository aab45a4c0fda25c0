use std::sync::atomic::{AtomicUsize, Ordering};

use hyper_robot_solver::design::{first_accepted, verify, verify_with, Config};
use hyper_robot_solver::{Color, ColorMap, Pos, Puzzle, Walls};

fn sample(red_chip: Pos) -> Puzzle {
    let mut walls = Walls::default();
    for (row, col) in [(0, 6), (0, 15), (11, 12), (14, 11)] {
        walls.set_vertical(row, col).unwrap();
    }
    walls.set_horizontal(12, 15).unwrap();
    Puzzle::new(
        ColorMap([Pos(2, 2), Pos(5, 9), Pos(14, 2), Pos(9, 5)]),
        ColorMap([red_chip, Pos(0, 5), Pos(0, 14), Pos(14, 10)]),
        walls,
    )
    .unwrap()
}

#[test]
fn config_defaults_and_validation() {
    let config = Config::default();
    assert_eq!(config.max_depth, 10);
    assert_eq!(config.accept, 3..=8);
    assert!(config.validate().is_ok());

    #[allow(clippy::reversed_empty_ranges)]
    let empty = Config {
        max_depth: 10,
        accept: 5..=3,
    };
    assert!(empty.validate().is_err());
    let too_deep = Config {
        max_depth: 10,
        accept: 3..=12,
    };
    assert!(too_deep.validate().is_err());
}

#[test]
fn accepted_design() {
    let report = verify(&sample(Pos(11, 11)), &Config::default());
    let depths = Color::ALL.map(|color| report.depth(color));
    assert_eq!(depths, [Some(7), Some(3), Some(3), Some(5)]);
    assert!(report.is_accepted());
    assert_eq!(
        report.to_string(),
        "\
[red   ] 7 moves [OK]: red down -> yellow left -> green left -> yellow up -> red left -> red up -> red right
[blue  ] 3 moves [OK]: blue left -> blue up -> blue right
[yellow] 3 moves [OK]: yellow right -> yellow up -> yellow right
[green ] 5 moves [OK]: yellow down -> yellow left -> green left -> green down -> green right
",
    );
}

#[test]
fn too_short_is_rejected() {
    let puzzle = sample(Pos(2, 15));
    let expanded = AtomicUsize::new(0);
    let report = verify_with(&puzzle, &Config::default(), || {
        expanded.fetch_add(1, Ordering::Relaxed);
    });
    assert!(expanded.into_inner() > 0);
    assert_eq!(report.depth(Color::Red), Some(1));
    assert!(!report.is_accepted());
    assert!(report
        .to_string()
        .starts_with("[red   ] 1 moves [out of range]: red right\n"));
}

#[test]
fn unsolved_color_is_rejected() {
    let config = Config {
        max_depth: 2,
        accept: 1..=2,
    };
    let report = verify(&sample(Pos(11, 11)), &config);
    assert_eq!(report.depth(Color::Red), None);
    assert_eq!(report.solution(Color::Red), None);
    assert!(!report.is_accepted());
    assert!(report
        .to_string()
        .starts_with("[red   ] no solution within 2 moves\n"));
}

#[test]
fn first_accepted_candidate() {
    let candidates = [sample(Pos(2, 15)), sample(Pos(11, 11))];
    let (idx, report) = first_accepted(&candidates, &Config::default()).unwrap();
    assert_eq!(idx, 1);
    assert!(report.is_accepted());

    assert!(first_accepted(&candidates[..1], &Config::default()).is_none());
}
