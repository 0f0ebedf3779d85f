//! Whole sessions driven through a scripted terminal.

use std::{fs, path::Path, process, time::Duration};

use libgame::{Cell, Grid};
use life::{
    config::Config,
    controller::{Controller, Mode},
    terminal::Key,
    test_support::ScriptedTerminal,
};

fn config() -> Config {
    Config {
        alive_glyph: '#',
        dead_glyph: '.',
        tick_millis: 10,
        color: false,
        ..Config::default()
    }
}

fn controller<I, S>(lines: I) -> Controller<ScriptedTerminal>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Controller::new(ScriptedTerminal::new(lines), config())
}

fn run<I, S>(lines: I) -> Controller<ScriptedTerminal>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut controller = controller(lines);
    controller.run().expect("session");
    controller
}

fn output(controller: &Controller<ScriptedTerminal>) -> String {
    controller.terminal().output()
}

fn alive_positions(grid: &Grid) -> Vec<(usize, usize)> {
    grid.enumerate_cells()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(pos, _)| (pos.row, pos.col))
        .collect()
}

/// Commands are lowercased, so paths typed into a session must already be lowercase.
fn lowercase_dir(name: &str) -> tempfile::TempDir {
    let dir = tempfile::Builder::new()
        .prefix(&format!("life-{name}-{}", process::id()))
        .rand_bytes(0)
        .tempdir()
        .expect("tempdir");

    let path = dir.path().to_str().expect("utf-8 temp path");
    assert_eq!(path, path.to_ascii_lowercase(), "temp dir must be lowercase");
    dir
}

fn write_grid_file(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn design_then_print() {
    let controller = run(["design", "3 3", "0 0", "1 1", "quit", "print"]);

    let grid = controller.grid().expect("grid after design");
    assert_eq!((grid.rows(), grid.cols()), (3, 3));
    assert_eq!(alive_positions(grid), vec![(0, 0), (1, 1)]);
    assert_eq!(controller.mode(), Mode::Normal);

    // Entering and leaving design mode.
    assert_eq!(controller.terminal().clears, 2);

    let output = output(&controller);
    assert!(output.contains("[I] -> # . .\n. # .\n. . .\n"), "{output}");
    assert!(output.contains("(Use [save <filename>] to save map to local.)"));
}

#[test]
fn diagonal_pair_dies_after_generate() {
    let controller = run(["design", "3 3", "0 0", "1 1", "quit", "generate"]);

    let grid = controller.grid().unwrap();
    assert_eq!(grid.live_count(), 0);
    assert!(output(&controller).contains(". . .\n. . .\n. . .\n"));
}

#[test]
fn print_without_grid_reports_and_continues() {
    let controller = run(["print", "generate", "save out.txt", "help"]);

    assert!(controller.grid().is_none());

    let output = output(&controller);
    assert_eq!(output.matches("no map yet!").count(), 3);
    assert!(output.contains("Or use [design] to design a new map."));
    assert!(output.contains("[generate]"));
    assert!(output.contains("See you next time!"));
}

#[test]
fn design_rejects_bad_input_without_mutating() {
    let controller = run([
        "design", "3 x", "0 3", "120 3", "5", "abc def", "3 3", "3 0", "0 3", "2 2", "2 2",
        "quit",
    ]);

    let output = output(&controller);
    assert_eq!(output.matches("format error").count(), 3, "{output}");
    assert_eq!(output.matches("illegal number").count(), 3, "{output}");
    assert_eq!(output.matches("number too large").count(), 1, "{output}");

    let grid = controller.grid().unwrap();
    assert_eq!((grid.rows(), grid.cols()), (3, 3));
    assert_eq!(alive_positions(grid), vec![(2, 2)]);
}

#[test]
fn design_bound_follows_config() {
    let mut controller = Controller::new(
        ScriptedTerminal::new(["design", "10 4", "9 4", "quit"]),
        Config {
            max_dimension: 10,
            ..config()
        },
    );
    controller.run().unwrap();

    let output = output(&controller);
    assert!(output.contains("(less than 10)"));
    assert!(output.contains("number too large"));
    assert_eq!(controller.grid().unwrap().rows(), 9);
}

#[test]
fn other_verbs_are_numbers_in_design_mode() {
    let controller = run(["design", "print", "help me", "quit now", "   ", "quit"]);

    assert_eq!(output(&controller).matches("format error").count(), 3);
    assert!(controller.grid().is_none());
    assert_eq!(controller.mode(), Mode::Normal);
}

#[test]
fn quitting_before_dimensions_keeps_previous_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_grid_file(dir.path(), "block.txt", "2 2\n1 1\n1 1\n");

    let mut controller = controller(["design", "\\q", "print"]);
    controller.load(&path).unwrap();
    controller.run().unwrap();

    let grid = controller.grid().unwrap();
    assert_eq!(grid.live_count(), 4);

    let output = output(&controller);
    assert!(output.contains("row = 2, column = 2\nloading complete"));
    assert!(!output.contains("(Use [save <filename>]"));
}

#[test]
fn end_of_input_in_design_mode_quits_it() {
    let controller = run(["design", "2 2", "1 1"]);

    assert_eq!(controller.mode(), Mode::Normal);
    assert_eq!(alive_positions(controller.grid().unwrap()), vec![(1, 1)]);

    let output = output(&controller);
    assert!(output.contains("--> You have quit design mode."));
    assert!(output.contains("See you next time!"));
}

#[test]
fn failed_load_keeps_previous_grid() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_grid_file(dir.path(), "good.txt", "1 3\n0 1 0\n");
    let illegal = write_grid_file(dir.path(), "illegal.txt", "0 5\n");
    let large = write_grid_file(dir.path(), "large.txt", "200 5\n");

    let mut controller = controller(["load /nonexistent/life/grid.txt", "load"]);
    controller.load(&good).unwrap();
    controller.load(&illegal).unwrap();
    controller.load(&large).unwrap();
    controller.run().unwrap();

    let grid = controller.grid().unwrap();
    assert_eq!((grid.rows(), grid.cols()), (1, 3));
    assert_eq!(grid.cell((0, 1)), Some(Cell::Alive));

    let output = output(&controller);
    assert!(output.contains("load: illegal map"), "{output}");
    assert!(output.contains("load: map is too large"), "{output}");
    assert!(output.contains("load: no such file: /nonexistent/life/grid.txt"), "{output}");
    assert!(output.contains("load: missing file name"), "{output}");
}

#[test]
fn save_then_load_round_trip() {
    let dir = lowercase_dir("round-trip");
    let path = dir.path().join("glider file.txt");
    let path_str = path.to_str().unwrap();

    let controller = run([
        "design".to_owned(),
        "4 4".to_owned(),
        "0 1".to_owned(),
        "1 2".to_owned(),
        "2 0".to_owned(),
        "2 1".to_owned(),
        "2 2".to_owned(),
        "quit".to_owned(),
        format!("SAVE   {path_str}  "),
        "generate".to_owned(),
        format!("load {path_str}"),
    ]);

    assert!(output(&controller).contains("saving successfully"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "4 4\n0 1 0 0\n0 0 1 0\n1 1 1 0\n0 0 0 0\n"
    );

    let grid = controller.grid().unwrap();
    assert_eq!(
        alive_positions(grid),
        vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
    );
}

#[test]
fn failed_save_is_reported() {
    let controller = run([
        "design",
        "1 1",
        "quit",
        "save /nonexistent/life/out.txt",
        "save",
    ]);

    let output = output(&controller);
    assert!(output.contains("save: failed to save file: /nonexistent/life/out.txt"));
    assert!(output.contains("save: missing file name"));
    assert_eq!(controller.grid().unwrap().rows(), 1);
}

#[test]
fn auto_run_pauses_resumes_and_exits() {
    let mut controller = Controller::new(
        ScriptedTerminal::new([
            "design", "5 5", "2 1", "2 2", "2 3", "quit", "run", "bogus", "", "exit", "print",
        ])
        .with_ticks([None, Some(Key::Enter)]),
        config(),
    );
    controller.run().unwrap();

    // Three generations of a blinker leave it vertical.
    let grid = controller.grid().unwrap();
    assert_eq!(alive_positions(grid), vec![(1, 2), (2, 2), (3, 2)]);
    assert_eq!(controller.mode(), Mode::Normal);

    let terminal = controller.terminal();
    assert_eq!(terminal.sleeps, vec![Duration::from_millis(10); 3]);

    // Design entry and exit, one per tick, and leaving auto-run.
    assert_eq!(terminal.clears, 2 + 3 + 1);

    let output = terminal.output();
    assert_eq!(output.matches("Press ENTER to suspend.").count(), 3);
    assert_eq!(output.matches("input error").count(), 1);
    assert!(output.contains("--> You have returned to normal mode."));
}

#[test]
fn only_enter_pauses_auto_run() {
    let mut controller = Controller::new(
        ScriptedTerminal::new(["design", "2 2", "0 0", "0 1", "1 0", "quit", "run", "exit"])
            .with_ticks([Some(Key::Other), Some(Key::Other), Some(Key::Enter)]),
        config(),
    );
    controller.run().unwrap();

    assert_eq!(controller.terminal().sleeps.len(), 3);
    assert_eq!(controller.grid().unwrap().live_count(), 4);
}

#[test]
fn run_without_grid_stays_in_normal_mode() {
    let controller = run(["run", "exit now", "exit"]);

    assert_eq!(controller.mode(), Mode::Normal);
    assert!(controller.terminal().sleeps.is_empty());

    let output = output(&controller);
    assert!(output.contains("no map yet!\n"));
    assert!(output.contains("Exit auto-run mode..."));
    assert!(output.contains("command not found: exit now"));
    assert!(output.contains("this command is only available in auto-run mode"));
}

#[test]
fn end_of_input_while_paused_leaves_auto_run() {
    let controller = run(["design", "1 1", "0 0", "quit", "run"]);

    assert_eq!(controller.mode(), Mode::Normal);
    assert_eq!(controller.grid().unwrap().live_count(), 0);
    assert_eq!(controller.terminal().sleeps.len(), 1);
}

#[test]
fn normal_mode_diagnostics() {
    let controller = run(["fly away", "print now", "quit", "", "HELP", "\\h"]);

    let output = output(&controller);
    assert!(output.contains("command not found: fly away"));
    assert!(output.contains("command not found: print now"));
    assert!(output.contains("this command is only available in design mode"));
    assert_eq!(output.matches("[design]").count(), 2);
}

#[test]
fn end_stops_reading() {
    let controller = run(["END", "print"]);

    let output = output(&controller);
    assert!(output.contains("See you next time!"));
    assert!(!output.contains("no map yet!"));
}

#[test]
fn welcome_shows_help() {
    let mut controller = controller(Vec::<String>::new());
    controller.welcome().unwrap();

    let output = output(&controller);
    assert!(output.contains("GAME OF LIFE"));
    assert!(output.contains("[load <filename>]"));
}
