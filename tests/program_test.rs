mod common;
use common::*;

#[test]
fn test_factorial() {
    assert_eq!(exec(include_str!("../demos/factorial.bas")), "120\n");
}

#[test]
fn test_fibonacci() {
    assert_eq!(
        exec(include_str!("../demos/fib.bas")),
        "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n55\n89\n"
    );
}

#[test]
fn test_gcd() {
    assert_eq!(exec(include_str!("../demos/gcd.bas")), "7\n");
}

#[test]
fn test_goto() {
    assert_eq!(
        exec(include_str!("../demos/goto.bas")),
        "Josh\nDave\nNanoBASIC ROCKS\n"
    );
}

#[test]
fn test_guess() {
    assert_eq!(
        exec_input(include_str!("../demos/guess.bas"), &["50", " 40 ", "42"]),
        "GUESS A NUMBER\nLOWER\nHIGHER\nGOT IT IN\t3\n"
    );
}

#[test]
fn test_variables() {
    let source = "10 LET A = 5\n20 LET B = 10\n30 LET C = A + B\n40 PRINT C\n";
    assert_eq!(exec(source), "15\n");
}

#[test]
fn test_shared_program() {
    use nanobasic::lang::Program;
    use nanobasic::mach::Runtime;
    use std::collections::VecDeque;
    use std::str::FromStr;

    let program = Program::from_str(include_str!("../demos/fib.bas")).unwrap();
    let mut first = Runtime::new(&program);
    let mut second = Runtime::new(&program);
    let mut input: VecDeque<String> = VecDeque::new();
    let mut a: Vec<String> = vec![];
    let mut b: Vec<String> = vec![];
    first.run(&mut input, &mut a).unwrap();
    second.run(&mut input, &mut b).unwrap();
    assert_eq!(a, b);
    assert_eq!(first.vars().fetch("N"), 144);
}
