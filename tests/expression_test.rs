mod common;
use common::*;

#[test]
fn test_precedence() {
    assert_eq!(run(&["PRINT 2+3*4"]), "14\n");
    assert_eq!(run(&["PRINT (2+3)*4"]), "20\n");
    assert_eq!(run(&["PRINT 10-2-3"]), "5\n");
    assert_eq!(run(&["PRINT 8/2/2"]), "2\n");
    assert_eq!(run(&["PRINT -2*-3"]), "6\n");
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(run(&["PRINT 7/2"]), "3\n");
    assert_eq!(run(&["PRINT -7/2"]), "-3\n");
    assert_eq!(run(&["PRINT 7/-2"]), "-3\n");
}

#[test]
fn test_wrapping_arithmetic() {
    assert_eq!(run(&["PRINT 32767+1"]), "-32768\n");
    assert_eq!(run(&["PRINT -32768-1"]), "32767\n");
    assert_eq!(run(&["PRINT 200*200"]), "-25536\n");
    assert_eq!(run(&["PRINT -32768/-1"]), "-32768\n");
}

#[test]
fn test_unary_plus_is_absolute() {
    assert_eq!(run(&["PRINT +-5"]), "5\n");
    assert_eq!(run(&["A=-9", "PRINT +A"]), "9\n");
    assert_eq!(run(&["PRINT 3-+-2"]), "1\n");
}

#[test]
fn test_spaced_digits() {
    assert_eq!(run(&["PRINT 1 000 + 2"]), "1002\n");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        run(&["PRINT 1/0"]),
        "Runtime Error: Error #224: Division by zero.\nPRINT 1/0\n-------^\n"
    );
    let out = run(&["10 A=0", "20 PRINT 5/A", "30 END", "RUN"]);
    assert_eq!(
        out,
        "Runtime Error: Error #224: Division by zero.\n20 PRINT 5/A\n----------^\n"
    );
}

#[test]
fn test_rnd_range() {
    let out = run(&[
        "10 A=RND(6)",
        "20 IF A<0 PRINT \"LOW\"",
        "30 IF A>5 PRINT \"HIGH\"",
        "40 N=N+1",
        "50 IF N<500 GOTO 10",
        "60 PRINT \"DONE\"",
        "70 END",
        "N=0",
        "RUN",
    ]);
    assert_eq!(out, "DONE\n");
}

#[test]
fn test_rnd_seeded_sessions_agree() {
    let line = "PRINT RND(1000);\" \";RND(1000);\" \";RND(1000)";
    assert_eq!(run(&[line]), run(&[line]));
}

#[test]
fn test_rnd_argument_errors() {
    assert_eq!(
        run(&["PRINT RND(0)"]),
        "Runtime Error: Error #259: RND(0) not allowed.\nPRINT RND(0)\n------^\n"
    );
    assert!(run(&["PRINT RND(-4)"])
        .starts_with("Runtime Error: Error #259: RND argument must be positive, given '-4'."));
}

#[test]
fn test_usr_read_write() {
    let out = run(&[
        "PRINT USR(280,300,99)",
        "PRINT USR(276,300)",
        "PRINT USR(276,S)",
        "PRINT USR(280,-1,7)",
        "PRINT USR(276,65535)",
    ]);
    assert_eq!(out, "99\n99\n0\n7\n7\n");
}

#[test]
fn test_usr_memory_cleared_by_clear() {
    let out = run(&["PRINT USR(280,10,5)", "CLEAR", "PRINT USR(276,10)"]);
    assert_eq!(out, "5\n0\n");
}

#[test]
fn test_usr_errors() {
    assert_eq!(
        run(&["PRINT USR(1,2)"]),
        "Runtime Error: Error #360: USR only supports read (276) or write (280) subroutines, given '1'.\nPRINT USR(1,2)\n------^\n"
    );
    assert!(run(&["PRINT USR(276)"]).starts_with("Runtime Error: Error #361:"));
    assert!(run(&["PRINT USR(280,5)"]).starts_with("Runtime Error: Error #362:"));
    assert!(run(&["PRINT USR(280,5,256)"]).starts_with(
        "Runtime Error: Error #362: USR write routine only supports values in AReg between 0 and 255, given '256'."
    ));
}

#[test]
fn test_variables_survive_clear() {
    assert_eq!(run(&["Z=12", "CLEAR", "PRINT Z"]), "12\n");
}
