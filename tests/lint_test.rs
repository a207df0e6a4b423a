mod common;
use common::*;

#[test]
fn test_clean_program() {
    let out = run(&["10 INPUT A", "20 PRINT A", "30 END", "%lint", "%lint strict"]);
    assert_eq!(out, "");
}

#[test]
fn test_all_findings_in_line_order() {
    let out = run(&["30 CLEAR", "10 PRINT X", "20 GOTO 50", "%lint"]);
    assert_eq!(
        out,
        "LINT #04: Potentially uninitialized variable 'X'.\n10 PRINT X\n---------^\n\
         LINT #03: GOTO target not in program: '50'.\n20 GOTO 50\n--------^\n\
         LINT #02: CLEAR must never be in a program.\n30 CLEAR\n---^\n\
         LINT #01: Missing END statement in the program.\n"
    );
}

#[test]
fn test_strict_flags_subroutine_assignment() {
    let program = [
        "10 GOSUB 100",
        "20 PRINT B",
        "30 END",
        "100 B=5",
        "110 RETURN",
    ];
    let mut r = session();
    enter(&mut r, &program);
    enter(&mut r, &["%lint"]);
    assert_eq!(exec(&mut r), "");
    enter(&mut r, &["%LINT STRICT"]);
    assert_eq!(
        exec(&mut r),
        "LINT #04: Potentially uninitialized variable 'B'.\n20 PRINT B\n---------^\n"
    );
}

#[test]
fn test_gosub_target_and_computed_targets() {
    let out = run(&["10 GOSUB 0", "20 GOTO 10*2", "30 END", "%lint"]);
    assert_eq!(
        out,
        "LINT #03: GOSUB target not in program: '0'.\n10 GOSUB 0\n---------^\n"
    );
}

#[test]
fn test_lint_does_not_run() {
    let mut r = session();
    enter(&mut r, &["10 PRINT 1", "20 END", "%lint"]);
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.listing().len(), 2);
    assert!(!r.vars().is_defined(tinybasic::lang::Ident::from_char('A').unwrap()));
}

#[test]
fn test_empty_program_and_bad_option() {
    assert_eq!(run(&["%lint"]), "");
    assert_eq!(
        run(&["%lint loose"]),
        "CLE #04: Unknown %lint option: 'loose'.\n"
    );
}
