mod common;
use common::*;

#[test]
fn test_syntax_errors_point_at_token() {
    assert_eq!(
        run(&["LET A 1"]),
        "Syntax Error: Error #020: LET is missing an '=' but found '1'.\nLET A 1\n------^\n"
    );
    assert_eq!(
        run(&["10 IF A THEN END"]),
        "Syntax Error: Error #330: IF is missing the relational operator but found 'THEN'.\n10 IF A THEN END\n--------^\n"
    );
    assert_eq!(
        run(&["END 5"]),
        "Syntax Error: Error #294: Expected the end of the line but found '5'.\nEND 5\n----^\n"
    );
    assert_eq!(
        run(&["PRINT ,A"]),
        "Syntax Error: Error #339: Separators or colons cannot be the first item in a PRINT statement.\nPRINT ,A\n------^\n"
    );
}

#[test]
fn test_lexical_errors() {
    assert_eq!(
        run(&["10 PRINT \"abc"]),
        "Lexical Error: Error #331: Unterminated string (started at position 9).\n10 PRINT \"abc\n-------------^\n"
    );
    assert_eq!(
        run(&["PRINT 1 # 2"]),
        "Lexical Error: Error #293: Syntax error - unexpected expression : '#'.\nPRINT 1 # 2\n--------^\n"
    );
}

#[test]
fn test_line_number_range() {
    assert!(run(&["0 PRINT"]).starts_with("Syntax Error: Error #009:"));
    assert!(run(&["32768 END"])
        .starts_with("Syntax Error: Error #009: Line number is out of range (1-32767): '32768'."));
    assert_eq!(run(&["32767 END", "LIST"]), "32767 END\n");
}

#[test]
fn test_bad_line_is_not_stored() {
    let mut r = session();
    enter(&mut r, &["10 PRINT (1", "20 GOTO"]);
    let out = exec(&mut r);
    assert!(out.contains("Error #296:"));
    assert!(out.contains("Syntax Error: Error #037: Missing line number for 'GOTO'.\n20 GOTO\n-------^\n"));
    assert!(r.listing().is_empty());
}

#[test]
fn test_spaced_and_lowercase_keywords() {
    let out = run(&[
        "10 g o t o 30",
        "20 PRINT 1",
        "30 p r 2",
        "4 0 E N D",
        "RUN",
    ]);
    assert_eq!(out, "2\n");
    assert_eq!(run(&["1 0 0 PRINT 5", "LIST"]), "1 0 0 PRINT 5\n");
    assert_eq!(run(&["print 5*5"]), "25\n");
}

#[test]
fn test_variable_before_keyword() {
    let out = run(&["P=3", "IF 4>PRETURN"]);
    assert_eq!(
        out,
        "Runtime Error: Error #133: RETURN called with an empty call stack.\nIF 4>PRETURN\n------^\n"
    );
}

#[test]
fn test_then_is_optional() {
    assert_eq!(run(&["IF 2=2 THEN PRINT 1", "IF 2=2 PRINT 2"]), "1\n2\n");
}

#[test]
fn test_functions_need_parentheses() {
    assert!(run(&["PRINT RND 5"]).starts_with(
        "Syntax Error: Error #293: Syntax error - missing left parenthesis to the RND function."
    ));
}
