mod common;
use common::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::collections::BTreeMap;

fn literal(n: i16) -> String {
    format!("({})", n)
}

#[test]
fn prop_wrapping_arithmetic() {
    fn property(a: i16, b: i16) -> bool {
        let out = run(&[&format!(
            "PRINT {}+{};\" \";{}-{};\" \";{}*{}",
            literal(a),
            literal(b),
            literal(a),
            literal(b),
            literal(a),
            literal(b)
        )]);
        out == format!(
            "{} {} {}\n",
            a.wrapping_add(b),
            a.wrapping_sub(b),
            a.wrapping_mul(b)
        )
    }
    let mut qc = quickcheck::QuickCheck::new().tests(200);
    qc.quickcheck(property as fn(i16, i16) -> bool);
}

#[test]
fn prop_division_truncates() {
    fn property(a: i16, b: i16) -> TestResult {
        if b == 0 {
            return TestResult::discard();
        }
        let out = run(&[&format!("PRINT {}/{}", literal(a), literal(b))]);
        TestResult::from_bool(out == format!("{}\n", a.wrapping_div(b)))
    }
    let mut qc = quickcheck::QuickCheck::new().tests(200);
    qc.quickcheck(property as fn(i16, i16) -> TestResult);
}

#[quickcheck]
fn prop_listing_sorted_last_write_wins(edits: Vec<(u16, u8)>) -> bool {
    let mut expected = BTreeMap::new();
    let mut r = session();
    for (number, tag) in edits {
        let number = number % 32767 + 1;
        let line = format!("{} REM {}", number, tag);
        enter(&mut r, &[&line]);
        expected.insert(number, line);
    }
    enter(&mut r, &["LIST"]);
    let listed = exec(&mut r);
    let wanted: String = expected.values().map(|line| format!("{}\n", line)).collect();
    listed == wanted
}

#[test]
fn prop_gosub_return_pairs() {
    fn property(depth: u8) -> TestResult {
        let depth = depth % 100 + 1;
        let mut r = session();
        enter(
            &mut r,
            &[
                "10 N=0",
                "20 GOSUB 100",
                "30 PRINT N",
                "40 END",
                "100 N=N+1",
                "110 IF N<D GOSUB 100",
                "120 RETURN",
            ],
        );
        enter(&mut r, &[&format!("D={}", depth), "RUN"]);
        let out = exec(&mut r);
        TestResult::from_bool(out == format!("{}\n", depth) && r.call_depth() == 0)
    }
    let mut qc = quickcheck::QuickCheck::new().tests(50);
    qc.quickcheck(property as fn(u8) -> TestResult);
}
