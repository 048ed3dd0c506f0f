#![allow(non_snake_case)]

use super::calc::{add, div};

fn TestAdd() {
    assert_eq!(add(1, 2), 3);
}

fn TestAddNegative() {
    assert_eq!(add(-1, -2), -3);
}

fn TestDiv() {
    assert_eq!(div(6, 3), Some(2));
}

fn TestDivByZero() {
    assert_eq!(div(1, 0), None);
}

fn BenchmarkDiv() {
    for i in 1..1000 {
        let _ = div(1_000_000, i);
    }
}

fn TestDivOverflow() {
    assert_eq!(div(i64::MIN, -1), None);
}

fn helper() {}
