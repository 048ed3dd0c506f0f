pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub fn div(a: i64, b: i64) -> Option<i64> {
    a.checked_div(b)
}
