#![allow(non_snake_case)]

#[cfg(test)]
mod tests {
    use super::super::strings::shout;

    #[test]
    fn TestShoutEmpty() {
        assert_eq!(shout(""), "");
    }

    #[test]
    fn TestShoutAscii() {
        assert_eq!(shout("abc"), "ABC");
    }

    fn BenchmarkShout() {
        let _ = shout("a long sentence to shout");
    }
}
