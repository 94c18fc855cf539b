macro_rules! assert_close {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right) = ($left, $right);
        assert!((left - right).abs() < $tolerance, "{left} is not close to {right}");
    }};
}
