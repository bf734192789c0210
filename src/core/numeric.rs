/// Rounds to `decimals` places with ties going to the even neighbour,
/// which keeps repeated per-row rounding from drifting in one direction.
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(19.254_9, 2), 19.25);
        assert_eq!(round_dp(19.256, 2), 19.26);
        assert_eq!(round_dp(96_250.000_000_01, 0), 96_250.0);
    }

    #[test]
    fn test_ties_go_to_even() {
        assert_eq!(round_dp(2.5, 0), 2.0);
        assert_eq!(round_dp(3.5, 0), 4.0);
        assert_eq!(round_dp(-2.5, 0), -2.0);
    }
}
