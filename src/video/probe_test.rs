#[cfg(test)]
mod tests {

    use crate::video::{parse_frame_rate, DEFAULT_FRAME_RATE};

    #[test]
    fn test_parse_whole_frame_rate() {
        assert_eq!(parse_frame_rate("30/1"), Some(30.0));
        assert_eq!(parse_frame_rate("60/1"), Some(60.0));
    }

    #[test]
    fn test_parse_ntsc_frame_rate() {
        let fps = parse_frame_rate("30000/1001").unwrap();
        assert!((fps - 29.97).abs() < 0.01);
    }

    #[test]
    fn test_parse_degenerate_frame_rates() {
        // ffprobe reports "0/0" for streams without a usable rate
        assert_eq!(parse_frame_rate("0/0"), None);
        assert_eq!(parse_frame_rate("30/0"), None);
        assert_eq!(parse_frame_rate("0/1"), None);
    }

    #[test]
    fn test_parse_malformed_frame_rates() {
        assert_eq!(parse_frame_rate(""), None);
        assert_eq!(parse_frame_rate("30"), None);
        assert_eq!(parse_frame_rate("a/b"), None);
        assert_eq!(parse_frame_rate("1/2/3"), None);
    }

    #[test]
    fn test_default_frame_rate() {
        assert_eq!(DEFAULT_FRAME_RATE, 30.0);
    }
}
