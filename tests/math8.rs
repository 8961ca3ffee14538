mod tests {
    use myrtio_matrix_composer::math8::scale8;

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_full_scale_keeps_value() {
        for value in [0, 1, 17, 128, 254, 255] {
            assert_eq!(scale8(value, 255), value);
        }
    }
}
